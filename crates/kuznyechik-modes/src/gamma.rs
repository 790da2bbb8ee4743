//! Gamma (counter keystream) mode.

use kuznyechik_core::{CipherError, Kuznyechik, RoundKeys, BLOCK_SIZE};

use crate::longadd::add_big_endian;

/// Synchronization value length in bytes.
pub const SYNC_SIZE: usize = 8;

/// Encrypts or decrypts `data` by XOR with a counter-derived keystream.
///
/// The counter block starts as the 8-byte `sync` value zero-padded to 16
/// bytes and advances by one per block. Applying the operation twice with
/// the same `sync` and keys restores the original data.
///
/// `data` must be a positive multiple of 16 bytes and `sync` exactly
/// 8 bytes, otherwise the call fails with `InvalidInputLength` before any
/// keystream is produced.
pub fn apply_gamma(
    cipher: &Kuznyechik,
    data: &[u8],
    sync: &[u8],
    keys: &RoundKeys,
) -> Result<Vec<u8>, CipherError> {
    if sync.len() != SYNC_SIZE {
        return Err(CipherError::InvalidInputLength);
    }
    if data.is_empty() || data.len() % BLOCK_SIZE != 0 {
        return Err(CipherError::InvalidInputLength);
    }

    let mut counter = [0u8; BLOCK_SIZE];
    counter[..SYNC_SIZE].copy_from_slice(sync);

    let mut output = Vec::with_capacity(data.len());
    for chunk in data.chunks(BLOCK_SIZE) {
        let keystream = cipher.encrypt_block(&counter, keys)?;
        for (data_byte, key_byte) in chunk.iter().zip(keystream.iter()) {
            output.push(data_byte ^ key_byte);
        }
        advance_counter(&mut counter);
    }

    Ok(output)
}

/// Advances the counter by one, renormalizing the minimal-length sum back
/// to the fixed 16-byte width: a 17th carry byte is dropped and stripped
/// leading zeros are restored.
fn advance_counter(counter: &mut [u8; BLOCK_SIZE]) {
    let sum = add_big_endian(counter, &[0x01]);
    let take = sum.len().min(BLOCK_SIZE);
    counter.fill(0);
    counter[BLOCK_SIZE - take..].copy_from_slice(&sum[sum.len() - take..]);
}
