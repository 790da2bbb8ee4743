//! Imito (authentication tag) generation.

use kuznyechik_core::{
    block_from_slice, xor_in_place, Block, CipherError, Kuznyechik, RoundKeys, BLOCK_SIZE,
};

/// Authentication tag length in bytes (half a block).
pub const TAG_SIZE: usize = 8;

/// Doubling constant for 128-bit blocks from GOST R 34.13-2015.
const B128: Block = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x87,
];

/// Derives the subkey folded into the final block before tagging.
///
/// The all-zero block is encrypted and the result shifted left by one bit
/// across the whole 16 bytes. If the last byte is non-zero after the
/// shift, the value is XORed with `B128`. The condition tests the
/// post-shift last byte, not the pre-shift top bit of the usual CMAC
/// doubling; existing tags depend on this order.
pub fn derive_finalization_subkey(
    cipher: &Kuznyechik,
    keys: &RoundKeys,
) -> Result<Block, CipherError> {
    let mut subkey = cipher.encrypt_block(&[0u8; BLOCK_SIZE], keys)?;

    let mut carry = 0u8;
    for byte in subkey.iter_mut().rev() {
        let shifted_out = *byte >> 7;
        *byte = (*byte << 1) | carry;
        carry = shifted_out;
    }

    if subkey[BLOCK_SIZE - 1] != 0 {
        xor_in_place(&mut subkey, &B128);
    }

    Ok(subkey)
}

/// Computes the 8-byte imito tag over `data`.
///
/// The first block is encrypted directly; every following block is XORed
/// into the running accumulator which is then re-encrypted, with the
/// finalization subkey additionally folded into the last block. The tag is
/// the first half of the final accumulator.
///
/// `data` must be a positive multiple of 16 bytes and at least two blocks
/// long, otherwise the call fails with `InvalidInputLength`.
pub fn generate_tag(
    cipher: &Kuznyechik,
    data: &[u8],
    keys: &RoundKeys,
) -> Result<[u8; TAG_SIZE], CipherError> {
    if data.len() < 2 * BLOCK_SIZE || data.len() % BLOCK_SIZE != 0 {
        return Err(CipherError::InvalidInputLength);
    }

    let block_count = data.len() / BLOCK_SIZE;
    let mut accumulator = cipher.encrypt_block(&data[..BLOCK_SIZE], keys)?;

    for index in 1..block_count - 1 {
        let chunk = block_from_slice(&data[index * BLOCK_SIZE..(index + 1) * BLOCK_SIZE])?;
        xor_in_place(&mut accumulator, &chunk);
        accumulator = cipher.encrypt_block(&accumulator, keys)?;
    }

    let last = block_from_slice(&data[(block_count - 1) * BLOCK_SIZE..])?;
    let subkey = derive_finalization_subkey(cipher, keys)?;
    xor_in_place(&mut accumulator, &last);
    xor_in_place(&mut accumulator, &subkey);
    accumulator = cipher.encrypt_block(&accumulator, keys)?;

    let mut tag = [0u8; TAG_SIZE];
    tag.copy_from_slice(&accumulator[..TAG_SIZE]);
    Ok(tag)
}
