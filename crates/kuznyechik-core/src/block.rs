//! Block representation helpers.

use crate::error::CipherError;

/// Cipher block of 16 bytes.
pub type Block = [u8; 16];

/// Block length in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Master key length in bytes.
pub const KEY_SIZE: usize = 32;

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Copies a slice into a `Block`, rejecting any length other than 16 bytes.
#[inline]
pub fn block_from_slice(data: &[u8]) -> Result<Block, CipherError> {
    if data.len() != BLOCK_SIZE {
        return Err(CipherError::InvalidBlockLength);
    }
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(data);
    Ok(block)
}
