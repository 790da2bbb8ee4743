//! Linear diffusion layer.
//!
//! The transforms in this module index state least-significant-byte-first,
//! the convention the field arithmetic of the standard is written in.
//! Callers holding most-significant-byte-first blocks must reverse byte
//! order around these calls; `cipher` keeps that reversal confined to the
//! round functions so the internal convention never reaches the public API.

use crate::block::{Block, BLOCK_SIZE};
use crate::gf;

/// Coefficients of the linear form, least-significant-byte-first:
/// coefficient `i` multiplies state byte `i`.
pub const COEFFICIENTS: [u8; 16] = [
    0x01, 0x94, 0x20, 0x85, 0x10, 0xC2, 0xC0, 0x01, 0xFB, 0x01, 0xC0, 0xC2, 0x10, 0x85, 0x20, 0x94,
];

/// Characteristic linear form of the diffusion matrix: the XOR-sum of each
/// state byte multiplied by its coefficient.
#[inline]
pub fn fold(state: &Block, coefficients: &[u8; 16]) -> u8 {
    let mut acc = 0u8;
    for i in 0..BLOCK_SIZE {
        acc ^= gf::multiply(state[i], coefficients[i]);
    }
    acc
}

/// Inverse-ordering linear form: coefficients are applied with a cyclic
/// offset of one, coefficient 0 landing on the last byte.
#[inline]
pub fn fold_inverse(state: &Block, coefficients: &[u8; 16]) -> u8 {
    let mut acc = 0u8;
    for i in 0..BLOCK_SIZE - 1 {
        acc ^= gf::multiply(state[i], coefficients[i + 1]);
    }
    acc ^ gf::multiply(state[BLOCK_SIZE - 1], coefficients[0])
}

/// Full diffusion layer: 16 iterations of the feedback shift register,
/// each folding the state and feeding the result in at the top.
pub fn transform(state: &mut Block, coefficients: &[u8; 16]) {
    for _ in 0..BLOCK_SIZE {
        let folded = fold(state, coefficients);
        for j in 0..BLOCK_SIZE - 1 {
            state[j] = state[j + 1];
        }
        state[BLOCK_SIZE - 1] = folded;
    }
}

/// Inverse of [`transform`]: the register runs backwards, feeding the
/// inverse fold in at the bottom.
pub fn transform_inverse(state: &mut Block, coefficients: &[u8; 16]) {
    for _ in 0..BLOCK_SIZE {
        let folded = fold_inverse(state, coefficients);
        for j in (1..BLOCK_SIZE).rev() {
            state[j] = state[j - 1];
        }
        state[0] = folded;
    }
}
