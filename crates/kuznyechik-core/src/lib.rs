//! GOST R 34.12-2015 "Kuznyechik" block cipher core.
//!
//! This crate mirrors the reference algorithm and provides:
//! - GF(2^8) field arithmetic and the linear diffusion layer.
//! - The pi substitution permutation and its inverse.
//! - Round-constant derivation and the Feistel key schedule.
//! - Single-block encryption and decryption.
//!
//! The implementation aims for clarity and testability rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
mod linear;
mod sbox;

pub use crate::block::{block_from_slice, xor_in_place, Block, BLOCK_SIZE, KEY_SIZE};
pub use crate::cipher::Kuznyechik;
pub use crate::error::CipherError;
pub use crate::key::RoundKeys;
