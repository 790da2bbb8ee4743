//! Stream and authentication modes over the Kuznyechik block core.
//!
//! - Gamma mode: counter-derived keystream XOR, symmetric for encryption
//!   and decryption.
//! - Imito generation: CBC-MAC-style 8-byte tag with a derived
//!   finalization subkey.
//! - Big-endian exact addition, used to advance the gamma counter.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod gamma;
mod imito;
mod longadd;

pub use crate::gamma::{apply_gamma, SYNC_SIZE};
pub use crate::imito::{derive_finalization_subkey, generate_tag, TAG_SIZE};
pub use crate::longadd::add_big_endian;
