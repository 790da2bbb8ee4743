//! Cipher context, key schedule, and block encryption/decryption.

use crate::block::{self, xor_in_place, Block, BLOCK_SIZE, KEY_SIZE};
use crate::error::CipherError;
use crate::key::RoundKeys;
use crate::linear::{self, COEFFICIENTS};
use crate::sbox::{self, PI};

/// Number of round constants consumed by the key schedule.
const ROUND_CONSTANT_COUNT: usize = 32;

/// Immutable cipher context.
///
/// Bundles the substitution table, its inverse, the linear coefficients,
/// and the 32 derived round constants. Construction performs the one-time
/// round-constant derivation; afterwards the context is read-only and may
/// be shared freely across threads.
///
/// Public block I/O is most-significant-byte-first throughout; the
/// least-significant-byte-first convention of the linear layer stays
/// inside the round functions.
#[derive(Clone)]
pub struct Kuznyechik {
    sbox: [u8; 256],
    sbox_inverse: [u8; 256],
    coefficients: [u8; 16],
    round_constants: [Block; ROUND_CONSTANT_COUNT],
}

impl Kuznyechik {
    /// Builds the context: inverse substitution table plus round constants.
    pub fn new() -> Self {
        Self {
            sbox: PI,
            sbox_inverse: sbox::invert_table(&PI),
            coefficients: COEFFICIENTS,
            round_constants: build_round_constants(),
        }
    }

    /// Read-only view of the 32 round constants.
    pub fn round_constants(&self) -> &[Block; 32] {
        &self.round_constants
    }

    /// One LSX round: key XOR, then substitution and diffusion applied in
    /// the internal byte order.
    fn lsx_round(&self, state: &mut Block, key: &Block) {
        xor_in_place(state, key);
        state.reverse();
        sbox::substitute(state, &self.sbox);
        linear::transform(state, &self.coefficients);
        state.reverse();
    }

    /// Inverse LSX round: key XOR, then inverse diffusion and inverse
    /// substitution in the internal byte order.
    fn lsx_round_inverse(&self, state: &mut Block, key: &Block) {
        xor_in_place(state, key);
        state.reverse();
        linear::transform_inverse(state, &self.coefficients);
        sbox::substitute(state, &self.sbox_inverse);
        state.reverse();
    }

    /// Expands a 32-byte master key into the ten round keys.
    ///
    /// Keys 0 and 1 are the two halves of the master key; each further
    /// pair comes out of an 8-step Feistel pass that consumes eight round
    /// constants, even steps feeding k2 and odd steps feeding k1.
    pub fn derive_round_keys(&self, master_key: &[u8]) -> Result<RoundKeys, CipherError> {
        if master_key.len() != KEY_SIZE {
            return Err(CipherError::InvalidKeyLength);
        }

        let mut keys = [[0u8; BLOCK_SIZE]; 10];
        keys[0].copy_from_slice(&master_key[..BLOCK_SIZE]);
        keys[1].copy_from_slice(&master_key[BLOCK_SIZE..]);

        let mut k1 = keys[0];
        let mut k2 = keys[1];

        for group in 0..4 {
            for step in 0..8 {
                let constant = &self.round_constants[group * 8 + step];
                if step % 2 == 0 {
                    let mut feed = k1;
                    self.lsx_round(&mut feed, constant);
                    xor_in_place(&mut k2, &feed);
                } else {
                    let mut feed = k2;
                    self.lsx_round(&mut feed, constant);
                    xor_in_place(&mut k1, &feed);
                }
            }
            keys[group * 2 + 2] = k1;
            keys[group * 2 + 3] = k2;
        }

        Ok(RoundKeys(keys))
    }

    /// Encrypts a single 16-byte block: nine LSX rounds and a final key XOR.
    pub fn encrypt_block(&self, plaintext: &[u8], keys: &RoundKeys) -> Result<Block, CipherError> {
        let mut state = block::block_from_slice(plaintext)?;
        for round in 0..9 {
            self.lsx_round(&mut state, keys.get(round));
        }
        xor_in_place(&mut state, keys.get(9));
        Ok(state)
    }

    /// Decrypts a single 16-byte block; exact inverse of [`encrypt_block`].
    pub fn decrypt_block(&self, ciphertext: &[u8], keys: &RoundKeys) -> Result<Block, CipherError> {
        let mut state = block::block_from_slice(ciphertext)?;
        for round in (1..10).rev() {
            self.lsx_round_inverse(&mut state, keys.get(round));
        }
        xor_in_place(&mut state, keys.get(0));
        Ok(state)
    }
}

impl Default for Kuznyechik {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives the 32 round constants: constant `i` is the diffusion of the
/// block holding `i + 1` in its last byte, computed in the internal byte
/// order and stored most-significant-byte-first.
fn build_round_constants() -> [Block; ROUND_CONSTANT_COUNT] {
    let mut constants = [[0u8; BLOCK_SIZE]; ROUND_CONSTANT_COUNT];
    for (index, constant) in constants.iter_mut().enumerate() {
        constant[BLOCK_SIZE - 1] = (index + 1) as u8;
        constant.reverse();
        linear::transform(constant, &COEFFICIENTS);
        constant.reverse();
    }
    constants
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    const TEST_KEY: [u8; 32] = [
        0x88, 0x99, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66,
        0x77, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54, 0x32, 0x10, 0x01, 0x23, 0x45, 0x67, 0x89, 0xAB,
        0xCD, 0xEF,
    ];
    const TEST_PLAIN: [u8; 16] = [
        0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x00, 0xFF, 0xEE, 0xDD, 0xCC, 0xBB, 0xAA, 0x99,
        0x88,
    ];
    const TEST_CIPHER: [u8; 16] = [
        0x7F, 0x67, 0x9D, 0x90, 0xBE, 0xBC, 0x24, 0x30, 0x5A, 0x46, 0x8D, 0x42, 0xB9, 0xD4, 0xED,
        0xCD,
    ];

    #[test]
    fn encrypt_matches_reference_vector() {
        let cipher = Kuznyechik::new();
        let keys = cipher.derive_round_keys(&TEST_KEY).unwrap();
        let ct = cipher.encrypt_block(&TEST_PLAIN, &keys).unwrap();
        assert_eq!(ct, TEST_CIPHER);
    }

    #[test]
    fn decrypt_matches_reference_vector() {
        let cipher = Kuznyechik::new();
        let keys = cipher.derive_round_keys(&TEST_KEY).unwrap();
        let pt = cipher.decrypt_block(&TEST_CIPHER, &keys).unwrap();
        assert_eq!(pt, TEST_PLAIN);
    }

    #[test]
    fn first_two_round_keys_are_master_key_halves() {
        let cipher = Kuznyechik::new();
        let keys = cipher.derive_round_keys(&TEST_KEY).unwrap();
        assert_eq!(keys.get(0)[..], TEST_KEY[..16]);
        assert_eq!(keys.get(1)[..], TEST_KEY[16..]);
    }

    #[test]
    fn round_constants_are_distinct() {
        let cipher = Kuznyechik::new();
        let constants = cipher.round_constants();
        for i in 0..constants.len() {
            for j in i + 1..constants.len() {
                assert_ne!(constants[i], constants[j]);
            }
        }
    }

    #[test]
    fn key_schedule_is_deterministic() {
        let cipher = Kuznyechik::new();
        let first = cipher.derive_round_keys(&TEST_KEY).unwrap();
        let second = cipher.derive_round_keys(&TEST_KEY).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let cipher = Kuznyechik::new();
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut key_bytes = [0u8; 32];
            let mut pt = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut pt);
            let keys = cipher.derive_round_keys(&key_bytes).unwrap();
            let ct = cipher.encrypt_block(&pt, &keys).unwrap();
            let decrypted = cipher.decrypt_block(&ct, &keys).unwrap();
            assert_eq!(decrypted, pt);
        }
    }

    #[test]
    fn short_key_is_rejected() {
        let cipher = Kuznyechik::new();
        assert_eq!(
            cipher.derive_round_keys(&TEST_KEY[..31]),
            Err(CipherError::InvalidKeyLength)
        );
    }

    #[test]
    fn wrong_block_lengths_are_rejected() {
        let cipher = Kuznyechik::new();
        let keys = cipher.derive_round_keys(&TEST_KEY).unwrap();
        assert_eq!(
            cipher.encrypt_block(&TEST_PLAIN[..15], &keys),
            Err(CipherError::InvalidBlockLength)
        );
        let long = [0u8; 17];
        assert_eq!(
            cipher.decrypt_block(&long, &keys),
            Err(CipherError::InvalidBlockLength)
        );
    }
}
