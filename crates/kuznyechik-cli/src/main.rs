//! Command-line interface for the Kuznyechik cipher and its modes.

#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use kuznyechik_core::{Kuznyechik, RoundKeys, BLOCK_SIZE, KEY_SIZE};
use kuznyechik_modes::{apply_gamma, generate_tag, SYNC_SIZE};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Kuznyechik (GOST R 34.12-2015) CLI.
#[derive(Parser)]
#[command(
    name = "kuznyechik",
    version,
    author,
    about = "GOST R 34.12-2015 Kuznyechik block cipher CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a single 16-byte block.
    EncryptBlock {
        /// Master key as 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt a single 16-byte block.
    DecryptBlock {
        /// Master key as 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Encrypt or decrypt data in gamma (counter) mode; the operation is
    /// symmetric.
    Gamma {
        /// Master key as 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Synchronization value as 16 hex characters.
        #[arg(long, value_name = "HEX")]
        sync_hex: String,
        /// Data as a multiple of 32 hex characters.
        #[arg(long, value_name = "HEX")]
        data_hex: String,
    },
    /// Compute the 8-byte imito tag over data of at least two blocks.
    Mac {
        /// Master key as 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Data as a multiple of 32 hex characters, at least 64.
        #[arg(long, value_name = "HEX")]
        data_hex: String,
    },
    /// Run a local demo: random key and payload, gamma round-trip, tag.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::EncryptBlock { key_hex, block_hex } => cmd_encrypt_block(&key_hex, &block_hex),
        Commands::DecryptBlock { key_hex, block_hex } => cmd_decrypt_block(&key_hex, &block_hex),
        Commands::Gamma {
            key_hex,
            sync_hex,
            data_hex,
        } => cmd_gamma(&key_hex, &sync_hex, &data_hex),
        Commands::Mac { key_hex, data_hex } => cmd_mac(&key_hex, &data_hex),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_encrypt_block(key_hex: &str, block_hex: &str) -> Result<()> {
    let (cipher, keys) = cipher_for_key(key_hex)?;
    let block = parse_hex(block_hex, "block")?;
    if block.len() != BLOCK_SIZE {
        bail!("block must be 16 bytes (32 hex characters)");
    }
    let ciphertext = cipher.encrypt_block(&block, &keys)?;
    println!("{}", hex::encode(ciphertext));
    Ok(())
}

fn cmd_decrypt_block(key_hex: &str, block_hex: &str) -> Result<()> {
    let (cipher, keys) = cipher_for_key(key_hex)?;
    let block = parse_hex(block_hex, "block")?;
    if block.len() != BLOCK_SIZE {
        bail!("block must be 16 bytes (32 hex characters)");
    }
    let plaintext = cipher.decrypt_block(&block, &keys)?;
    println!("{}", hex::encode(plaintext));
    Ok(())
}

fn cmd_gamma(key_hex: &str, sync_hex: &str, data_hex: &str) -> Result<()> {
    let (cipher, keys) = cipher_for_key(key_hex)?;
    let sync = parse_hex(sync_hex, "sync")?;
    if sync.len() != SYNC_SIZE {
        bail!("sync must be 8 bytes (16 hex characters)");
    }
    let data = parse_hex(data_hex, "data")?;
    let result = apply_gamma(&cipher, &data, &sync, &keys)?;
    println!("{}", hex::encode(result));
    Ok(())
}

fn cmd_mac(key_hex: &str, data_hex: &str) -> Result<()> {
    let (cipher, keys) = cipher_for_key(key_hex)?;
    let data = parse_hex(data_hex, "data")?;
    let tag = generate_tag(&cipher, &data, &keys)?;
    println!("{}", hex::encode(tag));
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = [0u8; KEY_SIZE];
    rng.fill_bytes(&mut key);
    let mut sync = [0u8; SYNC_SIZE];
    rng.fill_bytes(&mut sync);
    let mut payload = [0u8; 4 * BLOCK_SIZE];
    rng.fill_bytes(&mut payload);

    let cipher = Kuznyechik::new();
    let keys = cipher.derive_round_keys(&key)?;

    let encrypted = apply_gamma(&cipher, &payload, &sync, &keys)?;
    let decrypted = apply_gamma(&cipher, &encrypted, &sync, &keys)?;
    let tag = generate_tag(&cipher, &payload, &keys)?;

    println!("demo key:   {}", hex::encode(key));
    println!("demo sync:  {}", hex::encode(sync));
    println!("plaintext:  {}", hex::encode(payload));
    println!("ciphertext: {}", hex::encode(&encrypted));
    println!("decrypted:  {}", hex::encode(&decrypted));
    println!("imito tag:  {}", hex::encode(tag));
    if decrypted != payload {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn cipher_for_key(key_hex: &str) -> Result<(Kuznyechik, RoundKeys)> {
    let key = parse_hex(key_hex, "key")?;
    if key.len() != KEY_SIZE {
        bail!("master key must be 32 bytes (64 hex characters)");
    }
    let cipher = Kuznyechik::new();
    let keys = cipher.derive_round_keys(&key)?;
    Ok((cipher, keys))
}

fn parse_hex(hex_str: &str, what: &str) -> Result<Vec<u8>> {
    hex::decode(hex_str.trim()).with_context(|| format!("decode {what} hex"))
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
