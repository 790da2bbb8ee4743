//! Error type for cipher operations.

/// Rejection of malformed caller input.
///
/// Every variant is a caller contract violation detected before any
/// transform runs; the engine has no transient failure modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// Master key is not exactly 32 bytes.
    InvalidKeyLength,
    /// Single-block operation was given other than 16 bytes.
    InvalidBlockLength,
    /// Multi-block operation was given a length that is not a positive
    /// multiple of 16 bytes, a sync value that is not 8 bytes, or a MAC
    /// input shorter than two blocks.
    InvalidInputLength,
}

impl core::fmt::Display for CipherError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CipherError::InvalidKeyLength => {
                write!(f, "master key must be exactly 32 bytes")
            }
            CipherError::InvalidBlockLength => {
                write!(f, "block must be exactly 16 bytes")
            }
            CipherError::InvalidInputLength => {
                write!(f, "input length violates the operation's block contract")
            }
        }
    }
}

impl std::error::Error for CipherError {}
