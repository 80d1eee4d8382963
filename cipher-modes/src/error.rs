//! Error types for cipher mode operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherModeError {
    #[error("Invalid block length: expected {expected} bytes, got {got}")]
    InvalidBlockLength { expected: usize, got: usize },

    #[error("Invalid IV length: expected {expected} bytes, got {got}")]
    InvalidIvLength { expected: usize, got: usize },

    #[error("Invalid ciphertext length {len} (must be a non-zero multiple of {block_size})")]
    InvalidCiphertextLength { len: usize, block_size: usize },

    /// Wrong key, IV or mode; never transient.
    #[error("Decryption failed: invalid PKCS#7 padding")]
    InvalidPadding,

    #[error("IV is required for CBC decryption")]
    MissingIv,

    #[error("Unsupported mode '{0}' (expected ECB or CBC)")]
    UnsupportedMode(String),
}

pub type Result<T> = std::result::Result<T, CipherModeError>;
