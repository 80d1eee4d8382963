//! Generic block cipher trait

use crate::error::{CipherModeError, Result};

/// Trait for a keyed block cipher.
///
/// Implementors own their round-key schedule, so a value of the implementing
/// type is bound to exactly one key for its whole lifetime.
pub trait BlockCipher {
    /// Encrypts a single block
    fn encrypt(&self, block: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts a single block
    fn decrypt(&self, block: &[u8]) -> Result<Vec<u8>>;

    /// Returns the block size of the cipher in bytes
    fn block_size(&self) -> usize;
}

/// Checks that `block` is exactly `expected` bytes long.
pub fn ensure_block_len(block: &[u8], expected: usize) -> Result<()> {
    if block.len() != expected {
        return Err(CipherModeError::InvalidBlockLength {
            expected,
            got: block.len(),
        });
    }
    Ok(())
}
