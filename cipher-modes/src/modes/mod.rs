//! Cipher modes implementation

pub mod cbc;
pub mod ecb;

use std::fmt;
use std::str::FromStr;

use crate::{error::CipherModeError, utils, BlockCipher, Result};

/// Main struct for cipher modes
pub struct CipherModes;

/// Block chaining mode selected by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Ecb,
    Cbc,
}

impl FromStr for Mode {
    type Err = CipherModeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ECB" => Ok(Mode::Ecb),
            "CBC" => Ok(Mode::Cbc),
            _ => Err(CipherModeError::UnsupportedMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Ecb => write!(f, "ECB"),
            Mode::Cbc => write!(f, "CBC"),
        }
    }
}

impl CipherModes {
    /// Encrypt `plaintext` under `mode`.
    ///
    /// Returns the ciphertext and, for CBC, the IV that was used: the
    /// caller's IV when given, otherwise a freshly generated one. ECB ignores
    /// `iv` and returns `None`.
    pub fn encrypt<C: BlockCipher>(
        cipher: &C,
        plaintext: &[u8],
        mode: Mode,
        iv: Option<&[u8]>,
    ) -> Result<(Vec<u8>, Option<Vec<u8>>)> {
        match mode {
            Mode::Ecb => Ok((Self::ecb_encrypt(cipher, plaintext)?, None)),
            Mode::Cbc => {
                let iv = match iv {
                    Some(iv) => iv.to_vec(),
                    None => utils::generate_iv(cipher.block_size()),
                };
                let ciphertext = Self::cbc_encrypt(cipher, plaintext, &iv)?;
                Ok((ciphertext, Some(iv)))
            }
        }
    }

    /// Decrypt `ciphertext` under `mode`. CBC requires the IV used for
    /// encryption.
    pub fn decrypt<C: BlockCipher>(
        cipher: &C,
        ciphertext: &[u8],
        mode: Mode,
        iv: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        match mode {
            Mode::Ecb => Self::ecb_decrypt(cipher, ciphertext),
            Mode::Cbc => {
                let iv = iv.ok_or(CipherModeError::MissingIv)?;
                Self::cbc_decrypt(cipher, ciphertext, iv)
            }
        }
    }

    /// List all supported cipher modes
    pub fn supported_modes() -> Vec<&'static str> {
        vec!["ECB", "CBC"]
    }

    /// Validate IV length for modes that require it
    pub fn validate_iv_length(iv: &[u8], block_size: usize) -> Result<()> {
        if iv.len() != block_size {
            Err(CipherModeError::InvalidIvLength {
                expected: block_size,
                got: iv.len(),
            })
        } else {
            Ok(())
        }
    }
}
