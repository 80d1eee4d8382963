//! # Cipher Modes Library
//!
//! Block cipher modes of operation shared by the AES and DES engines.
//!
//! ## Supported Modes
//!
//! - **ECB** (Electronic Code Book) - Simple but insecure mode
//! - **CBC** (Cipher Block Chaining) - Widely used, requires IV
//!
//! Both modes apply PKCS#7 padding on encryption and strip it on decryption.
//!
//! ## Usage
//!
//! Any type implementing [`BlockCipher`] can be plugged in; the mode layer
//! only needs its block size and single-block transforms.
//!
//! ```rust,ignore
//! use cipher_modes::{CipherModes, Mode};
//!
//! let cipher = aes::Aes::new(b"YELLOW SUBMARINE")?;
//! let (ciphertext, iv) = CipherModes::encrypt(&cipher, b"Hello, World!", Mode::Cbc, None)?;
//! let plaintext = CipherModes::decrypt(&cipher, &ciphertext, Mode::Cbc, iv.as_deref())?;
//! ```

// Public modules
pub mod cipher;
pub mod error;
pub mod modes;
pub mod utils;

// Re-exports for easy access
pub use cipher::{ensure_block_len, BlockCipher};
pub use error::{CipherModeError, Result};
pub use modes::{CipherModes, Mode};
pub use utils::{generate_iv, pkcs7_pad, pkcs7_unpad};
