//! AES implementation in Rust
//!
//! Implements AES encryption and decryption for 128, 192 and 256-bit keys
//! from its building blocks: GF(2^8) arithmetic, the round transformations,
//! the key expansion and the block engine. Plug [`Aes`] into
//! `cipher_modes::CipherModes` to process whole messages.

pub mod cipher;
pub mod error;
pub mod gf;
pub mod key_schedule;
pub mod state;
pub mod tables;

pub use cipher::{Aes, BLOCK_SIZE};
pub use error::{AesError, Result};
pub use key_schedule::KeySchedule;
