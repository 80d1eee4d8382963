//! DES (Data Encryption Standard) in Rust
//!
//! The 64-bit block is handled as a big-endian `u64`; every table lookup is a
//! bit permutation over that integer. [`Des`] implements
//! `cipher_modes::BlockCipher` so it can run under ECB or CBC.

pub mod cipher;
pub mod error;
pub mod key_schedule;
pub mod tables;

pub use cipher::{Des, BLOCK_SIZE};
pub use error::{DesError, Result};
pub use key_schedule::{KeySchedule, KEY_SIZE};
