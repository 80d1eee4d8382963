//! # cryptokit
//!
//! One entry point per tool: AES and DES under ECB or CBC, and the three
//! classical-cipher solvers (Caesar, monoalphabetic substitution, Vigenère).
//!
//! The block-cipher calls take the mode by name (`"ECB"` or `"CBC"`, any
//! case). CBC encryption without an IV draws a fresh one from the OS and
//! returns it; the same IV is required for decryption.
//!
//! ```rust,ignore
//! let (hex, iv) = cryptokit::aes_encrypt(b"attack at dawn", b"YELLOW SUBMARINE", "CBC", None)?;
//! let plaintext = cryptokit::aes_decrypt(&hex, b"YELLOW SUBMARINE", "CBC", iv.as_deref())?;
//! ```

pub mod error;

use std::collections::BTreeMap;

use aes::Aes;
use cipher_modes::{CipherModes, Mode};
use des::Des;
use tracing::info;

pub use error::{CryptokitError, Result};
pub use monoalphabetic::{AnnealingConfig, MonoSolution};
pub use vigenere::{VigenereConfig, VigenereSolution};

/// AES-encrypt `plaintext` with a 16, 24 or 32-byte key.
///
/// Returns the ciphertext as lowercase hex and the IV used (`None` for ECB).
pub fn aes_encrypt(
    plaintext: &[u8],
    key: &[u8],
    mode: &str,
    iv: Option<&[u8]>,
) -> Result<(String, Option<Vec<u8>>)> {
    let mode: Mode = mode.parse()?;
    let cipher = Aes::new(key)?;
    let (ciphertext, iv) = CipherModes::encrypt(&cipher, plaintext, mode, iv)?;
    Ok((hex::encode(ciphertext), iv))
}

/// AES-decrypt a hex ciphertext produced by [`aes_encrypt`].
pub fn aes_decrypt(ciphertext_hex: &str, key: &[u8], mode: &str, iv: Option<&[u8]>) -> Result<Vec<u8>> {
    let mode: Mode = mode.parse()?;
    let ciphertext = hex::decode(ciphertext_hex.trim())?;
    let cipher = Aes::new(key)?;
    Ok(CipherModes::decrypt(&cipher, &ciphertext, mode, iv)?)
}

/// DES-encrypt `plaintext` with an 8-byte key.
pub fn des_encrypt(
    plaintext: &[u8],
    key: &[u8],
    mode: &str,
    iv: Option<&[u8]>,
) -> Result<(Vec<u8>, Option<Vec<u8>>)> {
    let mode: Mode = mode.parse()?;
    let cipher = Des::new(key)?;
    Ok(CipherModes::encrypt(&cipher, plaintext, mode, iv)?)
}

pub fn des_decrypt(ciphertext: &[u8], key: &[u8], mode: &str, iv: Option<&[u8]>) -> Result<Vec<u8>> {
    let mode: Mode = mode.parse()?;
    let cipher = Des::new(key)?;
    Ok(CipherModes::decrypt(&cipher, ciphertext, mode, iv)?)
}

/// Best Caesar key and its decryption
pub fn caesar_bruteforce(ciphertext: &str) -> (u8, String) {
    let solution = caesar::bruteforce(ciphertext);
    info!(key = solution.key, "caesar key found");
    (solution.key, solution.plaintext)
}

/// Best-effort substitution solve: score, cipher→plain letter map and the
/// decrypted text.
pub fn mono_decrypt(ciphertext: &str) -> (f64, BTreeMap<char, char>, String) {
    mono_decrypt_with(ciphertext, &AnnealingConfig::default())
}

pub fn mono_decrypt_with(ciphertext: &str, config: &AnnealingConfig) -> (f64, BTreeMap<char, char>, String) {
    let solution = monoalphabetic::solve_with(ciphertext, config, &mut rand::thread_rng());
    info!(score = solution.score, iterations = solution.iterations_run, "substitution solved");
    (solution.score, solution.mapping.to_map(), solution.plaintext)
}

/// Recovered Vigenère key and plaintext
pub fn vigenere_auto_decrypt(ciphertext: &str) -> (String, String) {
    vigenere_auto_decrypt_with(ciphertext, &VigenereConfig::default())
}

pub fn vigenere_auto_decrypt_with(ciphertext: &str, config: &VigenereConfig) -> (String, String) {
    let solution = vigenere::auto_decrypt_with(ciphertext, config);
    info!(key = %solution.key, key_length = solution.key_length, "vigenere key found");
    (solution.key, solution.plaintext)
}
