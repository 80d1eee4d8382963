//! Utility functions for cipher modes: PKCS#7 padding, XOR, IV generation

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;

use crate::error::{CipherModeError, Result};

/// Add PKCS#7 padding to data.
///
/// Always appends between 1 and `block_size` bytes, each holding the pad
/// length. Data that is already block-aligned gets a full padding block.
pub fn pkcs7_pad(data: &[u8], block_size: usize) -> Vec<u8> {
    let pad_len = block_size - (data.len() % block_size);
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Remove PKCS#7 padding from data.
///
/// # Errors
///
/// `InvalidPadding` when the trailing byte is 0, larger than `block_size`
/// or the data length, or when the padding bytes disagree with it.
pub fn pkcs7_unpad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    let pad_len = match data.last() {
        Some(&last) => last as usize,
        None => return Err(CipherModeError::InvalidPadding),
    };

    if pad_len == 0 || pad_len > block_size || pad_len > data.len() {
        return Err(CipherModeError::InvalidPadding);
    }

    let (body, padding) = data.split_at(data.len() - pad_len);
    if padding.iter().any(|&b| b as usize != pad_len) {
        return Err(CipherModeError::InvalidPadding);
    }

    Ok(body.to_vec())
}

/// XOR two byte arrays
pub fn xor_blocks(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    if a.len() != b.len() {
        return Err(CipherModeError::InvalidBlockLength {
            expected: a.len(),
            got: b.len(),
        });
    }

    Ok(a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect())
}

/// Generate a fresh IV from the operating system's random source.
pub fn generate_iv(block_size: usize) -> Vec<u8> {
    let mut iv = vec![0u8; block_size];
    OsRng.fill_bytes(&mut iv);
    debug!(block_size, "generated fresh IV");
    iv
}
