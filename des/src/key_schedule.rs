//! DES key schedule: PC1, per-round rotations of the 28-bit halves, PC2

use crate::error::{DesError, Result};
use crate::tables::{PC1, PC2, SHIFTS};

/// Size of a DES key in bytes (including parity bits)
pub const KEY_SIZE: usize = 8;

const HALF_MASK: u64 = 0x0fff_ffff;

/// The 16 round subkeys (48 bits each, right-aligned in a `u64`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeySchedule {
    subkeys: [u64; 16],
}

impl KeySchedule {
    /// Derive the round subkeys from an 8-byte key.
    ///
    /// # Errors
    ///
    /// `InvalidKeyLength` if `key` is not exactly 8 bytes.
    pub fn expand(key: &[u8]) -> Result<Self> {
        if key.len() != KEY_SIZE {
            return Err(DesError::InvalidKeyLength(key.len()));
        }

        let key = key.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64);
        let permuted = permute(key, 64, &PC1);
        let mut c = (permuted >> 28) & HALF_MASK;
        let mut d = permuted & HALF_MASK;

        let mut subkeys = [0u64; 16];
        for (subkey, &shift) in subkeys.iter_mut().zip(SHIFTS.iter()) {
            c = rotate_half(c, shift);
            d = rotate_half(d, shift);
            *subkey = permute((c << 28) | d, 56, &PC2);
        }

        Ok(KeySchedule { subkeys })
    }

    pub fn subkeys(&self) -> &[u64; 16] {
        &self.subkeys
    }
}

/// Circular left shift within 28 bits
fn rotate_half(half: u64, shift: u32) -> u64 {
    ((half << shift) | (half >> (28 - shift))) & HALF_MASK
}

/// Apply a 1-indexed permutation table to the low `width` bits of `input`.
///
/// Bit 1 of the table refers to the most significant of those `width` bits;
/// the output has `table.len()` bits, right-aligned.
pub(crate) fn permute(input: u64, width: u32, table: &[u8]) -> u64 {
    table.iter().fold(0u64, |out, &pos| {
        (out << 1) | ((input >> (width - pos as u32)) & 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_length() {
        assert_eq!(KeySchedule::expand(&[0u8; 7]), Err(DesError::InvalidKeyLength(7)));
        assert_eq!(KeySchedule::expand(&[0u8; 16]), Err(DesError::InvalidKeyLength(16)));
    }

    #[test]
    fn test_known_subkeys() {
        // Worked example key 133457799BBCDFF1
        let key = hex::decode("133457799bbcdff1").unwrap();
        let schedule = KeySchedule::expand(&key).unwrap();

        // K1 = 000110 110000 001011 101111 111111 000111 000001 110010
        assert_eq!(schedule.subkeys()[0], 0b000110_110000_001011_101111_111111_000111_000001_110010);
        // K16 = 110010 110011 110110 001011 000011 100001 011111 110101
        assert_eq!(schedule.subkeys()[15], 0b110010_110011_110110_001011_000011_100001_011111_110101);
    }

    #[test]
    fn test_parity_bits_ignored() {
        let a = KeySchedule::expand(&hex::decode("133457799bbcdff1").unwrap()).unwrap();
        let b = KeySchedule::expand(&hex::decode("123456789abcdef0").unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rotate_half() {
        assert_eq!(rotate_half(0x800_0000, 1), 1);
        assert_eq!(rotate_half(0xc00_0000, 2), 3);
        assert_eq!(rotate_half(1, 2), 4);
    }

    #[test]
    fn test_permute_identity() {
        let table: Vec<u8> = (1..=8).collect();
        assert_eq!(permute(0xa5, 8, &table), 0xa5);
        let reversed: Vec<u8> = (1..=8).rev().collect();
        assert_eq!(permute(0x01, 8, &reversed), 0x80);
    }
}
