//! AES key expansion for 128, 192 and 256-bit keys (FIPS-197 section 5.2)

use crate::error::{AesError, Result};
use crate::state::RoundKey;
use crate::tables::{RCON, SBOX};

type Word = [u8; 4];

/// Expanded round keys for one AES key.
///
/// Holds `Nr + 1` round keys where `Nr` is 10, 12 or 14 depending on the key
/// length. Built once and never modified.
#[derive(Clone, Debug)]
pub struct KeySchedule {
    round_keys: Vec<RoundKey>,
}

impl KeySchedule {
    /// Expand `key` into its round keys.
    ///
    /// # Errors
    ///
    /// `InvalidKeyLength` unless the key is 16, 24 or 32 bytes long.
    pub fn expand(key: &[u8]) -> Result<Self> {
        let rounds = rounds_for_key_len(key.len()).ok_or(AesError::InvalidKeyLength(key.len()))?;
        let nk = key.len() / 4;
        let total_words = 4 * (rounds + 1);

        let mut words: Vec<Word> = key
            .chunks(4)
            .map(|chunk| [chunk[0], chunk[1], chunk[2], chunk[3]])
            .collect();

        for i in nk..total_words {
            let mut temp = words[i - 1];

            if i % nk == 0 {
                temp = sub_word(rot_word(temp));
                temp[0] ^= RCON[i / nk];
            } else if nk == 8 && i % nk == 4 {
                // AES-256 only
                temp = sub_word(temp);
            }

            let prev = words[i - nk];
            words.push([
                prev[0] ^ temp[0],
                prev[1] ^ temp[1],
                prev[2] ^ temp[2],
                prev[3] ^ temp[3],
            ]);
        }

        // Word c of a round key is column c of the state: rk[row][col] = w[col][row]
        let round_keys = words
            .chunks(4)
            .map(|group| {
                let mut round_key = [[0u8; 4]; 4];
                for (col, word) in group.iter().enumerate() {
                    for row in 0..4 {
                        round_key[row][col] = word[row];
                    }
                }
                round_key
            })
            .collect();

        Ok(KeySchedule { round_keys })
    }

    /// Number of rounds (Nr)
    pub fn rounds(&self) -> usize {
        self.round_keys.len() - 1
    }

    /// Round key for `round` in 0..=Nr
    pub fn round_key(&self, round: usize) -> &RoundKey {
        &self.round_keys[round]
    }

    pub fn round_keys(&self) -> &[RoundKey] {
        &self.round_keys
    }
}

/// Nr for a key length in bytes
pub fn rounds_for_key_len(len: usize) -> Option<usize> {
    match len {
        16 => Some(10),
        24 => Some(12),
        32 => Some(14),
        _ => None,
    }
}

fn sub_word(word: Word) -> Word {
    word.map(|b| SBOX[b as usize])
}

fn rot_word(word: Word) -> Word {
    [word[1], word[2], word[3], word[0]]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_key_bytes(round_key: &RoundKey) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(16);
        for col in 0..4 {
            for row in 0..4 {
                bytes.push(round_key[row][col]);
            }
        }
        bytes
    }

    #[test]
    fn test_round_counts() {
        assert_eq!(KeySchedule::expand(&[0u8; 16]).unwrap().rounds(), 10);
        assert_eq!(KeySchedule::expand(&[0u8; 24]).unwrap().rounds(), 12);
        assert_eq!(KeySchedule::expand(&[0u8; 32]).unwrap().rounds(), 14);

        for (len, rounds) in [(16usize, 10usize), (24, 12), (32, 14)] {
            let schedule = KeySchedule::expand(&vec![0u8; len]).unwrap();
            assert_eq!(schedule.round_keys().len(), rounds + 1);
            assert_eq!(&schedule.round_keys()[rounds], schedule.round_key(rounds));
        }
    }

    #[test]
    fn test_invalid_key_length() {
        for len in [0usize, 8, 15, 17, 31, 33, 64] {
            let result = KeySchedule::expand(&vec![0u8; len]);
            assert_eq!(result.unwrap_err(), AesError::InvalidKeyLength(len));
        }
    }

    #[test]
    fn test_first_round_key_is_cipher_key() {
        let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
        let schedule = KeySchedule::expand(&key).unwrap();
        assert_eq!(round_key_bytes(schedule.round_key(0)), key);
    }

    #[test]
    fn test_aes128_expansion_vector() {
        // FIPS-197 appendix A.1
        let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
        let schedule = KeySchedule::expand(&key).unwrap();

        assert_eq!(
            hex::encode(round_key_bytes(schedule.round_key(1))),
            "a0fafe1788542cb123a339392a6c7605"
        );
        assert_eq!(
            hex::encode(round_key_bytes(schedule.round_key(10))),
            "d014f9a8c9ee2589e13f0cc8b6630ca6"
        );
    }

    #[test]
    fn test_aes256_expansion_vector() {
        // FIPS-197 appendix A.3, words w[8..12] and w[56..60]
        let key = hex::decode("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4").unwrap();
        let schedule = KeySchedule::expand(&key).unwrap();

        assert_eq!(
            hex::encode(round_key_bytes(schedule.round_key(2))),
            "9ba354118e6925afa51a8b5f2067fcde"
        );
        assert_eq!(
            hex::encode(round_key_bytes(schedule.round_key(14))),
            "fe4890d1e6188d0b046df344706c631e"
        );
    }
}
