//! Vigenère cipher and an automatic solver.
//!
//! The solver works on the letters of the ciphertext only: it estimates the
//! key length from the Index of Coincidence of interleaved columns (nudged
//! by Kasiski examination), recovers each key letter with a chi-square test
//! against English, then polishes the key by hill climbing.

use std::collections::{BTreeSet, HashMap};

use freq_analysis::{
    count_frequencies, english_weight, index_of_coincidence, letter_index, letters_only, split_columns,
    ENGLISH_FREQUENCIES,
};
use tracing::debug;

/// Length of the repeated sequences Kasiski examination looks for
const KASISKI_SEQUENCE_LEN: usize = 3;

/// Kasiski GCDs outside this range are discarded
const KASISKI_RANGE: std::ops::RangeInclusive<usize> = 2..=20;

/// Tuning knobs for [`auto_decrypt_with`]
#[derive(Clone, Debug, PartialEq)]
pub struct VigenereConfig {
    /// Longest key length considered
    pub max_key_len: usize,
    /// Factor applied to the average IC of lengths within 1 of a Kasiski
    /// candidate
    pub kasiski_boost: f64,
    /// A shorter length whose score reaches this fraction of the best score
    /// is preferred over the best one
    pub shorter_key_tolerance: f64,
}

impl Default for VigenereConfig {
    fn default() -> Self {
        Self {
            max_key_len: 20,
            kasiski_boost: 1.1,
            shorter_key_tolerance: 0.95,
        }
    }
}

/// Result of an automatic decryption
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VigenereSolution {
    pub key: String,
    pub plaintext: String,
    pub key_length: usize,
}

/// Key letters as shifts 0..25; non-letters in the key are ignored
fn key_shifts(key: &str) -> Vec<u8> {
    key.chars().filter_map(letter_index).map(|i| i as u8).collect()
}

fn apply_key(content: &str, shifts: &[u8], decrypting: bool) -> String {
    if shifts.is_empty() {
        return content.to_string();
    }

    let mut result = String::with_capacity(content.len());
    let mut key_index = 0;

    for c in content.chars() {
        if c.is_ascii_alphabetic() {
            let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
            let shift = shifts[key_index % shifts.len()];
            let offset = if decrypting { 26 - shift } else { shift };
            result.push(((c as u8 - base + offset) % 26 + base) as char);

            // Only advance key index for alphabetic characters
            key_index += 1;
        } else {
            result.push(c);
        }
    }

    result
}

/// Encrypts text using the Vigenère cipher algorithm.
///
/// # Arguments
///
/// * `content` - The input text to encrypt.
/// * `key` - The key; its letters are used case-insensitively.
///
/// # Returns
///
/// A `String` containing the encrypted text. Case is preserved and
/// non-alphabetic characters remain unchanged. A key without letters leaves
/// the text as it is.
pub fn encrypt(content: &str, key: &str) -> String {
    apply_key(content, &key_shifts(key), false)
}

/// Decrypts text using the Vigenère cipher algorithm.
///
/// The inverse of [`encrypt`] for the same key.
pub fn decrypt(content: &str, key: &str) -> String {
    apply_key(content, &key_shifts(key), true)
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Kasiski examination.
///
/// Collects the distances between consecutive occurrences of every repeated
/// trigram in the letters of `ciphertext`, then returns the GCDs of every
/// pair of distinct distances that fall in 2..=20, sorted and deduplicated.
pub fn kasiski(ciphertext: &str) -> Vec<usize> {
    let letters: Vec<u8> = letters_only(ciphertext).into_bytes();

    let mut positions: HashMap<&[u8], Vec<usize>> = HashMap::new();
    for (i, sequence) in letters.windows(KASISKI_SEQUENCE_LEN).enumerate() {
        positions.entry(sequence).or_default().push(i);
    }

    let distances: BTreeSet<usize> = positions
        .values()
        .flat_map(|pos| pos.windows(2).map(|pair| pair[1] - pair[0]))
        .collect();
    let distances: Vec<usize> = distances.into_iter().collect();

    let mut candidates = BTreeSet::new();
    for (i, &a) in distances.iter().enumerate() {
        for &b in &distances[i + 1..] {
            let g = gcd(a, b);
            if KASISKI_RANGE.contains(&g) {
                candidates.insert(g);
            }
        }
    }

    debug!(distances = distances.len(), ?candidates, "kasiski examination");
    candidates.into_iter().collect()
}

/// Average IC of the `key_length` interleaved columns of `letters`
fn average_ic(letters: &str, key_length: usize) -> f64 {
    let columns = split_columns(letters, key_length);
    columns.iter().map(|column| index_of_coincidence(column)).sum::<f64>() / columns.len() as f64
}

/// Estimates the key length of a Vigenère ciphertext.
///
/// Every length from 1 to `max_key_len` is scored by the average IC of its
/// columns, boosted when it lies within 1 of a Kasiski candidate. Multiples
/// of the real period score about as well as the period itself, so the
/// shortest length within `shorter_key_tolerance` of the best score wins.
pub fn guess_key_len(ciphertext: &str, config: &VigenereConfig) -> usize {
    let letters = letters_only(ciphertext);
    let candidates = kasiski(&letters);

    let scores: Vec<(usize, f64)> = (1..=config.max_key_len.max(1))
        .map(|m| {
            let mut score = average_ic(&letters, m);
            if candidates.iter().any(|&g| m.abs_diff(g) <= 1) {
                score *= config.kasiski_boost;
            }
            (m, score)
        })
        .collect();

    let best = scores.iter().map(|&(_, score)| score).fold(0.0, f64::max);

    let key_length = scores
        .iter()
        .find(|&&(_, score)| score >= best * config.shorter_key_tolerance)
        .map_or(1, |&(m, _)| m);

    debug!(key_length, best_score = best, "key length chosen");
    key_length
}

/// Chi-square statistic of `column` against English after shifting every
/// letter forward by `shift`.
///
/// Columns without letters score `f64::INFINITY`.
pub fn chi_square(column: &str, shift: u8) -> f64 {
    let counts = count_frequencies(column);
    let total: u32 = counts.iter().sum();
    if total == 0 {
        return f64::INFINITY;
    }

    let total = total as f64;
    (0..26)
        .map(|plain| {
            // Letters that land on `plain` after the shift
            let observed = counts[(plain + 26 - shift as usize % 26) % 26] as f64;
            let expected = ENGLISH_FREQUENCIES[plain] * total;
            (observed - expected).powi(2) / expected
        })
        .sum()
}

/// Shift in 0..25 minimizing [`chi_square`]; the first one wins ties.
///
/// The key letter that produced the column is `(26 - shift) % 26`.
pub fn best_shift(column: &str) -> u8 {
    let mut best = 0;
    let mut best_chi = f64::INFINITY;

    for shift in 0..26 {
        let chi = chi_square(column, shift);
        if chi < best_chi {
            best_chi = chi;
            best = shift;
        }
    }

    best
}

/// Hill climbing over single key letters.
///
/// Each pass tries all 26 letters at every key position and keeps the one
/// that most increases the English frequency weight of the decryption.
/// Passes repeat until none of them improves the score.
pub fn refine_key(ciphertext: &str, key: &str) -> String {
    let mut key: Vec<u8> = key_shifts(key);
    if key.is_empty() {
        return String::new();
    }

    let mut best_score = english_weight(&apply_key(ciphertext, &key, true));
    let mut improved = true;

    while improved {
        improved = false;

        for position in 0..key.len() {
            let original = key[position];
            let mut best_letter = original;

            for letter in 0..26 {
                if letter == original {
                    continue;
                }
                key[position] = letter;
                let score = english_weight(&apply_key(ciphertext, &key, true));
                if score > best_score {
                    best_score = score;
                    best_letter = letter;
                }
            }

            key[position] = best_letter;
            if best_letter != original {
                improved = true;
            }
        }
    }

    key.iter().map(|&shift| (b'a' + shift) as char).collect()
}

/// Recovers key and plaintext with the default configuration.
pub fn auto_decrypt(ciphertext: &str) -> VigenereSolution {
    auto_decrypt_with(ciphertext, &VigenereConfig::default())
}

/// Recovers key and plaintext.
///
/// Text without letters comes back unchanged with the key `"a"`.
pub fn auto_decrypt_with(ciphertext: &str, config: &VigenereConfig) -> VigenereSolution {
    let letters = letters_only(ciphertext);
    if letters.is_empty() {
        return VigenereSolution {
            key: "a".to_string(),
            plaintext: ciphertext.to_string(),
            key_length: 1,
        };
    }

    let key_length = guess_key_len(&letters, config);

    let initial_key: String = split_columns(&letters, key_length)
        .iter()
        .map(|column| (b'a' + (26 - best_shift(column)) % 26) as char)
        .collect();

    let key = refine_key(ciphertext, &initial_key);
    debug!(%initial_key, %key, "key recovered");

    VigenereSolution {
        plaintext: decrypt(ciphertext, &key),
        key_length: key.len(),
        key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../../testdata/english_sample.txt");

    #[test]
    fn test_encrypt_known_vector() {
        assert_eq!(encrypt("ATTACKATDAWN", "LEMON"), "LXFOPVEFRNHR");
        assert_eq!(decrypt("LXFOPVEFRNHR", "lemon"), "ATTACKATDAWN");
    }

    #[test]
    fn test_case_and_non_letters() {
        let ciphertext = encrypt("Attack at dawn, 5 a.m.!", "lemon");
        assert_eq!(ciphertext, "Lxfopv ef rnhr, 5 m.a.!");
        assert_eq!(decrypt(&ciphertext, "LEMON"), "Attack at dawn, 5 a.m.!");
    }

    #[test]
    fn test_key_without_letters() {
        assert_eq!(encrypt("hello", "123"), "hello");
        assert_eq!(decrypt("hello", ""), "hello");
    }

    #[test]
    fn test_kasiski_small() {
        // "abc" at 0, 6 and 15: distances 6 and 9
        assert_eq!(kasiski("abcxyzabcqwertyabc"), vec![3]);
        assert_eq!(kasiski("ABC xyz, abc QWERTY abc"), vec![3]);
        assert!(kasiski("abcdefghij").is_empty());
        assert!(kasiski("").is_empty());
    }

    #[test]
    fn test_kasiski_finds_period() {
        let ciphertext = encrypt(SAMPLE, "lemon");
        assert!(kasiski(&ciphertext).contains(&5));
    }

    #[test]
    fn test_guess_key_len() {
        let config = VigenereConfig::default();
        for key in ["key", "lemon", "harbour", "lighthouse"] {
            let ciphertext = encrypt(SAMPLE, key);
            assert_eq!(guess_key_len(&ciphertext, &config), key.len(), "key {}", key);
        }
    }

    #[test]
    fn test_best_shift_recovers_caesar_column() {
        let column = letters_only(&SAMPLE[..1200]);
        for key in [0u8, 1, 7, 19, 25] {
            let shifted = encrypt(&column, &((b'a' + key) as char).to_string());
            let shift = best_shift(&shifted);
            assert_eq!((26 - shift) % 26, key);
        }
    }

    #[test]
    fn test_chi_square_empty_column() {
        assert_eq!(chi_square("", 3), f64::INFINITY);
        assert_eq!(best_shift("12 !"), 0);
    }

    #[test]
    fn test_refine_key_fixes_wrong_letter() {
        let ciphertext = encrypt(SAMPLE, "cipher");
        assert_eq!(refine_key(&ciphertext, "cipxer"), "cipher");
        assert_eq!(refine_key(&ciphertext, "cipher"), "cipher");
    }

    #[test]
    fn test_auto_decrypt_recovers_key() {
        for key in ["lemon", "secret", "lighthouse", "qz"] {
            let ciphertext = encrypt(SAMPLE, key);
            let solution = auto_decrypt(&ciphertext);
            assert_eq!(solution.key, key);
            assert_eq!(solution.key_length, key.len());
            assert_eq!(solution.plaintext, SAMPLE);
        }
    }

    #[test]
    fn test_auto_decrypt_without_letters() {
        for text in ["", "1234 !?", "\n\t"] {
            let solution = auto_decrypt(text);
            assert_eq!(solution.key, "a");
            assert_eq!(solution.plaintext, text);
        }
    }

    #[test]
    fn test_non_letters_pass_through() {
        let ciphertext = encrypt(SAMPLE, "harbour");
        let solution = auto_decrypt(&ciphertext);
        for (a, b) in ciphertext.chars().zip(solution.plaintext.chars()) {
            if !a.is_ascii_alphabetic() {
                assert_eq!(a, b);
            }
        }
    }
}
