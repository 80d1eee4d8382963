//! English-likeness score from unigram and bigram weights

use freq_analysis::letter_index;

use crate::mapping::SubstitutionMapping;

/// Unigram weights, indexed a..z
pub const UNIGRAM: [f64; 26] = [
    0.082, 0.015, 0.028, 0.043, 0.127, 0.022, 0.020, 0.061, 0.070, 0.0015, 0.008, 0.040, 0.024,
    0.067, 0.075, 0.019, 0.001, 0.060, 0.063, 0.091, 0.028, 0.009, 0.023, 0.0015, 0.020, 0.0007,
];

/// Weight for a letter missing from the unigram table
pub const UNIGRAM_FLOOR: f64 = 1e-6;

/// Weight for any character pair missing from the bigram table
pub const BIGRAM_FLOOR: f64 = 1e-7;

/// Weight of the lowercase character pair `(a, b)`
pub fn bigram_weight(a: char, b: char) -> f64 {
    match (a, b) {
        ('t', 'h') => 0.0356,
        ('h', 'e') => 0.0307,
        ('i', 'n') => 0.0243,
        ('e', 'r') => 0.0205,
        ('a', 'n') => 0.0199,
        ('r', 'e') => 0.0185,
        ('o', 'n') => 0.0176,
        ('a', 't') => 0.0149,
        ('e', 'n') => 0.0145,
        ('n', 'd') => 0.0135,
        ('t', 'i') => 0.0134,
        ('e', 's') => 0.0134,
        ('o', 'r') => 0.0128,
        ('t', 'e') => 0.0120,
        ('o', 'f') => 0.0117,
        _ => BIGRAM_FLOOR,
    }
}

fn unigram_weight(index: usize) -> f64 {
    UNIGRAM[index].max(UNIGRAM_FLOOR)
}

/// Score a candidate plaintext.
///
/// The text is lowercased; every letter adds its unigram weight and every
/// adjacent character pair (letters or not) adds its bigram weight.
pub fn score_text(text: &str) -> f64 {
    let chars: Vec<char> = text.chars().map(|c| c.to_ascii_lowercase()).collect();

    let unigrams: f64 = chars.iter().filter_map(|&c| letter_index(c)).map(unigram_weight).sum();
    let bigrams: f64 = chars.windows(2).map(|pair| bigram_weight(pair[0], pair[1])).sum();

    unigrams + bigrams
}

/// Letter and letter-pair counts of a ciphertext.
///
/// Scoring a mapping from these counts gives the same value as decoding the
/// ciphertext and calling [`score_text`], without building the plaintext.
#[derive(Clone, Debug)]
pub struct NgramProfile {
    unigrams: [u32; 26],
    bigrams: Box<[[u32; 26]; 26]>,
    /// Pairs with at least one non-letter; they always score the floor
    other_pairs: u32,
}

impl NgramProfile {
    pub fn from_ciphertext(ciphertext: &str) -> Self {
        let mut unigrams = [0u32; 26];
        let mut bigrams = Box::new([[0u32; 26]; 26]);
        let mut other_pairs = 0u32;

        let indices: Vec<Option<usize>> = ciphertext.chars().map(letter_index).collect();

        for index in indices.iter().flatten() {
            unigrams[*index] += 1;
        }

        for pair in indices.windows(2) {
            match (pair[0], pair[1]) {
                (Some(a), Some(b)) => bigrams[a][b] += 1,
                _ => other_pairs += 1,
            }
        }

        Self {
            unigrams,
            bigrams,
            other_pairs,
        }
    }

    /// Letter counts of the ciphertext, indexed a..z
    pub fn letter_counts(&self) -> &[u32; 26] {
        &self.unigrams
    }

    /// Score of the plaintext that `mapping` would produce
    pub fn score(&self, mapping: &SubstitutionMapping) -> f64 {
        let mut score = 0.0;

        for (cipher, &count) in self.unigrams.iter().enumerate() {
            if count > 0 {
                score += count as f64 * unigram_weight(mapping.image_of(cipher));
            }
        }

        for (first, row) in self.bigrams.iter().enumerate() {
            let plain_first = (b'a' + mapping.image_of(first) as u8) as char;
            for (second, &count) in row.iter().enumerate() {
                if count > 0 {
                    let plain_second = (b'a' + mapping.image_of(second) as u8) as char;
                    score += count as f64 * bigram_weight(plain_first, plain_second);
                }
            }
        }

        score + self.other_pairs as f64 * BIGRAM_FLOOR
    }
}
