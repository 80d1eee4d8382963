//! Caesar cipher and its 26-key brute-force solver.

use freq_analysis::shift_letter;
use tracing::debug;

/// Number of distinct Caesar keys
pub const KEY_SPACE: u8 = 26;

/// A decryption candidate with its score
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaesarSolution {
    pub key: u8,
    pub plaintext: String,
    pub score: usize,
}

/// Shifts every ASCII letter forward by `key`, preserving case.
pub fn encrypt(content: &str, key: u8) -> String {
    content.chars().map(|c| shift_letter(c, key % KEY_SPACE)).collect()
}

/// Shifts every ASCII letter back by `key`. Non-alphabetic characters
/// remain unchanged.
pub fn decrypt(content: &str, key: u8) -> String {
    content
        .chars()
        .map(|c| shift_letter(c, KEY_SPACE - key % KEY_SPACE))
        .collect()
}

/// How English-like a candidate looks: two points per space plus one per
/// `e`/`E`.
pub fn score_text(text: &str) -> usize {
    text.chars()
        .map(|c| match c {
            ' ' => 2,
            'e' | 'E' => 1,
            _ => 0,
        })
        .sum()
}

/// Tries every key 0..25 and keeps the strictly best-scoring candidate.
///
/// Ties go to the lowest key because a later candidate only replaces the
/// current best on a higher score.
pub fn bruteforce(ciphertext: &str) -> CaesarSolution {
    let mut best = CaesarSolution {
        key: 0,
        plaintext: decrypt(ciphertext, 0),
        score: 0,
    };
    best.score = score_text(&best.plaintext);

    for key in 1..KEY_SPACE {
        let plaintext = decrypt(ciphertext, key);
        let score = score_text(&plaintext);

        if score > best.score {
            best = CaesarSolution { key, plaintext, score };
        }
    }

    debug!(key = best.key, score = best.score, "caesar brute force finished");
    best
}

/// All 26 candidates, best first (ties ordered by key).
pub fn ranked_candidates(ciphertext: &str) -> Vec<CaesarSolution> {
    let mut candidates: Vec<CaesarSolution> = (0..KEY_SPACE)
        .map(|key| {
            let plaintext = decrypt(ciphertext, key);
            let score = score_text(&plaintext);
            CaesarSolution { key, plaintext, score }
        })
        .collect();

    candidates.sort_by(|a, b| b.score.cmp(&a.score).then(a.key.cmp(&b.key)));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTENCE: &str = "we need three green trees here before the evening breeze";

    #[test]
    fn test_encrypt_decrypt() {
        assert_eq!(encrypt("Hello, World!", 3), "Khoor, Zruog!");
        assert_eq!(decrypt("Khoor, Zruog!", 3), "Hello, World!");
        assert_eq!(encrypt("xyz", 3), "abc");
    }

    #[test]
    fn test_score_text() {
        assert_eq!(score_text("the end"), 2 + 2);
        assert_eq!(score_text("EeE"), 3);
        assert_eq!(score_text(""), 0);
    }

    #[test]
    fn test_bruteforce_every_key() {
        for key in 0..KEY_SPACE {
            let ciphertext = encrypt(SENTENCE, key);
            let solution = bruteforce(&ciphertext);
            assert_eq!(solution.key, key);
            assert_eq!(solution.plaintext, SENTENCE);
        }
    }

    #[test]
    fn test_ties_resolve_to_lowest_key() {
        // No letters: every shift scores the same
        let solution = bruteforce("123 456");
        assert_eq!(solution.key, 0);
        assert_eq!(solution.plaintext, "123 456");
    }

    #[test]
    fn test_non_alpha_passthrough() {
        let ciphertext = "Dro, 42 ... zkcc-gybn!";
        for key in 0..KEY_SPACE {
            let plaintext = decrypt(ciphertext, key);
            for (a, b) in ciphertext.chars().zip(plaintext.chars()) {
                if !a.is_ascii_alphabetic() {
                    assert_eq!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_ranked_candidates() {
        let ciphertext = encrypt(SENTENCE, 11);
        let ranked = ranked_candidates(&ciphertext);
        assert_eq!(ranked.len(), 26);
        assert_eq!(ranked[0], bruteforce(&ciphertext));
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
