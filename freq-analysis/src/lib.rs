//! Letter statistics shared by the classical-cipher solvers.

/// English letter frequencies for frequency analysis, indexed a..z
pub const ENGLISH_FREQUENCIES: [f64; 26] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094,
    0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929,
    0.00095, 0.05987, 0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150,
    0.01974, 0.00074,
];

/// English letters from most to least frequent
pub const ENGLISH_ORDER: &str = "etaoinshrdlucmfwypvbgkjqxz";

/// Index (0..26) of an ASCII letter, case-insensitive
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_lowercase() as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Counts the frequency of each letter in the given text.
///
/// # Arguments
///
/// * `content` - The input text to analyze.
///
/// # Returns
///
/// An array of 26 counts for letters A-Z, case-insensitive.
pub fn count_frequencies(content: &str) -> [u32; 26] {
    let mut frequencies: [u32; 26] = [0; 26];

    for index in content.chars().filter_map(letter_index) {
        frequencies[index] += 1;
    }

    frequencies
}

/// Keeps only ASCII letters, lowercased
pub fn letters_only(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Calculates the Index of Coincidence (IC) for the given text.
///
/// # Returns
///
/// The Index of Coincidence value (0.0 if text has < 2 alphabetic characters).
pub fn index_of_coincidence(text: &str) -> f64 {
    let frequencies: [u32; 26] = count_frequencies(text);
    let total: u64 = frequencies.iter().map(|&f| f as u64).sum();

    if total < 2 {
        return 0.0;
    }

    // sum of f_i * (f_i - 1) / (N * (N - 1))
    let numerator: f64 = frequencies
        .iter()
        .map(|&freq| freq as f64 * freq.saturating_sub(1) as f64)
        .sum();

    numerator / (total * (total - 1)) as f64
}

/// Splits text into `columns` interleaved subtexts: character `i` goes to
/// subtext `i % columns`.
pub fn split_columns(text: &str, columns: usize) -> Vec<String> {
    let mut subtexts = vec![String::new(); columns.max(1)];
    let columns = subtexts.len();

    for (i, c) in text.chars().enumerate() {
        subtexts[i % columns].push(c);
    }

    subtexts
}

/// Shifts an ASCII letter forward by `shift` positions preserving case.
/// Anything else is returned unchanged.
pub fn shift_letter(c: char, shift: u8) -> char {
    if c.is_ascii_alphabetic() {
        let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
        (((c as u8 - base) + shift % 26) % 26 + base) as char
    } else {
        c
    }
}

/// Sum of English frequency weights over the letters of `text`
pub fn english_weight(text: &str) -> f64 {
    text.chars()
        .filter_map(letter_index)
        .map(|i| ENGLISH_FREQUENCIES[i])
        .sum()
}
