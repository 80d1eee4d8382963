use cryptokit::{caesar_bruteforce, mono_decrypt_with, vigenere_auto_decrypt, AnnealingConfig};

const SAMPLE: &str = include_str!("../../testdata/english_sample.txt");

fn non_letters(text: &str) -> Vec<(usize, char)> {
    text.chars().enumerate().filter(|(_, c)| !c.is_ascii_alphabetic()).collect()
}

#[test]
fn test_caesar_recovers_every_key() {
    let sentence = "we need three green trees here before the evening breeze";
    for key in 0..26u8 {
        let ciphertext = caesar::encrypt(sentence, key);
        let (found, plaintext) = caesar_bruteforce(&ciphertext);
        assert_eq!(found, key);
        assert_eq!(plaintext, sentence);
    }
}

#[test]
fn test_caesar_keeps_punctuation_and_case() {
    let ciphertext = caesar::encrypt(&SAMPLE[..400], 17);
    let (key, plaintext) = caesar_bruteforce(&ciphertext);
    assert_eq!(key, 17);
    assert_eq!(plaintext, &SAMPLE[..400]);
    assert_eq!(non_letters(&plaintext), non_letters(&ciphertext));
}

#[test]
fn test_vigenere_recovers_key_and_plaintext() {
    let ciphertext = vigenere::encrypt(SAMPLE, "harbour");
    let (key, plaintext) = vigenere_auto_decrypt(&ciphertext);
    assert_eq!(key, "harbour");
    assert_eq!(plaintext, SAMPLE);
    assert_eq!(non_letters(&plaintext), non_letters(&ciphertext));
}

#[test]
fn test_vigenere_letter_free_input() {
    assert_eq!(vigenere_auto_decrypt("2024-10-19"), ("a".to_string(), "2024-10-19".to_string()));
}

#[test]
fn test_mono_output_shape() {
    let key = monoalphabetic::SubstitutionMapping::from_images([
        16, 22, 4, 17, 19, 24, 20, 8, 14, 15, 0, 18, 3, 5, 6, 7, 9, 10, 11, 25, 23, 2, 21, 1, 13, 12,
    ])
    .unwrap();
    let ciphertext = key.apply(&SAMPLE[..1000]);
    let config = AnnealingConfig {
        iterations: 5_000,
        restarts: 1,
        ..AnnealingConfig::default()
    };

    let (score, mapping, plaintext) = mono_decrypt_with(&ciphertext, &config);
    assert!(score > 0.0);
    assert_eq!(mapping.len(), 26);

    // The map is a bijection over a..z
    let mut images: Vec<char> = mapping.values().copied().collect();
    images.sort_unstable();
    assert_eq!(images, ('a'..='z').collect::<Vec<_>>());

    assert_eq!(non_letters(&plaintext), non_letters(&ciphertext));
    assert!((score - monoalphabetic::score_text(&plaintext)).abs() < 1e-6);
}
