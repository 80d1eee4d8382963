//! A bijective substitution over the 26-letter alphabet

use std::collections::BTreeMap;
use std::fmt;

use freq_analysis::letter_index;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("Mapping is not a bijection: letter '{0}' is used more than once")]
    NotBijective(char),

    #[error("Mapping entry {0} is not a letter index (0..26)")]
    OutOfRange(u8),
}

/// Cipher letter to plain letter, stored as `images[cipher] = plain` with
/// letters as indices 0..26.
///
/// The only mutation is [`swap`](Self::swap), which exchanges two images, so
/// every value of this type is a bijection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubstitutionMapping {
    images: [u8; 26],
}

impl SubstitutionMapping {
    pub fn identity() -> Self {
        Self {
            images: core::array::from_fn(|i| i as u8),
        }
    }

    /// Build a mapping from explicit images, rejecting anything that is not
    /// a permutation of 0..26.
    pub fn from_images(images: [u8; 26]) -> Result<Self, MappingError> {
        let mut seen = [false; 26];
        for &image in images.iter() {
            if image >= 26 {
                return Err(MappingError::OutOfRange(image));
            }
            if seen[image as usize] {
                return Err(MappingError::NotBijective((b'a' + image) as char));
            }
            seen[image as usize] = true;
        }
        Ok(Self { images })
    }

    /// Plaintext letter index for a cipher letter index
    #[inline]
    pub fn image_of(&self, cipher: usize) -> usize {
        self.images[cipher] as usize
    }

    /// Plaintext letter (lowercase) for a cipher letter, `None` for non-letters
    pub fn image(&self, cipher: char) -> Option<char> {
        letter_index(cipher).map(|i| (b'a' + self.images[i]) as char)
    }

    pub fn images(&self) -> &[u8; 26] {
        &self.images
    }

    /// Exchange the cipher letters that decode to plaintext letters `a` and `b`.
    ///
    /// Arguments outside 0..26 leave the mapping unchanged.
    pub fn swap(&mut self, a: u8, b: u8) {
        if a >= 26 || b >= 26 {
            return;
        }
        for image in self.images.iter_mut() {
            if *image == a {
                *image = b;
            } else if *image == b {
                *image = a;
            }
        }
    }

    /// Decode `text`, preserving case and leaving non-letters untouched.
    pub fn apply(&self, text: &str) -> String {
        text.chars()
            .map(|c| match letter_index(c) {
                Some(i) => {
                    let plain = (b'a' + self.images[i]) as char;
                    if c.is_ascii_uppercase() {
                        plain.to_ascii_uppercase()
                    } else {
                        plain
                    }
                }
                None => c,
            })
            .collect()
    }

    /// The mapping that undoes this one (plain letter to cipher letter).
    pub fn inverse(&self) -> Self {
        let mut images = [0u8; 26];
        for (cipher, &plain) in self.images.iter().enumerate() {
            images[plain as usize] = cipher as u8;
        }
        Self { images }
    }

    /// `(cipher, plain)` letter pairs in alphabetical cipher order
    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.images
            .iter()
            .enumerate()
            .map(|(cipher, &plain)| ((b'a' + cipher as u8) as char, (b'a' + plain) as char))
    }

    pub fn to_map(&self) -> BTreeMap<char, char> {
        self.pairs().collect()
    }
}

impl Default for SubstitutionMapping {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for SubstitutionMapping {
    /// Plaintext alphabet written under the cipher alphabet `a..z`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, plain) in self.pairs() {
            write!(f, "{}", plain)?;
        }
        Ok(())
    }
}
