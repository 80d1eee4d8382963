//! CBC (Cipher Block Chaining) mode implementation

use crate::{error::CipherModeError, utils, BlockCipher, Result};

use super::CipherModes;

impl CipherModes {
    /// CBC mode encryption
    ///
    /// C_i = E(P_i ⊕ C_{i-1}), with C_0 = IV.
    pub fn cbc_encrypt<C: BlockCipher>(cipher: &C, plaintext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        Self::validate_iv_length(iv, block_size)?;

        let padded_data = utils::pkcs7_pad(plaintext, block_size);
        let mut ciphertext = Vec::with_capacity(padded_data.len());
        let mut previous_block = iv.to_vec();

        for chunk in padded_data.chunks(block_size) {
            let xored = utils::xor_blocks(chunk, &previous_block)?;
            let encrypted_block = cipher.encrypt(&xored)?;
            ciphertext.extend(&encrypted_block);
            previous_block = encrypted_block;
        }

        Ok(ciphertext)
    }

    /// CBC mode decryption
    ///
    /// P_i = D(C_i) ⊕ C_{i-1}: the chaining value is the previous
    /// *ciphertext* block, never the recovered plaintext.
    pub fn cbc_decrypt<C: BlockCipher>(cipher: &C, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        Self::validate_iv_length(iv, block_size)?;

        if ciphertext.is_empty() || ciphertext.len() % block_size != 0 {
            return Err(CipherModeError::InvalidCiphertextLength {
                len: ciphertext.len(),
                block_size,
            });
        }

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut previous_block: &[u8] = iv;

        for chunk in ciphertext.chunks(block_size) {
            let decrypted_block = cipher.decrypt(chunk)?;
            let xored = utils::xor_blocks(&decrypted_block, previous_block)?;
            plaintext.extend(xored);
            previous_block = chunk;
        }

        utils::pkcs7_unpad(&plaintext, block_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_cipher::XorCipher;

    #[test]
    fn test_cbc_encrypt_decrypt() {
        let cipher = XorCipher::new(b"testkey1");
        let plaintext = b"Hello World! This is a test message.";
        let iv = b"initialv";

        let ciphertext = CipherModes::cbc_encrypt(&cipher, plaintext, iv).unwrap();
        let decrypted = CipherModes::cbc_decrypt(&cipher, &ciphertext, iv).unwrap();

        assert_eq!(plaintext, &decrypted[..]);
    }

    #[test]
    fn test_cbc_hides_identical_blocks() {
        let cipher = XorCipher::new(b"testkey1");
        let plaintext = b"AAAAAAAAAAAAAAAA";
        let iv = b"initialv";

        let ciphertext = CipherModes::cbc_encrypt(&cipher, plaintext, iv).unwrap();
        assert_ne!(ciphertext[..8], ciphertext[8..16]);
    }

    #[test]
    fn test_cbc_invalid_iv_length() {
        let cipher = XorCipher::new(b"testkey1");
        let result = CipherModes::cbc_encrypt(&cipher, b"Hello", b"short");
        assert!(matches!(
            result,
            Err(CipherModeError::InvalidIvLength { expected: 8, got: 5 })
        ));
    }

    #[test]
    fn test_cbc_wrong_iv_garbles_first_block_only() {
        let cipher = XorCipher::new(b"testkey1");
        let plaintext = b"first8bysecond8b";
        let iv = b"initialv";

        let ciphertext = CipherModes::cbc_encrypt(&cipher, plaintext, iv).unwrap();
        let decrypted = CipherModes::cbc_decrypt(&cipher, &ciphertext, b"INITIALV").unwrap();

        assert_ne!(&decrypted[..8], &plaintext[..8]);
        assert_eq!(&decrypted[8..], &plaintext[8..]);
    }
}
