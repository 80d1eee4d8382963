//! ECB (Electronic Code Book) mode implementation

use crate::{error::CipherModeError, utils, BlockCipher, Result};

use super::CipherModes;

impl CipherModes {
    /// ECB mode encryption
    ///
    /// Every padded block goes through the cipher independently.
    pub fn ecb_encrypt<C: BlockCipher>(cipher: &C, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        let padded_data: Vec<u8> = utils::pkcs7_pad(plaintext, block_size);
        let mut ciphertext: Vec<u8> = Vec::with_capacity(padded_data.len());

        for chunk in padded_data.chunks(block_size) {
            let encrypted_block = cipher.encrypt(chunk)?;
            ciphertext.extend(encrypted_block);
        }

        Ok(ciphertext)
    }

    /// ECB mode decryption
    pub fn ecb_decrypt<C: BlockCipher>(cipher: &C, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        if ciphertext.is_empty() || ciphertext.len() % block_size != 0 {
            return Err(CipherModeError::InvalidCiphertextLength {
                len: ciphertext.len(),
                block_size,
            });
        }

        let mut plaintext = Vec::with_capacity(ciphertext.len());

        for chunk in ciphertext.chunks(block_size) {
            let decrypted_block = cipher.decrypt(chunk)?;
            plaintext.extend(decrypted_block);
        }

        utils::pkcs7_unpad(&plaintext, block_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_cipher::XorCipher;

    #[test]
    fn test_ecb_encrypt_decrypt() {
        let cipher = XorCipher::new(b"testkey1");
        let plaintext = b"Hello World! This is a test message.";

        let ciphertext = CipherModes::ecb_encrypt(&cipher, plaintext).unwrap();
        assert_eq!(ciphertext.len(), 40);

        let decrypted = CipherModes::ecb_decrypt(&cipher, &ciphertext).unwrap();
        assert_eq!(plaintext, &decrypted[..]);
    }

    #[test]
    fn test_ecb_identical_blocks_leak() {
        let cipher = XorCipher::new(b"testkey1");
        let plaintext = b"AAAAAAAAAAAAAAAA";

        let ciphertext = CipherModes::ecb_encrypt(&cipher, plaintext).unwrap();
        assert_eq!(ciphertext[..8], ciphertext[8..16]);
    }

    #[test]
    fn test_ecb_rejects_partial_block() {
        let cipher = XorCipher::new(b"testkey1");
        let result = CipherModes::ecb_decrypt(&cipher, &[0u8; 12]);
        assert!(matches!(
            result,
            Err(CipherModeError::InvalidCiphertextLength { len: 12, block_size: 8 })
        ));
    }
}
