//! The DES block engine

use cipher_modes::{ensure_block_len, BlockCipher};

use crate::error::Result;
use crate::key_schedule::{permute, KeySchedule};
use crate::tables::{E, FP, IP, P, SBOX};

/// DES block size in bytes
pub const BLOCK_SIZE: usize = 8;

/// A DES cipher bound to one key
#[derive(Clone, Debug)]
pub struct Des {
    schedule: KeySchedule,
}

impl Des {
    /// Build the cipher from an 8-byte key.
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Des {
            schedule: KeySchedule::expand(key)?,
        })
    }

    pub fn encrypt_block(&self, plaintext: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let block = u64::from_be_bytes(*plaintext);
        feistel_network(block, self.schedule.subkeys().iter()).to_be_bytes()
    }

    /// Same network as encryption with the subkeys in reverse order
    pub fn decrypt_block(&self, ciphertext: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let block = u64::from_be_bytes(*ciphertext);
        feistel_network(block, self.schedule.subkeys().iter().rev()).to_be_bytes()
    }
}

/// IP, 16 Feistel rounds, swap of the halves and FP
fn feistel_network<'a>(block: u64, subkeys: impl Iterator<Item = &'a u64>) -> u64 {
    let permuted = permute(block, 64, &IP);
    let mut left = (permuted >> 32) as u32;
    let mut right = permuted as u32;

    for &subkey in subkeys {
        let next_right = left ^ feistel(right, subkey);
        left = right;
        right = next_right;
    }

    let preoutput = ((right as u64) << 32) | left as u64;
    permute(preoutput, 64, &FP)
}

/// The round function F(R, K)
pub fn feistel(right: u32, subkey: u64) -> u32 {
    let expanded = permute(right as u64, 32, &E) ^ subkey;
    permute(substitute(expanded) as u64, 32, &P) as u32
}

/// Eight parallel S-box lookups, 6 bits in and 4 bits out each.
///
/// Row is formed by the outer bits of each group, column by the inner four.
fn substitute(bits48: u64) -> u32 {
    SBOX.iter().enumerate().fold(0u32, |out, (i, sbox)| {
        let group = ((bits48 >> (42 - 6 * i)) & 0x3f) as usize;
        let row = ((group & 0x20) >> 4) | (group & 0x01);
        let col = (group >> 1) & 0x0f;
        (out << 4) | sbox[row][col] as u32
    })
}

impl BlockCipher for Des {
    fn encrypt(&self, block: &[u8]) -> cipher_modes::Result<Vec<u8>> {
        ensure_block_len(block, BLOCK_SIZE)?;
        let mut input = [0u8; BLOCK_SIZE];
        input.copy_from_slice(block);
        Ok(self.encrypt_block(&input).to_vec())
    }

    fn decrypt(&self, block: &[u8]) -> cipher_modes::Result<Vec<u8>> {
        ensure_block_len(block, BLOCK_SIZE)?;
        let mut input = [0u8; BLOCK_SIZE];
        input.copy_from_slice(block);
        Ok(self.decrypt_block(&input).to_vec())
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }
}
