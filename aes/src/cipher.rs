//! The AES block engine

use cipher_modes::{ensure_block_len, BlockCipher};

use crate::error::Result;
use crate::key_schedule::KeySchedule;
use crate::state::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes, AesBlock,
};

/// AES block size in bytes
pub const BLOCK_SIZE: usize = 16;

/// An AES cipher bound to one key
#[derive(Clone, Debug)]
pub struct Aes {
    schedule: KeySchedule,
}

impl Aes {
    /// Expand `key` (16, 24 or 32 bytes) and build the cipher.
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Aes {
            schedule: KeySchedule::expand(key)?,
        })
    }

    /// Number of rounds for this key size
    pub fn rounds(&self) -> usize {
        self.schedule.rounds()
    }

    /// Encrypt one block:
    /// 1. AddRoundKey with round key 0
    /// 2. Nr-1 main rounds (SubBytes, ShiftRows, MixColumns, AddRoundKey)
    /// 3. Final round without MixColumns
    pub fn encrypt_block(&self, plaintext: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let rounds = self.schedule.rounds();
        let mut block = AesBlock::new(plaintext);

        add_round_key(&mut block, self.schedule.round_key(0));

        for round in 1..rounds {
            sub_bytes(&mut block);
            shift_rows(&mut block);
            mix_columns(&mut block);
            add_round_key(&mut block, self.schedule.round_key(round));
        }

        sub_bytes(&mut block);
        shift_rows(&mut block);
        add_round_key(&mut block, self.schedule.round_key(rounds));

        block.to_bytes()
    }

    /// Decrypt one block, running the encryption rounds backwards:
    /// 1. AddRoundKey with the last round key
    /// 2. Nr-1 rounds (InvShiftRows, InvSubBytes, AddRoundKey, InvMixColumns)
    /// 3. Final round without InvMixColumns
    pub fn decrypt_block(&self, ciphertext: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let rounds = self.schedule.rounds();
        let mut block = AesBlock::new(ciphertext);

        add_round_key(&mut block, self.schedule.round_key(rounds));

        for round in (1..rounds).rev() {
            inv_shift_rows(&mut block);
            inv_sub_bytes(&mut block);
            add_round_key(&mut block, self.schedule.round_key(round));
            inv_mix_columns(&mut block);
        }

        inv_shift_rows(&mut block);
        inv_sub_bytes(&mut block);
        add_round_key(&mut block, self.schedule.round_key(0));

        block.to_bytes()
    }
}

impl BlockCipher for Aes {
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
