//! The AES state and its round transformations.
//!
//! A block is held as a 4x4 matrix filled column by column: byte `i` of the
//! input lands in `data[i % 4][i / 4]`.

use crate::gf::{gf_mul, xtime};
use crate::tables::{INV_SBOX, SBOX};

/// One round key, laid out like the state it is XORed into.
pub type RoundKey = [[u8; 4]; 4];

/// A 16-byte AES block as a 4x4 matrix
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AesBlock {
    pub(crate) data: [[u8; 4]; 4],
}

impl AesBlock {
    /// Creates a new block from 16 bytes, filling the matrix column-wise
    pub fn new(bytes: &[u8; 16]) -> Self {
        let mut data = [[0u8; 4]; 4];
        for col in 0..4 {
            for row in 0..4 {
                data[row][col] = bytes[col * 4 + row];
            }
        }
        AesBlock { data }
    }

    /// Converts the block back to 16 bytes
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        for col in 0..4 {
            for row in 0..4 {
                bytes[col * 4 + row] = self.data[row][col];
            }
        }
        bytes
    }
}

/// SubBytes: replace every byte with its S-box value
pub fn sub_bytes(block: &mut AesBlock) {
    for row in block.data.iter_mut() {
        for byte in row.iter_mut() {
            *byte = SBOX[*byte as usize];
        }
    }
}

/// Inverse SubBytes
pub fn inv_sub_bytes(block: &mut AesBlock) {
    for row in block.data.iter_mut() {
        for byte in row.iter_mut() {
            *byte = INV_SBOX[*byte as usize];
        }
    }
}

/// ShiftRows: row `r` rotates left by `r` positions
pub fn shift_rows(block: &mut AesBlock) {
    for row in 1..4 {
        block.data[row].rotate_left(row);
    }
}

/// Inverse ShiftRows: row `r` rotates right by `r` positions
pub fn inv_shift_rows(block: &mut AesBlock) {
    for row in 1..4 {
        block.data[row].rotate_right(row);
    }
}

/// MixColumns: multiply each column by the fixed polynomial in GF(2^8)
///
/// ```text
/// [2 3 1 1]
/// [1 2 3 1]
/// [1 1 2 3]
/// [3 1 1 2]
/// ```
pub fn mix_columns(block: &mut AesBlock) {
    for col in 0..4 {
        let a = [
            block.data[0][col],
            block.data[1][col],
            block.data[2][col],
            block.data[3][col],
        ];
        let all = a[0] ^ a[1] ^ a[2] ^ a[3];

        // 2a ^ 3b ^ c ^ d == a ^ all ^ xtime(a ^ b)
        for row in 0..4 {
            block.data[row][col] = a[row] ^ all ^ xtime(a[row] ^ a[(row + 1) % 4]);
        }
    }
}

/// Inverse MixColumns
///
/// ```text
/// [0xE 0xB 0xD 0x9]
/// [0x9 0xE 0xB 0xD]
/// [0xD 0x9 0xE 0xB]
/// [0xB 0xD 0x9 0xE]
/// ```
pub fn inv_mix_columns(block: &mut AesBlock) {
    for col in 0..4 {
        let a = [
            block.data[0][col],
            block.data[1][col],
            block.data[2][col],
            block.data[3][col],
        ];

        for row in 0..4 {
            block.data[row][col] = gf_mul(0x0e, a[row])
                ^ gf_mul(0x0b, a[(row + 1) % 4])
                ^ gf_mul(0x0d, a[(row + 2) % 4])
                ^ gf_mul(0x09, a[(row + 3) % 4]);
        }
    }
}

/// AddRoundKey: XOR with the round key
pub fn add_round_key(block: &mut AesBlock, round_key: &RoundKey) {
    for row in 0..4 {
        for col in 0..4 {
            block.data[row][col] ^= round_key[row][col];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(bytes: [u8; 4]) -> AesBlock {
        let mut block = AesBlock::new(&[0u8; 16]);
        for row in 0..4 {
            block.data[row][0] = bytes[row];
        }
        block
    }

    #[test]
    fn test_column_major_layout() {
        let bytes: [u8; 16] = core::array::from_fn(|i| i as u8);
        let block = AesBlock::new(&bytes);
        for i in 0..16 {
            assert_eq!(block.data[i % 4][i / 4], i as u8);
        }
        assert_eq!(block.to_bytes(), bytes);
    }

    #[test]
    fn test_mix_columns_known_column() {
        let mut block = column([0xdb, 0x13, 0x53, 0x45]);
        mix_columns(&mut block);
        let mixed: Vec<u8> = (0..4).map(|row| block.data[row][0]).collect();
        assert_eq!(mixed, vec![0x8e, 0x4d, 0xa1, 0xbc]);

        inv_mix_columns(&mut block);
        let restored: Vec<u8> = (0..4).map(|row| block.data[row][0]).collect();
        assert_eq!(restored, vec![0xdb, 0x13, 0x53, 0x45]);
    }

    #[test]
    fn test_shift_rows_roundtrip() {
        let bytes: [u8; 16] = core::array::from_fn(|i| i as u8);
        let mut block = AesBlock::new(&bytes);
        shift_rows(&mut block);
        assert_eq!(block.data[1], [5, 9, 13, 1]);
        assert_eq!(block.data[3], [15, 3, 7, 11]);
        inv_shift_rows(&mut block);
        assert_eq!(block.to_bytes(), bytes);
    }

    #[test]
    fn test_sub_bytes_roundtrip() {
        let bytes: [u8; 16] = core::array::from_fn(|i| (i * 17) as u8);
        let mut block = AesBlock::new(&bytes);
        sub_bytes(&mut block);
        assert_eq!(block.data[0][0], 0x63);
        inv_sub_bytes(&mut block);
        assert_eq!(block.to_bytes(), bytes);
    }
}
