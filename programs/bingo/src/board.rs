use solana_program::keccak;

use crate::constants::{BOARD_CELLS, BOARD_WORD_LEN};

/// Byte offset of cell 0 inside the packed word.
const CELL_OFFSET: usize = BOARD_WORD_LEN - BOARD_CELLS;

/// A 24-cell board packed into a 32-byte big-endian word.
///
/// Cells live in the low 24 bytes, cell 0 being the most significant of them.
/// The high 8 bytes are always zero, and an all-zero word means "no board".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PackedBoard([u8; BOARD_WORD_LEN]);

impl PackedBoard {
    /// Wraps a stored word, clearing anything above the 24 cell bytes.
    pub fn from_word(word: [u8; BOARD_WORD_LEN]) -> Self {
        let mut board = Self(word);
        board.0[..CELL_OFFSET].fill(0);
        board
    }

    pub fn from_cells(cells: [u8; BOARD_CELLS]) -> Self {
        let mut word = [0u8; BOARD_WORD_LEN];
        word[CELL_OFFSET..].copy_from_slice(&cells);
        Self(word)
    }

    /// Keeps the low 24 bytes of a 32-byte digest.
    fn from_digest(digest: &[u8; 32]) -> Self {
        let mut word = [0u8; BOARD_WORD_LEN];
        word[CELL_OFFSET..].copy_from_slice(&digest[CELL_OFFSET..]);
        Self(word)
    }

    pub fn word(&self) -> [u8; BOARD_WORD_LEN] {
        self.0
    }

    /// Value of cell `index`. Panics if `index >= 24`.
    pub fn cell(&self, index: usize) -> u8 {
        assert!(index < BOARD_CELLS, "cell index out of range");
        self.0[CELL_OFFSET + index]
    }

    pub fn is_empty(&self) -> bool {
        self.0 == [0; BOARD_WORD_LEN]
    }
}

/// Derives the board for the next player of a game.
///
/// The player count salts the hash, so players joining within the same slot
/// still receive distinct boards. A digest whose low 24 bytes are all zero is
/// re-hashed, since the zero word is reserved as the "no board" sentinel.
pub fn derive_board(entropy: &[u8; 32], player_count: u64, game_id: u64) -> PackedBoard {
    let mut digest = keccak::hashv(&[
        &entropy[..],
        &player_count.to_be_bytes()[..],
        &game_id.to_be_bytes()[..],
    ])
    .to_bytes();

    loop {
        let board = PackedBoard::from_digest(&digest);
        if !board.is_empty() {
            return board;
        }
        digest = keccak::hash(&digest).to_bytes();
    }
}
