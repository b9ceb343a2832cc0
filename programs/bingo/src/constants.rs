/// Seed of the single program-wide configuration account.
pub const CONFIG_SEED: &[u8] = b"config";

/// Seed prefix of a game account, followed by the game id in little-endian.
pub const GAME_SEED: &[u8] = b"game";

/// Seed prefix of a board account, followed by the game and player keys.
pub const BOARD_SEED: &[u8] = b"board";

/// Seed prefix of a game's escrow token account, followed by the game key.
pub const POT_SEED: &[u8] = b"pot";

/// Number of cells on a board (5x5 card without the centre square).
pub const BOARD_CELLS: usize = 24;

/// Width in bytes of the word a board is packed into.
pub const BOARD_WORD_LEN: usize = 32;

/// Number of fixed winning patterns.
pub const PATTERN_COUNT: usize = 12;

/// Length of every raw pattern entry in the pattern table.
pub const PATTERN_LEN: usize = 5;
