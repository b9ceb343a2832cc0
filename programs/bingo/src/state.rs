use anchor_lang::prelude::*;

use crate::board::{derive_board, PackedBoard};
use crate::entropy::draw_number;
use crate::error::BingoError;
use crate::patterns::first_winning_pattern;

/// Program-wide defaults applied to games created from now on.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Config {
    /// The only account allowed to update the defaults.
    pub authority: Pubkey,

    /// Mint of the token every game escrows its entry fees in.
    pub mint: Pubkey,

    /// Entry fee, in base units of `mint`, snapshotted by new games.
    pub entry_fee: u64,

    /// Seconds after creation before the first draw is allowed.
    pub join_window: i64,

    /// Seconds between two consecutive draws.
    pub turn_interval: i64,

    /// Number of games created so far. Ids start at 1.
    pub game_count: u64,

    pub bump: u8,
}

impl Config {
    pub fn ensure_authority(&self, caller: &Pubkey) -> Result<()> {
        if *caller != self.authority {
            return Err(BingoError::NotAuthorized.into());
        }
        Ok(())
    }

    /// Id the next created game will receive.
    pub fn next_game_id(&self) -> u64 {
        self.game_count.saturating_add(1)
    }

    /// Reserves the next id.
    pub fn allocate_game_id(&mut self) -> Result<u64> {
        self.game_count = self
            .game_count
            .checked_add(1)
            .ok_or(BingoError::MathOverflow)?;
        Ok(self.game_count)
    }

    pub fn set_entry_fee(&mut self, caller: &Pubkey, entry_fee: u64) -> Result<()> {
        self.ensure_authority(caller)?;
        self.entry_fee = entry_fee;
        Ok(())
    }

    pub fn set_join_window(&mut self, caller: &Pubkey, join_window: i64) -> Result<()> {
        self.ensure_authority(caller)?;
        require!(join_window >= 0, BingoError::InvalidDuration);
        self.join_window = join_window;
        Ok(())
    }

    pub fn set_turn_interval(&mut self, caller: &Pubkey, turn_interval: i64) -> Result<()> {
        self.ensure_authority(caller)?;
        require!(turn_interval >= 0, BingoError::InvalidDuration);
        self.turn_interval = turn_interval;
        Ok(())
    }
}

/// Set of drawn values over the whole byte domain, one bit per value.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawnNumbers {
    bits: [u8; 32],
}

impl DrawnNumbers {
    /// Marks `value` as drawn. Returns `false` if it already was.
    pub fn insert(&mut self, value: u8) -> bool {
        let (byte, mask) = Self::slot(value);
        let fresh = self.bits[byte] & mask == 0;
        self.bits[byte] |= mask;
        fresh
    }

    pub fn contains(&self, value: u8) -> bool {
        let (byte, mask) = Self::slot(value);
        self.bits[byte] & mask != 0
    }

    fn slot(value: u8) -> (usize, u8) {
        ((value / 8) as usize, 1 << (value % 8))
    }
}

/// Outcome of a successful bingo claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub pattern: usize,
    pub amount: u64,
}

#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Game {
    /// Position in creation order, starting at 1.
    pub id: u64,

    /// Mint of the escrowed token.
    pub mint: Pubkey,

    /// Entry fee snapshotted from the config at creation.
    pub entry_fee: u64,

    /// Join window snapshotted from the config at creation.
    pub join_window: i64,

    /// Turn interval snapshotted from the config at creation.
    pub turn_interval: i64,

    /// Number of joined players. The pot holds `entry_fee * player_count`.
    pub player_count: u64,

    /// Creation timestamp. Zero means the game was never created.
    pub start_time: i64,

    /// Timestamp of the latest draw, zero before the first one.
    pub last_draw_time: i64,

    /// Number of successful draws.
    pub draw_count: u32,

    /// Set by the first draw. Joining is closed from then on.
    pub in_progress: bool,

    /// Set once the pot has been claimed. Terminal.
    pub complete: bool,

    /// Paid winner, default until the game is complete.
    pub winner: Pubkey,

    pub drawn: DrawnNumbers,

    pub bump: u8,
}

impl Game {
    /// Opens a new game with the config's current defaults.
    pub fn open(&mut self, id: u64, config: &Config, now: i64, bump: u8) {
        self.id = id;
        self.mint = config.mint;
        self.entry_fee = config.entry_fee;
        self.join_window = config.join_window;
        self.turn_interval = config.turn_interval;
        self.player_count = 0;
        self.start_time = now;
        self.last_draw_time = 0;
        self.draw_count = 0;
        self.in_progress = false;
        self.complete = false;
        self.winner = Pubkey::default();
        self.drawn = DrawnNumbers::default();
        self.bump = bump;
    }

    /// Loads a game from an account that may not exist yet.
    pub fn load(info: &AccountInfo) -> Result<Self> {
        if info.data_is_empty() || info.owner != &crate::ID {
            return err!(BingoError::GameNotCreated);
        }
        let data = info.try_borrow_data()?;
        Game::try_deserialize(&mut &data[..])
    }

    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        self.try_serialize(&mut &mut data[..])
    }

    /// Seats a player and writes their board. The caller collects the entry fee
    /// in `mint`, which must be the game's.
    pub fn join(
        &mut self,
        board: &mut Board,
        player: Pubkey,
        mint: &Pubkey,
        entropy: &[u8; 32],
    ) -> Result<()> {
        require!(self.start_time != 0, BingoError::GameNotCreated);
        require!(!self.complete, BingoError::GameIsOver);
        require!(!self.in_progress, BingoError::GameInProgress);
        require!(board.packed().is_empty(), BingoError::CannotJoinTwice);
        require_keys_eq!(*mint, self.mint, BingoError::InvalidMint);

        let packed = derive_board(entropy, self.player_count, self.id);
        board.game_id = self.id;
        board.player = player;
        board.word = packed.word();

        self.player_count = self
            .player_count
            .checked_add(1)
            .ok_or(BingoError::MathOverflow)?;
        Ok(())
    }

    /// Reveals the next number if the join window or turn interval has elapsed.
    pub fn draw(&mut self, now: i64, entropy: &[u8; 32]) -> Result<u8> {
        require!(!self.complete, BingoError::GameIsOver);

        if self.in_progress {
            let next_turn = self.last_draw_time.saturating_add(self.turn_interval);
            require!(now >= next_turn, BingoError::WaitForNextTurn);
        } else {
            let opens_at = self.start_time.saturating_add(self.join_window);
            require!(now >= opens_at, BingoError::GameNotStarted);
            self.in_progress = true;
        }

        let number = draw_number(entropy, self.id, self.draw_count);
        self.drawn.insert(number);
        self.last_draw_time = now;
        self.draw_count = self
            .draw_count
            .checked_add(1)
            .ok_or(BingoError::MathOverflow)?;
        Ok(number)
    }

    /// Checks `board` against the drawn numbers and, on a win, closes the game.
    ///
    /// The returned amount is the whole pot; transferring it is up to the caller.
    pub fn settle(&mut self, winner: Pubkey, board: &PackedBoard) -> Result<Settlement> {
        require!(!self.complete, BingoError::GameIsOver);

        let pattern = first_winning_pattern(board, &self.drawn)
            .ok_or(BingoError::BingoCheckFailed)?;
        let amount = self.pot()?;

        self.complete = true;
        self.winner = winner;
        Ok(Settlement { pattern, amount })
    }

    pub fn pot(&self) -> Result<u64> {
        Ok(self
            .entry_fee
            .checked_mul(self.player_count)
            .ok_or(BingoError::MathOverflow)?)
    }
}

/// One player's board in one game. Written once, at join time.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Board {
    pub game_id: u64,
    pub player: Pubkey,
    pub word: [u8; 32],
    pub bump: u8,
}

impl Board {
    pub fn packed(&self) -> PackedBoard {
        PackedBoard::from_word(self.word)
    }

    /// Loads a player's board, failing with `NotAPlayer` when there is none.
    pub fn load(info: &AccountInfo) -> Result<Self> {
        if info.data_is_empty() || info.owner != &crate::ID {
            return err!(BingoError::NotAPlayer);
        }
        let data = info.try_borrow_data()?;
        let board = Board::try_deserialize(&mut &data[..])?;
        require!(!board.packed().is_empty(), BingoError::NotAPlayer);
        Ok(board)
    }
}
