use anchor_lang::prelude::*;

/// Board packing and per-player board derivation.
pub mod board;

/// Program-wide constants: account seeds and board geometry.
pub mod constants;

/// Slot-hash entropy and draw derivation.
pub mod entropy;

/// Custom error types returned when instructions fail.
pub mod error;

/// Events emitted for off-chain consumers.
pub mod events;

/// Instruction handlers: configuration, game creation, joining, drawing
/// and claiming.
pub mod instructions;

/// Fixed winning patterns and the win check.
pub mod patterns;

/// On-chain accounts: `Config`, `Game` and `Board`.
pub mod state;


pub use instructions::*;
pub use state::Game;

declare_id!("Ag1tPN2rBvvSHaTJFb9S2dTFB8Q2fKWRtXXW47zH5y1P");

#[program]
pub mod bingo {
    use super::*;

    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        entry_fee: u64,
        join_window: i64,
        turn_interval: i64,
    ) -> Result<()> {
        process_initialize_config(ctx, entry_fee, join_window, turn_interval)
    }

    pub fn update_entry_fee(ctx: Context<UpdateConfig>, entry_fee: u64) -> Result<()> {
        process_update_entry_fee(ctx, entry_fee)
    }

    pub fn update_join_window(ctx: Context<UpdateConfig>, join_window: i64) -> Result<()> {
        process_update_join_window(ctx, join_window)
    }

    pub fn update_turn_interval(ctx: Context<UpdateConfig>, turn_interval: i64) -> Result<()> {
        process_update_turn_interval(ctx, turn_interval)
    }

    pub fn create_game(ctx: Context<CreateGame>) -> Result<()> {
        process_create_game(ctx)
    }

    pub fn join_game(ctx: Context<JoinGame>, game_id: u64) -> Result<()> {
        process_join_game(ctx, game_id)
    }

    pub fn draw(ctx: Context<Draw>, game_id: u64) -> Result<()> {
        process_draw(ctx, game_id)
    }

    pub fn bingo(ctx: Context<ClaimBingo>, game_id: u64) -> Result<()> {
        process_bingo(ctx, game_id)
    }

    pub fn get_game(ctx: Context<ViewGame>, game_id: u64) -> Result<Game> {
        process_get_game(ctx, game_id)
    }

    pub fn get_board(
        ctx: Context<ViewBoard>,
        game_id: u64,
        player: Pubkey,
    ) -> Result<[u8; 32]> {
        process_get_board(ctx, game_id, player)
    }
}
