use anchor_lang::prelude::*;

use crate::constants::{BOARD_SEED, GAME_SEED};
use crate::state::{Board, Game};

#[derive(Accounts)]
#[instruction(game_id: u64)]
pub struct ViewGame<'info> {
    #[account(
        seeds = [GAME_SEED, game_id.to_le_bytes().as_ref()],
        bump = game.bump
    )]
    pub game: Account<'info, Game>,
}

#[derive(Accounts)]
#[instruction(game_id: u64, player: Pubkey)]
pub struct ViewBoard<'info> {
    #[account(
        seeds = [GAME_SEED, game_id.to_le_bytes().as_ref()],
        bump = game.bump
    )]
    pub game: Account<'info, Game>,

    /// CHECK: Loaded in the handler, so a player who never joined fails with `NotAPlayer`.
    #[account(
        seeds = [BOARD_SEED, game.key().as_ref(), player.as_ref()],
        bump
    )]
    pub board: UncheckedAccount<'info>,
}

/// Returns the full game record.
pub fn process_get_game(ctx: Context<ViewGame>, _game_id: u64) -> Result<Game> {
    Ok(Game::clone(&ctx.accounts.game))
}

/// Returns a player's packed board.
pub fn process_get_board(
    ctx: Context<ViewBoard>,
    _game_id: u64,
    _player: Pubkey,
) -> Result<[u8; 32]> {
    let board = Board::load(&ctx.accounts.board)?;
    Ok(board.packed().word())
}
