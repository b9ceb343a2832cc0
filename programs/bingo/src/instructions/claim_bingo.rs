use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::constants::{BOARD_SEED, GAME_SEED, POT_SEED};
use crate::error::BingoError;
use crate::events::GameOver;
use crate::state::{Board, Game};

/// Accounts required for claiming a bingo.
///
/// Ensures:
/// 1. The caller holds a board for this game.
/// 2. The pot is the game's escrow and pays out in the game's mint.
/// 3. The prize lands in a token account owned by the caller.
#[derive(Accounts)]
#[instruction(game_id: u64)]
pub struct ClaimBingo<'info> {
    /// The player claiming the pot.
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [GAME_SEED, game_id.to_le_bytes().as_ref()],
        bump = game.bump
    )]
    pub game: Box<Account<'info, Game>>,

    /// The caller's board.
    /// CHECK: Loaded in the handler, so a missing board fails with `NotAPlayer`.
    #[account(
        seeds = [BOARD_SEED, game.key().as_ref(), player.key().as_ref()],
        bump
    )]
    pub board: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [POT_SEED, game.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = game,
        token::token_program = token_program
    )]
    pub pot: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token account receiving the pot.
    #[account(
        mut,
        token::mint = mint,
        token::authority = player,
        token::token_program = token_program
    )]
    pub player_tokens: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(address = game.mint @ BingoError::InvalidMint)]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Verifies the caller's board against the drawn numbers and pays the pot.
///
/// Steps:
/// 1. Load the caller's board.
/// 2. Scan the winning patterns in order; the first covered one wins.
/// 3. Mark the game complete and transfer `entry_fee * player_count` to the caller.
pub fn process_bingo(ctx: Context<ClaimBingo>, game_id: u64) -> Result<()> {
    let board = Board::load(&ctx.accounts.board)?;
    let winner = ctx.accounts.player.key();

    let settlement = ctx.accounts.game.settle(winner, &board.packed())?;

    let game = &ctx.accounts.game;
    let id_bytes = game.id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[GAME_SEED, &id_bytes, &[game.bump]]];

    transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.pot.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.player_tokens.to_account_info(),
                authority: game.to_account_info(),
            },
            signer_seeds,
        ),
        settlement.amount,
        ctx.accounts.mint.decimals,
    )?;

    msg!(
        "Bingo in game {} on pattern {}: {} paid to {}",
        game_id,
        settlement.pattern,
        settlement.amount,
        winner
    );
    emit!(GameOver {
        game_id,
        winner,
        amount: settlement.amount,
        pattern: settlement.pattern as u8,
    });
    Ok(())
}
