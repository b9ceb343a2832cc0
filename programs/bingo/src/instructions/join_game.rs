use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};
use solana_program::sysvar::slot_hashes;

use crate::constants::{BOARD_SEED, GAME_SEED, POT_SEED};
use crate::entropy::recent_slot_hash;
use crate::events::PlayerJoined;
use crate::state::{Board, Game};

/// Accounts required to join a game.
/// Handles:
/// - Board assignment
/// - Entry fee transfer into the game's pot
#[derive(Accounts)]
#[instruction(game_id: u64)]
pub struct JoinGame<'info> {
    /// The player paying the entry fee.
    #[account(mut)]
    pub player: Signer<'info>,

    /// Game being joined.
    /// CHECK: Loaded in the handler, so an unknown id fails with `GameNotCreated`.
    #[account(
        mut,
        seeds = [GAME_SEED, game_id.to_le_bytes().as_ref()],
        bump
    )]
    pub game: UncheckedAccount<'info>,

    /// The player's board. A non-empty board means the player already joined.
    #[account(
        init_if_needed,
        payer = player,
        space = 8 + Board::INIT_SPACE,
        seeds = [BOARD_SEED, game.key().as_ref(), player.key().as_ref()],
        bump
    )]
    pub board: Box<Account<'info, Board>>,

    /// Escrow receiving the fee.
    /// CHECK: Address derived from the game; the token program validates the account.
    #[account(
        mut,
        seeds = [POT_SEED, game.key().as_ref()],
        bump
    )]
    pub pot: UncheckedAccount<'info>,

    /// Token account the fee is paid from.
    #[account(
        mut,
        token::mint = mint,
        token::authority = player,
        token::token_program = token_program
    )]
    pub player_tokens: Box<InterfaceAccount<'info, TokenAccount>>,

    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// CHECK: Address is the SlotHashes sysvar.
    #[account(address = slot_hashes::ID)]
    pub slot_hashes: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

/// Joins a game for the caller.
///
/// Steps performed:
/// 1. Check the game exists, is not over, and has not started drawing.
/// 2. Check the caller holds no board yet and pays in the game's mint.
/// 3. Derive and store the board from the latest slot hash.
/// 4. Transfer the entry fee from the player into the pot.
///
/// A failing transfer aborts the transaction, so nothing above persists.
pub fn process_join_game(ctx: Context<JoinGame>, game_id: u64) -> Result<()> {
    let mut game = Game::load(&ctx.accounts.game)?;
    let player = ctx.accounts.player.key();
    let entropy = recent_slot_hash(&ctx.accounts.slot_hashes)?;

    game.join(
        &mut ctx.accounts.board,
        player,
        &ctx.accounts.mint.key(),
        &entropy,
    )?;
    ctx.accounts.board.bump = ctx.bumps.board;
    game.store(&ctx.accounts.game)?;

    transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.player_tokens.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.pot.to_account_info(),
                authority: ctx.accounts.player.to_account_info(),
            },
        ),
        game.entry_fee,
        ctx.accounts.mint.decimals,
    )?;

    msg!(
        "Player {} joined game {} ({} players)",
        player,
        game_id,
        game.player_count
    );
    emit!(PlayerJoined { game_id, player });
    Ok(())
}
