use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{CONFIG_SEED, GAME_SEED, POT_SEED};
use crate::error::BingoError;
use crate::events::GameCreated;
use crate::state::{Config, Game};

/// Accounts required to open a new game.
/// Anyone may create a game; the creator pays rent for the game and its pot.
#[derive(Accounts)]
pub struct CreateGame<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    /// Config account; its game counter yields the new id.
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        init,
        payer = creator,
        space = 8 + Game::INIT_SPACE,
        seeds = [GAME_SEED, config.next_game_id().to_le_bytes().as_ref()],
        bump
    )]
    pub game: Box<Account<'info, Game>>,

    /// Escrow holding the entry fees, owned by the game account.
    #[account(
        init,
        payer = creator,
        seeds = [POT_SEED, game.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = game,
        token::token_program = token_program
    )]
    pub pot: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(address = config.mint @ BingoError::InvalidMint)]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

/// Creates the next game, snapshotting the current defaults.
pub fn process_create_game(ctx: Context<CreateGame>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let game_id = ctx.accounts.config.allocate_game_id()?;
    let config = &ctx.accounts.config;
    ctx.accounts.game.open(game_id, config, now, ctx.bumps.game);

    msg!(
        "Game {} created, entry fee {}",
        game_id,
        ctx.accounts.game.entry_fee
    );
    emit!(GameCreated { game_id });
    Ok(())
}
