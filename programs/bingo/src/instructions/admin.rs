use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

use crate::constants::CONFIG_SEED;
use crate::error::BingoError;
use crate::events::{EntryFeeUpdated, JoinWindowUpdated, TurnIntervalUpdated};
use crate::state::Config;

/// Accounts required to initialize the program configuration.
/// The payer becomes the authority allowed to update the defaults.
#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The Config state account holding the defaults for new games.
    #[account(
        init,
        payer = payer,
        space = 8 + Config::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Box<Account<'info, Config>>,

    /// Mint of the token entry fees are paid in.
    pub mint: InterfaceAccount<'info, Mint>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Accounts shared by the admin updates.
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,
}

/// Initializes the Config account with the entry fee, join window and turn
/// interval used by games created afterwards, and sets the authority.
///
/// # Arguments
/// * `ctx` - Context holding the InitializeConfig accounts
/// * `entry_fee` - Fee in base units of the mint
/// * `join_window` - Seconds between creation and the first draw
/// * `turn_interval` - Seconds between draws
pub fn process_initialize_config(
    ctx: Context<InitializeConfig>,
    entry_fee: u64,
    join_window: i64,
    turn_interval: i64,
) -> Result<()> {
    require!(
        join_window >= 0 && turn_interval >= 0,
        BingoError::InvalidDuration
    );

    let config = &mut ctx.accounts.config;
    config.bump = ctx.bumps.config;
    config.authority = ctx.accounts.payer.key();
    config.mint = ctx.accounts.mint.key();
    config.entry_fee = entry_fee;
    config.join_window = join_window;
    config.turn_interval = turn_interval;
    config.game_count = 0;

    msg!(
        "Config initialized: fee {}, join window {}s, turn interval {}s",
        entry_fee,
        join_window,
        turn_interval
    );
    Ok(())
}

pub fn process_update_entry_fee(ctx: Context<UpdateConfig>, entry_fee: u64) -> Result<()> {
    let caller = ctx.accounts.authority.key();
    ctx.accounts.config.set_entry_fee(&caller, entry_fee)?;

    msg!("Entry fee set to {}", entry_fee);
    emit!(EntryFeeUpdated { entry_fee });
    Ok(())
}

pub fn process_update_join_window(ctx: Context<UpdateConfig>, join_window: i64) -> Result<()> {
    let caller = ctx.accounts.authority.key();
    ctx.accounts.config.set_join_window(&caller, join_window)?;

    msg!("Join window set to {}s", join_window);
    emit!(JoinWindowUpdated { join_window });
    Ok(())
}

pub fn process_update_turn_interval(ctx: Context<UpdateConfig>, turn_interval: i64) -> Result<()> {
    let caller = ctx.accounts.authority.key();
    ctx.accounts.config.set_turn_interval(&caller, turn_interval)?;

    msg!("Turn interval set to {}s", turn_interval);
    emit!(TurnIntervalUpdated { turn_interval });
    Ok(())
}
