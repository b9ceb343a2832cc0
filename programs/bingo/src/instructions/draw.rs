use anchor_lang::prelude::*;
use solana_program::sysvar::slot_hashes;

use crate::constants::GAME_SEED;
use crate::entropy::recent_slot_hash;
use crate::events::NumberDrawn;
use crate::state::Game;

/// Accounts required to draw the next number.
///
/// Anyone may draw; the game itself enforces:
/// 1. The game is not over.
/// 2. The join window has elapsed before the first draw.
/// 3. The turn interval has elapsed since the previous draw.
#[derive(Accounts)]
#[instruction(game_id: u64)]
pub struct Draw<'info> {
    /// Account paying transaction fees.
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [GAME_SEED, game_id.to_le_bytes().as_ref()],
        bump = game.bump
    )]
    pub game: Account<'info, Game>,

    /// CHECK: Address is the SlotHashes sysvar.
    #[account(address = slot_hashes::ID)]
    pub slot_hashes: UncheckedAccount<'info>,
}

pub fn process_draw(ctx: Context<Draw>, game_id: u64) -> Result<()> {
    let clock = Clock::get()?;
    let entropy = recent_slot_hash(&ctx.accounts.slot_hashes)?;
    let game = &mut ctx.accounts.game;

    let number = game.draw(clock.unix_timestamp, &entropy)?;

    msg!("Game {} draw #{}: {}", game_id, game.draw_count, number);
    emit!(NumberDrawn { game_id, number });
    Ok(())
}
