use anchor_lang::prelude::*;

use crate::errors::LvtError;
use crate::state::TraderLeaderboard;

#[derive(Accounts)]
pub struct UpdateLeaderboard<'info> {
    #[account(
        init_if_needed,
        payer = user,
        space = TraderLeaderboard::SIZE,
        seeds = [b"leaderboard", user.key().as_ref()],
        bump,
    )]
    pub leaderboard: Account<'info, TraderLeaderboard>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<UpdateLeaderboard>, trade_volume: u64, trade_count: u64) -> Result<()> {
    let leaderboard = &mut ctx.accounts.leaderboard;

    leaderboard.user = ctx.accounts.user.key();
    leaderboard.trade_volume = leaderboard
        .trade_volume
        .checked_add(trade_volume)
        .ok_or(LvtError::MathOverflow)?;
    leaderboard.trade_count = leaderboard
        .trade_count
        .checked_add(trade_count)
        .ok_or(LvtError::MathOverflow)?;
    leaderboard.last_update = Clock::get()?.unix_timestamp;
    leaderboard.bump = ctx.bumps.leaderboard;

    msg!(
        "LVT: leaderboard for {}: volume {}, trades {}",
        leaderboard.user,
        leaderboard.trade_volume,
        leaderboard.trade_count
    );

    Ok(())
}
