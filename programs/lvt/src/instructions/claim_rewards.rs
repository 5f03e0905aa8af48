use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::LvtError;
use crate::state::UserState;

/// Minimum cumulative volume before rewards can be claimed.
const MIN_CLAIM_VOLUME: u64 = 100;
/// Cooldown between claims, seconds.
const CLAIM_COOLDOWN: i64 = 3600;

#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    #[account(
        mut,
        seeds = [b"user", user_state.owner.as_ref()],
        bump = user_state.bump,
        has_one = owner,
    )]
    pub user_state: Account<'info, UserState>,

    pub owner: Signer<'info>,

    #[account(mut)]
    pub treasury: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<ClaimRewards>) -> Result<()> {
    let user_state = &mut ctx.accounts.user_state;
    let current_time = Clock::get()?.unix_timestamp;

    // Minimum cumulative volume guards against wash-trading for rewards.
    require!(
        user_state.cumulative_volume >= MIN_CLAIM_VOLUME,
        LvtError::InsufficientLiquidityForRewards
    );
    require!(
        current_time - user_state.last_claim_time >= CLAIM_COOLDOWN,
        LvtError::MinimumHoldingPeriodNotMet
    );

    // Treasury custody (the signing authority for the treasury token
    // account) is undefined; the token transfer is intentionally omitted
    // and the claim only settles the accrued balance.
    let claimed = user_state.accrued_rewards;
    user_state.accrued_rewards = 0;
    user_state.last_claim_time = current_time;

    msg!("LVT: {} claimed {} rewards", user_state.owner, claimed);

    Ok(())
}
