use anchor_lang::prelude::*;

use crate::errors::LvtError;
use crate::state::UserState;

#[derive(Accounts)]
pub struct RewardStrategyBoost<'info> {
    #[account(
        mut,
        seeds = [b"user", user_state.owner.as_ref()],
        bump = user_state.bump,
        has_one = owner,
    )]
    pub user_state: Account<'info, UserState>,

    pub owner: Signer<'info>,
}

pub fn handler(ctx: Context<RewardStrategyBoost>, strategy_type: u8) -> Result<()> {
    let user_state = &mut ctx.accounts.user_state;

    let boost: u64 = match strategy_type {
        1 => 50,  // market-making
        2 => 100, // arbitrage
        3 => 75,  // options hedging
        _ => 0,
    };

    if boost > 0 {
        user_state.accrued_rewards = user_state
            .accrued_rewards
            .checked_add(boost)
            .ok_or(LvtError::MathOverflow)?;
        msg!(
            "LVT: strategy {} boost of {} for {}",
            strategy_type,
            boost,
            user_state.owner
        );
    }

    Ok(())
}
