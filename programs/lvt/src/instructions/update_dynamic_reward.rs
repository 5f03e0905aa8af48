use anchor_lang::prelude::*;

use crate::errors::LvtError;
use crate::state::rewards::{market_adjusted_multiplier, REWARD_WINDOW_SIZE};
use crate::state::State;

#[derive(Accounts)]
pub struct UpdateDynamicReward<'info> {
    #[account(mut)]
    pub state: Account<'info, State>,
}

pub fn handler(
    ctx: Context<UpdateDynamicReward>,
    recent_reward: u64,
    market_volatility: u64,
    order_book_gap: u64,
) -> Result<()> {
    let state = &mut ctx.accounts.state;

    state.reward_sum = state
        .reward_sum
        .checked_add(recent_reward)
        .ok_or(LvtError::MathOverflow)?;
    state.reward_count = state
        .reward_count
        .checked_add(1)
        .ok_or(LvtError::MathOverflow)?;

    if state.reward_count >= REWARD_WINDOW_SIZE {
        let average = state.reward_sum / state.reward_count;
        state.global_reward_multiplier =
            market_adjusted_multiplier(average, market_volatility, order_book_gap)
                .ok_or(LvtError::MathOverflow)?;
        state.reward_sum = 0;
        state.reward_count = 0;

        msg!(
            "LVT: reward multiplier refreshed to {}",
            state.global_reward_multiplier
        );
    }

    Ok(())
}
