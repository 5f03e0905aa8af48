use anchor_lang::prelude::*;

use crate::errors::LvtError;
use crate::state::rewards::stake_tier;
use crate::state::UserState;

#[derive(Accounts)]
pub struct StakeTokens<'info> {
    #[account(
        mut,
        seeds = [b"user", user_state.owner.as_ref()],
        bump = user_state.bump,
        has_one = owner,
    )]
    pub user_state: Account<'info, UserState>,

    pub owner: Signer<'info>,
}

pub fn handler(ctx: Context<StakeTokens>, amount: u64, lockup_duration: i64) -> Result<()> {
    let user_state = &mut ctx.accounts.user_state;

    user_state.staked_amount = user_state
        .staked_amount
        .checked_add(amount)
        .ok_or(LvtError::MathOverflow)?;

    if lockup_duration > 0 {
        let current_time = Clock::get()?.unix_timestamp;
        user_state.lockup_end = current_time
            .checked_add(lockup_duration)
            .ok_or(LvtError::MathOverflow)?;
    }

    let (fee_discount, trading_rebate) = stake_tier(user_state.staked_amount);
    user_state.fee_discount = fee_discount;
    user_state.trading_rebate = trading_rebate;

    msg!(
        "LVT: {} staked {}, tier discount {}%, rebate {}%",
        user_state.owner,
        amount,
        fee_discount,
        trading_rebate
    );

    Ok(())
}
