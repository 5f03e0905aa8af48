use anchor_lang::prelude::*;

use crate::errors::LvtError;
use crate::state::State;

/// Volatility above this raises the fee; at or below, lowers it.
const HIGH_VOLATILITY_THRESHOLD: u64 = 1000;
/// Fee step per auto-adjustment, basis points.
const AUTO_FEE_STEP_BPS: u64 = 50;

#[derive(Accounts)]
pub struct AutoAdjustFee<'info> {
    #[account(mut)]
    pub state: Account<'info, State>,
}

pub fn handler(ctx: Context<AutoAdjustFee>, current_volatility: u64) -> Result<()> {
    let state = &mut ctx.accounts.state;

    if current_volatility > HIGH_VOLATILITY_THRESHOLD {
        state.fee_rate = state
            .fee_rate
            .checked_add(AUTO_FEE_STEP_BPS)
            .ok_or(LvtError::MathOverflow)?;
    } else {
        state.fee_rate = state
            .fee_rate
            .checked_sub(AUTO_FEE_STEP_BPS)
            .ok_or(LvtError::MathOverflow)?;
    }
    state.last_fee_update = Clock::get()?.unix_timestamp;

    msg!(
        "LVT: fee auto-adjusted to {} bps at volatility {}",
        state.fee_rate,
        current_volatility
    );

    Ok(())
}
