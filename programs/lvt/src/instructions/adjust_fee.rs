use anchor_lang::prelude::*;

use crate::errors::LvtError;
use crate::state::State;

/// Liquidity below this raises the fee; at or above, lowers it.
const LOW_LIQUIDITY_THRESHOLD: u64 = 1_000_000;
/// Fee step per adjustment, basis points.
const FEE_STEP_BPS: u64 = 100;

#[derive(Accounts)]
pub struct UpdatePoolFees<'info> {
    #[account(mut)]
    pub state: Account<'info, State>,

    pub admin: Signer<'info>,
}

pub fn handler(ctx: Context<UpdatePoolFees>) -> Result<()> {
    let state = &mut ctx.accounts.state;

    // Thin liquidity raises fees to discourage churn; deep liquidity
    // lowers them.
    if state.total_liquidity < LOW_LIQUIDITY_THRESHOLD {
        state.fee_rate = state
            .fee_rate
            .checked_add(FEE_STEP_BPS)
            .ok_or(LvtError::MathOverflow)?;
    } else {
        state.fee_rate = state
            .fee_rate
            .checked_sub(FEE_STEP_BPS)
            .ok_or(LvtError::MathOverflow)?;
    }
    state.last_fee_update = Clock::get()?.unix_timestamp;

    msg!("LVT: fee adjusted to {} bps", state.fee_rate);

    Ok(())
}
