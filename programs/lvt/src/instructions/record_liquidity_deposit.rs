use anchor_lang::prelude::*;

use crate::errors::LvtError;
use crate::state::LpState;

#[derive(Accounts)]
pub struct RecordLiquidityDeposit<'info> {
    #[account(
        mut,
        seeds = [b"lp", lp_state.owner.as_ref()],
        bump = lp_state.bump,
        has_one = owner,
    )]
    pub lp_state: Account<'info, LpState>,

    pub owner: Signer<'info>,
}

pub fn handler(
    ctx: Context<RecordLiquidityDeposit>,
    deposit_amount: u64,
    deposit_timestamp: i64,
) -> Result<()> {
    let lp_state = &mut ctx.accounts.lp_state;

    lp_state.total_deposit = lp_state
        .total_deposit
        .checked_add(deposit_amount)
        .ok_or(LvtError::MathOverflow)?;
    lp_state.last_deposit = deposit_timestamp;

    msg!(
        "LVT: deposit {} recorded for {}, total {}",
        deposit_amount,
        lp_state.owner,
        lp_state.total_deposit
    );

    Ok(())
}
