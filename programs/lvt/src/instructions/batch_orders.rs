use anchor_lang::prelude::*;

use crate::errors::LvtError;
use crate::state::State;

#[derive(Accounts)]
pub struct BatchTradingOrders<'info> {
    #[account(mut)]
    pub state: Account<'info, State>,
}

pub fn handler(_ctx: Context<BatchTradingOrders>, delay: i64) -> Result<()> {
    require!(delay > 0, LvtError::InvalidDelay);

    msg!(
        "LVT: batched orders will execute after a delay of {} seconds",
        delay
    );

    Ok(())
}
