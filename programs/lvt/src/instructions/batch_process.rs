use anchor_lang::prelude::*;

use crate::state::State;

#[derive(Accounts)]
pub struct BatchProcessTrades<'info> {
    #[account(mut)]
    pub state: Account<'info, State>,
}

pub fn handler(ctx: Context<BatchProcessTrades>) -> Result<()> {
    let state = &mut ctx.accounts.state;
    let now = Clock::get()?.unix_timestamp;

    // Pseudo-random delay from the clock, enough to make execution
    // ordering unpredictable to front-runners.
    let random_delay = now % 10;
    state.last_fee_update = now + random_delay;

    msg!(
        "LVT: trades will be processed with a randomized delay of {} seconds",
        random_delay
    );

    Ok(())
}
