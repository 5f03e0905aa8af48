use anchor_lang::prelude::*;

use crate::errors::LvtError;
use crate::state::{GovernanceVote, State};

/// Fee rates a vote may set, basis points, inclusive.
const MIN_FEE_RATE_BPS: u64 = 500;
const MAX_FEE_RATE_BPS: u64 = 5000;

#[derive(Accounts)]
pub struct UpdateFeeByVote<'info> {
    #[account(mut)]
    pub state: Account<'info, State>,

    #[account(mut)]
    pub governance: Account<'info, GovernanceVote>,

    pub admin: Signer<'info>,
}

pub fn handler(ctx: Context<UpdateFeeByVote>, new_fee_rate: u64) -> Result<()> {
    let governance = &mut ctx.accounts.governance;

    require!(
        governance.vote_count >= governance.required_votes,
        LvtError::InsufficientVotes
    );
    require!(
        (MIN_FEE_RATE_BPS..=MAX_FEE_RATE_BPS).contains(&new_fee_rate),
        LvtError::InvalidFeeRate
    );

    let state = &mut ctx.accounts.state;
    state.fee_rate = new_fee_rate;
    state.last_fee_update = Clock::get()?.unix_timestamp;

    // The tally is consumed by a successful update.
    governance.vote_count = 0;

    msg!("LVT: fee set to {} bps by governance vote", new_fee_rate);

    Ok(())
}
