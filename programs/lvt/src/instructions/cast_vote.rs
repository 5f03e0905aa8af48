use anchor_lang::prelude::*;

use crate::errors::LvtError;
use crate::state::GovernanceVote;

#[derive(Accounts)]
pub struct CastVote<'info> {
    #[account(mut)]
    pub governance: Account<'info, GovernanceVote>,

    pub voter: Signer<'info>,
}

pub fn handler(ctx: Context<CastVote>) -> Result<()> {
    let governance = &mut ctx.accounts.governance;

    governance.vote_count = governance
        .vote_count
        .checked_add(1)
        .ok_or(LvtError::MathOverflow)?;

    msg!(
        "LVT: vote cast by {}, tally {}/{}",
        ctx.accounts.voter.key(),
        governance.vote_count,
        governance.required_votes
    );

    Ok(())
}
