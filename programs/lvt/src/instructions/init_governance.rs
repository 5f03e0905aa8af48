use anchor_lang::prelude::*;

use crate::state::GovernanceVote;

#[derive(Accounts)]
pub struct InitGovernance<'info> {
    #[account(init, payer = admin, space = GovernanceVote::SIZE)]
    pub governance: Account<'info, GovernanceVote>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitGovernance>, required_votes: u64) -> Result<()> {
    let governance = &mut ctx.accounts.governance;

    governance.vote_count = 0;
    governance.required_votes = required_votes;

    msg!("LVT: governance created, {} votes required", required_votes);

    Ok(())
}
