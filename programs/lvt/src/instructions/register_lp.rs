use anchor_lang::prelude::*;

use crate::state::LpState;

#[derive(Accounts)]
pub struct RegisterLiquidityProvider<'info> {
    #[account(
        init,
        payer = owner,
        space = LpState::SIZE,
        seeds = [b"lp", owner.key().as_ref()],
        bump,
    )]
    pub lp_state: Account<'info, LpState>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RegisterLiquidityProvider>) -> Result<()> {
    let lp_state = &mut ctx.accounts.lp_state;

    lp_state.owner = ctx.accounts.owner.key();
    lp_state.total_deposit = 0;
    lp_state.last_deposit = 0;
    lp_state.bump = ctx.bumps.lp_state;

    msg!("LVT: liquidity provider registered {}", lp_state.owner);

    Ok(())
}
