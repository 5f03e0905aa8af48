use anchor_lang::prelude::*;

use crate::state::UserState;

#[derive(Accounts)]
pub struct RegisterUser<'info> {
    #[account(
        init,
        payer = owner,
        space = UserState::SIZE,
        seeds = [b"user", owner.key().as_ref()],
        bump,
    )]
    pub user_state: Account<'info, UserState>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RegisterUser>) -> Result<()> {
    let user_state = &mut ctx.accounts.user_state;

    user_state.owner = ctx.accounts.owner.key();
    user_state.staked_amount = 0;
    user_state.accrued_rewards = 0;
    user_state.reward_multiplier = 1;
    user_state.trade_count = 0;
    user_state.cumulative_volume = 0;
    user_state.fee_discount = 0;
    user_state.lockup_end = 0;
    user_state.is_institutional = false;
    user_state.last_claim_time = 0;
    user_state.trading_rebate = 0;
    user_state.bump = ctx.bumps.user_state;

    msg!("LVT: user registered {}", user_state.owner);

    Ok(())
}
