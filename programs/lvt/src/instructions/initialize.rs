use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::state::State;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(init, payer = admin, space = State::SIZE)]
    pub state: Account<'info, State>,

    /// Treasury token account for LVT fees.
    #[account(mut)]
    pub treasury: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(mut)]
    pub lvt_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let state = &mut ctx.accounts.state;
    let clock = Clock::get()?;

    state.total_trades = 0;
    state.total_liquidity = 0;
    state.fee_rate = 1000; // Initial fee rate, basis points
    state.last_fee_update = clock.unix_timestamp;
    state.treasury = ctx.accounts.treasury.key();
    state.reward_sum = 0;
    state.reward_count = 0;
    state.global_reward_multiplier = 1;

    msg!(
        "LVT: state initialized, treasury {}, fee rate {} bps",
        state.treasury,
        state.fee_rate
    );

    Ok(())
}
