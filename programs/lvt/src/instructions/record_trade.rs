use anchor_lang::prelude::*;

use crate::errors::LvtError;
use crate::state::rewards::{trade_reward, REWARD_WINDOW_SIZE};
use crate::state::{State, TradeRecord, UserState, MAX_TRADE_PAIR_LEN};

#[derive(Accounts)]
pub struct RecordTrade<'info> {
    #[account(mut)]
    pub state: Account<'info, State>,

    #[account(
        mut,
        seeds = [b"user", user_state.owner.as_ref()],
        bump = user_state.bump,
    )]
    pub user_state: Account<'info, UserState>,

    /// Detailed log entry for this trade.
    #[account(init, payer = payer, space = TradeRecord::SIZE)]
    pub trade_record: Account<'info, TradeRecord>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[allow(clippy::too_many_arguments)]
pub fn handler(
    ctx: Context<RecordTrade>,
    trade_amount: u64,
    trade_timestamp: i64,
    trade_pair: String,
    execution_delay: i64,
    slippage: u64,
    liquidity_provided: u64,
    counterparty: Pubkey,
) -> Result<()> {
    let state = &mut ctx.accounts.state;
    let user_state = &mut ctx.accounts.user_state;

    // Self-trades against the same wallet are wash trading.
    require!(
        user_state.owner != counterparty,
        LvtError::WashTradingAttempt
    );
    require!(
        trade_pair.len() <= MAX_TRADE_PAIR_LEN,
        LvtError::TradePairTooLong
    );

    state.total_trades = state
        .total_trades
        .checked_add(1)
        .ok_or(LvtError::MathOverflow)?;
    state.total_liquidity = state
        .total_liquidity
        .checked_add(trade_amount)
        .ok_or(LvtError::MathOverflow)?;

    user_state.trade_count = user_state
        .trade_count
        .checked_add(1)
        .ok_or(LvtError::MathOverflow)?;
    user_state.cumulative_volume = user_state
        .cumulative_volume
        .checked_add(trade_amount)
        .ok_or(LvtError::MathOverflow)?;

    let trade_record = &mut ctx.accounts.trade_record;
    trade_record.user = user_state.owner;
    trade_record.trade_amount = trade_amount;
    trade_record.trade_timestamp = trade_timestamp;
    trade_record.trade_pair = trade_pair;
    trade_record.execution_delay = execution_delay;
    trade_record.slippage = slippage;
    trade_record.liquidity_provided = liquidity_provided;

    let reward = trade_reward(trade_amount, execution_delay, slippage, liquidity_provided)
        .ok_or(LvtError::MathOverflow)?;

    user_state.accrued_rewards = user_state
        .accrued_rewards
        .checked_add(reward)
        .ok_or(LvtError::MathOverflow)?;

    // Feed the rolling window; refresh the global multiplier once the
    // window is full.
    state.reward_sum = state
        .reward_sum
        .checked_add(reward)
        .ok_or(LvtError::MathOverflow)?;
    state.reward_count = state
        .reward_count
        .checked_add(1)
        .ok_or(LvtError::MathOverflow)?;
    if state.reward_count >= REWARD_WINDOW_SIZE {
        state.global_reward_multiplier = state.reward_sum / state.reward_count;
        state.reward_sum = 0;
        state.reward_count = 0;
    }
    user_state.reward_multiplier = state.global_reward_multiplier;

    msg!(
        "LVT: trade {} recorded for {}, reward {}",
        state.total_trades,
        user_state.owner,
        reward
    );

    Ok(())
}
