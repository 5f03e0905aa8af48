use anchor_lang::prelude::*;

pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("7npskT7QVWC6kddvwxfSdVHUZxihPYQmq1qYu3HnNZba");

#[program]
pub mod liquidity_velocity_token {
    use super::*;

    /// Initialize global state, fee parameters, treasury, and dynamic
    /// reward tracking.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Create the per-user stats account for the signer.
    pub fn register_user(ctx: Context<RegisterUser>) -> Result<()> {
        instructions::register_user::handler(ctx)
    }

    /// Create the liquidity-provider tracking account for the signer.
    pub fn register_liquidity_provider(ctx: Context<RegisterLiquidityProvider>) -> Result<()> {
        instructions::register_lp::handler(ctx)
    }

    /// Record a trade: update global and per-user stats, log a
    /// TradeRecord, and accrue the dynamic reward.
    pub fn record_trade(
        ctx: Context<RecordTrade>,
        trade_amount: u64,
        trade_timestamp: i64,
        trade_pair: String,
        execution_delay: i64,
        slippage: u64,
        liquidity_provided: u64,
        counterparty: Pubkey,
    ) -> Result<()> {
        instructions::record_trade::handler(
            ctx,
            trade_amount,
            trade_timestamp,
            trade_pair,
            execution_delay,
            slippage,
            liquidity_provided,
            counterparty,
        )
    }

    /// Record a liquidity deposit for LP tracking.
    pub fn record_liquidity_deposit(
        ctx: Context<RecordLiquidityDeposit>,
        deposit_amount: u64,
        deposit_timestamp: i64,
    ) -> Result<()> {
        instructions::record_liquidity_deposit::handler(ctx, deposit_amount, deposit_timestamp)
    }

    /// Stake tokens with an optional lockup for tiered fee discounts
    /// and trading rebates.
    pub fn stake_with_lockup(
        ctx: Context<StakeTokens>,
        amount: u64,
        lockup_duration: i64,
    ) -> Result<()> {
        instructions::stake_with_lockup::handler(ctx, amount, lockup_duration)
    }

    /// Claim accrued rewards, subject to minimum volume and cooldown.
    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::claim_rewards::handler(ctx)
    }

    /// Adjust pool fees based on current liquidity (admin only).
    pub fn adjust_fee_dynamically(ctx: Context<UpdatePoolFees>) -> Result<()> {
        instructions::adjust_fee::handler(ctx)
    }

    /// Auto-adjust the fee rate from observed market volatility.
    pub fn auto_adjust_fee(ctx: Context<AutoAdjustFee>, current_volatility: u64) -> Result<()> {
        instructions::auto_adjust_fee::handler(ctx, current_volatility)
    }

    /// Create the governance vote account with a vote threshold.
    pub fn init_governance(ctx: Context<InitGovernance>, required_votes: u64) -> Result<()> {
        instructions::init_governance::handler(ctx, required_votes)
    }

    /// Register one vote toward the next fee-structure update.
    pub fn cast_vote(ctx: Context<CastVote>) -> Result<()> {
        instructions::cast_vote::handler(ctx)
    }

    /// Governance-gated fee structure update.
    pub fn update_fee_structure_by_vote(
        ctx: Context<UpdateFeeByVote>,
        new_fee_rate: u64,
    ) -> Result<()> {
        instructions::update_fee_by_vote::handler(ctx, new_fee_rate)
    }

    /// Feed the rolling reward window and refresh the global multiplier
    /// from market conditions.
    pub fn update_dynamic_reward(
        ctx: Context<UpdateDynamicReward>,
        recent_reward: u64,
        market_volatility: u64,
        order_book_gap: u64,
    ) -> Result<()> {
        instructions::update_dynamic_reward::handler(
            ctx,
            recent_reward,
            market_volatility,
            order_book_gap,
        )
    }

    /// Update the per-trader volume/frequency leaderboard.
    pub fn update_leaderboard(
        ctx: Context<UpdateLeaderboard>,
        trade_volume: u64,
        trade_count: u64,
    ) -> Result<()> {
        instructions::update_leaderboard::handler(ctx, trade_volume, trade_count)
    }

    /// Reward boosts for specific trading strategies:
    /// 1 = market-making, 2 = arbitrage, 3 = options hedging.
    pub fn reward_strategy_boost(
        ctx: Context<RewardStrategyBoost>,
        strategy_type: u8,
    ) -> Result<()> {
        instructions::reward_strategy_boost::handler(ctx, strategy_type)
    }

    /// Batch trading orders behind a delay to blunt MEV extraction.
    pub fn batch_trading_orders_with_delay(
        ctx: Context<BatchTradingOrders>,
        delay: i64,
    ) -> Result<()> {
        instructions::batch_orders::handler(ctx, delay)
    }

    /// Process queued trades behind a randomized delay.
    pub fn batch_process_trades(ctx: Context<BatchProcessTrades>) -> Result<()> {
        instructions::batch_process::handler(ctx)
    }

    /// Borrow against staked LVT collateral.
    pub fn borrow_against_lvt(ctx: Context<BorrowAgainstLvt>, borrow_amount: u64) -> Result<()> {
        instructions::borrow::handler(ctx, borrow_amount)
    }
}
