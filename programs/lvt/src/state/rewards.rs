/// Reward and fee-tier math, kept pure so the formulas can be tested
/// off-chain without an account context.

/// Number of rewards accumulated before the global multiplier refreshes.
pub const REWARD_WINDOW_SIZE: u64 = 50;

/// Execution faster than this (ms) earns the execution bonus.
pub const FAST_EXECUTION_DELAY: i64 = 100;
/// Slippage below this (basis points) earns the low-slippage bonus.
pub const LOW_SLIPPAGE_BPS: u64 = 50;
/// Slippage above this (basis points) halves the reward.
pub const SLIPPAGE_PENALTY_BPS: u64 = 300;
/// Liquidity provided above this earns the liquidity bonus.
pub const DEEP_LIQUIDITY_THRESHOLD: u64 = 1000;

const BONUS_FACTOR: u64 = 10;

/// Reward for a single trade: the trade amount scaled by execution,
/// slippage and liquidity bonuses, halved on excessive slippage.
/// Returns `None` on overflow.
pub fn trade_reward(
    trade_amount: u64,
    execution_delay: i64,
    slippage: u64,
    liquidity_provided: u64,
) -> Option<u64> {
    let execution_bonus = if execution_delay < FAST_EXECUTION_DELAY {
        BONUS_FACTOR
    } else {
        1
    };
    let slippage_bonus = if slippage < LOW_SLIPPAGE_BPS {
        BONUS_FACTOR
    } else {
        1
    };
    let liquidity_bonus = if liquidity_provided > DEEP_LIQUIDITY_THRESHOLD {
        BONUS_FACTOR
    } else {
        1
    };

    let mut reward = trade_amount
        .checked_mul(execution_bonus)?
        .checked_mul(slippage_bonus)?
        .checked_mul(liquidity_bonus)?;

    if slippage > SLIPPAGE_PENALTY_BPS {
        reward /= 2;
    }

    Some(reward)
}

/// Staking tier table: returns (fee discount %, trading rebate %).
pub fn stake_tier(staked_amount: u64) -> (u64, u64) {
    if staked_amount >= 50_000 {
        (30, 10) // Pro
    } else if staked_amount >= 5_000 {
        (20, 5) // Advanced
    } else if staked_amount >= 500 {
        (10, 0) // Basic
    } else {
        (0, 0)
    }
}

/// Global multiplier from a completed reward window, boosted by market
/// conditions: +10% under high volatility, +5% under a wide order book
/// gap. Returns `None` on overflow.
pub fn market_adjusted_multiplier(
    window_average: u64,
    market_volatility: u64,
    order_book_gap: u64,
) -> Option<u64> {
    let volatility_bonus: u64 = if market_volatility > 1000 { 110 } else { 100 };
    let gap_bonus: u64 = if order_book_gap > 500 { 105 } else { 100 };

    window_average
        .checked_mul(volatility_bonus)?
        .checked_mul(gap_bonus)?
        .checked_div(100 * 100)
}
