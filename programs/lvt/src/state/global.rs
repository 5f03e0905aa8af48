use anchor_lang::prelude::*;

/// Global protocol state: aggregate counters, the current fee rate,
/// the treasury address, and the rolling reward window.
/// One per deployment, created by `initialize`.
#[account]
pub struct State {
    /// Total number of trades recorded
    pub total_trades: u64,
    /// Cumulative liquidity across all recorded trades
    pub total_liquidity: u64,
    /// Current protocol fee in basis points
    pub fee_rate: u64,
    /// When the fee rate was last changed
    pub last_fee_update: i64,
    /// Token account receiving protocol fees
    pub treasury: Pubkey,
    /// Rolling window: sum of rewards since the last multiplier refresh
    pub reward_sum: u64,
    /// Rolling window: number of rewards since the last refresh
    pub reward_count: u64,
    /// Multiplier applied to per-user rewards, refreshed per window
    pub global_reward_multiplier: u64,
}

impl State {
    pub const SIZE: usize = 8 + // discriminator
        8 +                     // total_trades
        8 +                     // total_liquidity
        8 +                     // fee_rate
        8 +                     // last_fee_update
        32 +                    // treasury
        8 +                     // reward_sum
        8 +                     // reward_count
        8;                      // global_reward_multiplier
    // Total: 96 bytes
}
