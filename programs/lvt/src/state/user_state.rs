use anchor_lang::prelude::*;

/// Per-user trading, staking and reward stats. One per wallet,
/// PDA seeds `["user", owner]`.
#[account]
pub struct UserState {
    /// The wallet these stats belong to
    pub owner: Pubkey,
    /// LVT currently staked
    pub staked_amount: u64,
    /// Rewards accrued and not yet claimed
    pub accrued_rewards: u64,
    /// Snapshot of the global reward multiplier at last trade
    pub reward_multiplier: u64,
    /// Number of trades recorded by this user
    pub trade_count: u64,
    /// Cumulative trade volume
    pub cumulative_volume: u64,
    /// Fee discount percentage from the staking tier
    pub fee_discount: u64,
    /// Timestamp when the staking lockup expires; 0 if none
    pub lockup_end: i64,
    /// Whitelist flag for institutional traders
    pub is_institutional: bool,
    /// Timestamp of the last reward claim, for the cooldown
    pub last_claim_time: i64,
    /// Trading rebate percentage from the staking tier
    pub trading_rebate: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl UserState {
    pub const SIZE: usize = 8 + // discriminator
        32 +                    // owner
        8 +                     // staked_amount
        8 +                     // accrued_rewards
        8 +                     // reward_multiplier
        8 +                     // trade_count
        8 +                     // cumulative_volume
        8 +                     // fee_discount
        8 +                     // lockup_end
        1 +                     // is_institutional
        8 +                     // last_claim_time
        8 +                     // trading_rebate
        1;                      // bump
    // Total: 114 bytes
}
