use anchor_lang::prelude::*;

/// Per-trader leaderboard entry for volume and frequency.
/// PDA seeds `["leaderboard", user]`.
#[account]
pub struct TraderLeaderboard {
    pub user: Pubkey,
    pub trade_volume: u64,
    pub trade_count: u64,
    pub last_update: i64,
    pub bump: u8,
}

impl TraderLeaderboard {
    pub const SIZE: usize = 8 + // discriminator
        32 +                    // user
        8 +                     // trade_volume
        8 +                     // trade_count
        8 +                     // last_update
        1;                      // bump
}
