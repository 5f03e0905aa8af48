use anchor_lang::prelude::*;

/// Liquidity-provider deposit tracking. One per wallet,
/// PDA seeds `["lp", owner]`.
#[account]
pub struct LpState {
    pub owner: Pubkey,
    pub total_deposit: u64,
    pub last_deposit: i64,
    pub bump: u8,
}

impl LpState {
    pub const SIZE: usize = 8 + // discriminator
        32 +                    // owner
        8 +                     // total_deposit
        8 +                     // last_deposit
        1;                      // bump
}
