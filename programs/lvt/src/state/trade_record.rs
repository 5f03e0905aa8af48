use anchor_lang::prelude::*;

/// Maximum length in bytes of a trading pair name, e.g. "LVT/USDC".
pub const MAX_TRADE_PAIR_LEN: usize = 32;

/// Detailed log of a single trade, created alongside each
/// `record_trade`. Never mutated afterwards.
#[account]
pub struct TradeRecord {
    pub user: Pubkey,
    pub trade_amount: u64,
    pub trade_timestamp: i64,
    pub trade_pair: String,
    pub execution_delay: i64,
    pub slippage: u64,
    pub liquidity_provided: u64,
}

impl TradeRecord {
    pub const SIZE: usize = 8 +      // discriminator
        32 +                         // user
        8 +                          // trade_amount
        8 +                          // trade_timestamp
        4 + MAX_TRADE_PAIR_LEN +     // trade_pair (len prefix + bytes)
        8 +                          // execution_delay
        8 +                          // slippage
        8;                           // liquidity_provided
}
