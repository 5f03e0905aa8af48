use anchor_lang::prelude::*;

#[error_code]
pub enum LvtError {
    #[msg("Invalid fee rate provided")]
    InvalidFeeRate,
    #[msg("Insufficient votes for governance action")]
    InsufficientVotes,
    #[msg("Invalid delay for batching orders")]
    InvalidDelay,
    #[msg("Insufficient liquidity contribution to claim rewards")]
    InsufficientLiquidityForRewards,
    #[msg("Wash trading detected: trade between same wallet accounts is not allowed")]
    WashTradingAttempt,
    #[msg("Minimum holding period has not been met")]
    MinimumHoldingPeriodNotMet,
    #[msg("Insufficient collateral for borrowing")]
    InsufficientCollateral,
    #[msg("Trading pair name exceeds 32 bytes")]
    TradePairTooLong,
    #[msg("Math overflow")]
    MathOverflow,
}
