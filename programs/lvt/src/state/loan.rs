use anchor_lang::prelude::*;

/// A loan taken out against staked LVT collateral.
#[account]
pub struct LoanAccount {
    pub borrower: Pubkey,
    /// Staked amount backing the loan at origination
    pub collateral: u64,
    pub borrow_amount: u64,
    /// Fixed interest rate, percent
    pub interest_rate: u64,
    pub start_time: i64,
    pub due_time: i64,
    pub bump: u8,
}

impl LoanAccount {
    pub const SIZE: usize = 8 + // discriminator
        32 +                    // borrower
        8 +                     // collateral
        8 +                     // borrow_amount
        8 +                     // interest_rate
        8 +                     // start_time
        8 +                     // due_time
        1;                      // bump
}
