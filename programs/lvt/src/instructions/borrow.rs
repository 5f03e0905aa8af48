use anchor_lang::prelude::*;

use crate::errors::LvtError;
use crate::state::{LoanAccount, UserState};

/// Required collateral as a percentage of the borrowed amount.
const COLLATERAL_RATIO_PCT: u64 = 150;
/// Fixed loan interest rate, percent.
const LOAN_INTEREST_RATE_PCT: u64 = 5;
/// Loan term, seconds (30 days).
const LOAN_TERM_SECONDS: i64 = 30 * 86_400;

#[derive(Accounts)]
pub struct BorrowAgainstLvt<'info> {
    #[account(
        mut,
        seeds = [b"user", owner.key().as_ref()],
        bump = user_state.bump,
        has_one = owner,
    )]
    pub user_state: Account<'info, UserState>,

    #[account(init, payer = owner, space = LoanAccount::SIZE)]
    pub loan_account: Account<'info, LoanAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<BorrowAgainstLvt>, borrow_amount: u64) -> Result<()> {
    let user_state = &ctx.accounts.user_state;

    let required_collateral = borrow_amount
        .checked_mul(COLLATERAL_RATIO_PCT)
        .ok_or(LvtError::MathOverflow)?
        / 100;
    require!(
        user_state.staked_amount >= required_collateral,
        LvtError::InsufficientCollateral
    );

    let now = Clock::get()?.unix_timestamp;
    let loan = &mut ctx.accounts.loan_account;
    loan.borrower = user_state.owner;
    loan.collateral = user_state.staked_amount;
    loan.borrow_amount = borrow_amount;
    loan.interest_rate = LOAN_INTEREST_RATE_PCT;
    loan.start_time = now;
    loan.due_time = now
        .checked_add(LOAN_TERM_SECONDS)
        .ok_or(LvtError::MathOverflow)?;

    msg!(
        "LVT: {} borrowed {} against {} staked",
        loan.borrower,
        borrow_amount,
        loan.collateral
    );

    Ok(())
}
