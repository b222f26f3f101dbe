use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{LEDGER_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::VestingLedger;

// Remaining accounts: an `(entry, beneficiary token account)` pair per id,
// in the order of `ids`. The handler is in `src/lib.rs`: CPIs into
// `remaining_accounts` need the `'info`-bound `Context` there.

#[derive(Accounts)]
pub struct BatchRelease<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.owner.as_ref(), ledger.mint.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, VestingLedger>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump,
        constraint = vault.mint == ledger.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct BatchReleased {
    pub count: u8,
    pub total_amount: u64,
}
