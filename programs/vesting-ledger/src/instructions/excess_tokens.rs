use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{LEDGER_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::VestingLedger;

pub fn excess_tokens(ctx: Context<ExcessTokens>) -> Result<u64> {
    let ledger = &ctx.accounts.ledger;
    let balance = ctx.accounts.vault.amount;
    let excess = ledger.excess(balance);

    emit!(ExcessQuote {
        balance,
        committed: ledger.committed,
        excess,
    });

    Ok(excess)
}

#[derive(Accounts)]
pub struct ExcessTokens<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.owner.as_ref(), ledger.mint.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, VestingLedger>,

    #[account(
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump,
        constraint = vault.mint == ledger.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,
}

#[event]
pub struct ExcessQuote {
    pub balance: u64,
    pub committed: u64,
    pub excess: u64,
}
