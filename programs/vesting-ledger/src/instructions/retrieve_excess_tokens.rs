use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{LEDGER_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::VestingLedger;
use crate::utils::vault;

pub fn retrieve_excess_tokens(ctx: Context<RetrieveExcessTokens>, amount: u64) -> Result<()> {
    // Live balance, read at call time.
    let balance = ctx.accounts.vault.amount;
    let payout = ctx.accounts.ledger.retrieve_excess(amount, balance)?;

    vault::transfer_from_vault(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        &ctx.accounts.ledger,
        payout.amount,
    )?;

    emit!(ExcessRetrieved {
        amount: payout.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RetrieveExcessTokens<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.owner.as_ref(), ledger.mint.as_ref()],
        bump = ledger.bump,
        has_one = owner @ VestingError::Unauthorized,
    )]
    pub ledger: Account<'info, VestingLedger>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump,
        constraint = vault.mint == ledger.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = owner_token_account.mint == ledger.mint @ VestingError::InvalidTokenMint,
        constraint = owner_token_account.owner == owner.key() @ VestingError::InvalidTokenAccount,
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct ExcessRetrieved {
    pub amount: u64,
}
