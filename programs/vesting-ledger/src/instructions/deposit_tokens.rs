use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{LEDGER_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::VestingLedger;

/// Moves funder tokens into the vault. A plain SPL transfer to the vault
/// funds the ledger just as well; this path also emits the audit event.
pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidInput);

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.funder.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;

    emit!(TokensDeposited {
        funder: ctx.accounts.funder.key(),
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositTokens<'info> {
    #[account(
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

    #[account(
        mut,
        constraint = funder_token_account.mint == ledger.mint @ VestingError::InvalidTokenMint,
        constraint = funder_token_account.owner == funder.key() @ VestingError::InvalidTokenAccount,
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensDeposited {
    pub funder: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
