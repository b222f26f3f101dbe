use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{LEDGER_SEED, VAULT_SEED, VESTING_SEED};
use crate::error::VestingError;
use crate::state::{VestingEntry, VestingLedger};
use crate::utils::vault;

/// Pays a vested entry to its beneficiary. Callable by anyone; the
/// destination must be a token account the beneficiary owns.
pub fn release(ctx: Context<Release>, id: u64) -> Result<u64> {
    let ledger_key = ctx.accounts.ledger.key();
    ctx.accounts.ledger.ensure_assigned(id)?;

    let entry_info = ctx.accounts.entry.to_account_info();
    let mut entry = VestingEntry::load(&entry_info, &ledger_key, id)?;

    let now = Clock::get()?.unix_timestamp;
    let balance = ctx.accounts.vault.amount;
    let payout = ctx.accounts.ledger.release(&mut entry, now, balance)?;

    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        payout.to,
        VestingError::InvalidTokenAccount
    );

    entry.store(&entry_info)?;
    vault::transfer_from_vault(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.beneficiary_token_account.to_account_info(),
        &ctx.accounts.ledger,
        payout.amount,
    )?;

    emit!(VestingReleased {
        id,
        beneficiary: payout.to,
        amount: payout.amount,
    });

    Ok(payout.amount)
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct Release<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.owner.as_ref(), ledger.mint.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, VestingLedger>,

    #[account(
        mut,
        seeds = [VESTING_SEED, ledger.key().as_ref(), &id.to_le_bytes()],
        bump
    )]
    /// CHECK: Loaded in-handler once the id is known to be assigned.
    pub entry: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump,
        constraint = vault.mint == ledger.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = beneficiary_token_account.mint == ledger.mint @ VestingError::InvalidTokenMint,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestingReleased {
    pub id: u64,
    pub beneficiary: Pubkey,
    pub amount: u64,
}
