use anchor_lang::prelude::*;

use crate::constants::{LEDGER_SEED, VESTING_SEED};
use crate::state::{EntryStatus, VestingEntry, VestingLedger};

/// Read-only: the fixed amount of an entry in any state.
pub fn vesting_amount(ctx: Context<VestingAmount>, id: u64) -> Result<u64> {
    let ledger_key = ctx.accounts.ledger.key();
    ctx.accounts.ledger.ensure_assigned(id)?;
    let entry = VestingEntry::load(&ctx.accounts.entry.to_account_info(), &ledger_key, id)?;

    emit!(VestingQuote {
        id,
        beneficiary: entry.beneficiary,
        unlock_time: entry.unlock_time,
        amount: entry.amount,
        status: entry.status,
    });

    Ok(entry.amount)
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct VestingAmount<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.owner.as_ref(), ledger.mint.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, VestingLedger>,

    #[account(
        seeds = [VESTING_SEED, ledger.key().as_ref(), &id.to_le_bytes()],
        bump
    )]
    /// CHECK: Loaded in-handler once the id is known to be assigned.
    pub entry: UncheckedAccount<'info>,
}

#[event]
pub struct VestingQuote {
    pub id: u64,
    pub beneficiary: Pubkey,
    pub unlock_time: i64,
    pub amount: u64,
    pub status: EntryStatus,
}
