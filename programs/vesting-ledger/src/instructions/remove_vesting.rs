use anchor_lang::prelude::*;

use crate::constants::{LEDGER_SEED, VESTING_SEED};
use crate::error::VestingError;
use crate::state::{VestingEntry, VestingLedger};

/// Cancels a Pending entry. Tokens stay in the vault as excess until the
/// owner calls `retrieve_excess_tokens`.
pub fn remove_vesting(ctx: Context<RemoveVesting>, id: u64) -> Result<u64> {
    let ledger_key = ctx.accounts.ledger.key();
    ctx.accounts.ledger.ensure_assigned(id)?;

    let entry_info = ctx.accounts.entry.to_account_info();
    let mut entry = VestingEntry::load(&entry_info, &ledger_key, id)?;
    let freed_amount = ctx.accounts.ledger.remove(&mut entry)?;
    entry.store(&entry_info)?;

    emit!(VestingRemoved { id, freed_amount });

    Ok(freed_amount)
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct RemoveVesting<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.owner.as_ref(), ledger.mint.as_ref()],
        bump = ledger.bump,
        has_one = owner @ VestingError::Unauthorized,
    )]
    pub ledger: Account<'info, VestingLedger>,

    #[account(
        mut,
        seeds = [VESTING_SEED, ledger.key().as_ref(), &id.to_le_bytes()],
        bump
    )]
    /// CHECK: Loaded in-handler once the id is known to be assigned.
    pub entry: UncheckedAccount<'info>,

    pub owner: Signer<'info>,
}

#[event]
pub struct VestingRemoved {
    pub id: u64,
    pub freed_amount: u64,
}
