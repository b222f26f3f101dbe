use anchor_lang::prelude::*;

use crate::constants::{LEDGER_SEED, VESTING_SEED};
use crate::error::VestingError;
use crate::state::{VestingEntry, VestingLedger};

pub fn create_vesting(
    ctx: Context<CreateVesting>,
    beneficiary: Pubkey,
    unlock_time: i64,
    amount: u64,
) -> Result<u64> {
    let ledger_key = ctx.accounts.ledger.key();
    let entry = ctx.accounts.ledger.schedule(
        ledger_key,
        beneficiary,
        unlock_time,
        amount,
        ctx.bumps.entry,
    )?;
    let id = entry.id;
    ctx.accounts.entry.set_inner(entry);

    emit!(VestingCreated {
        id,
        beneficiary,
        unlock_time,
        amount,
    });

    Ok(id)
}

#[derive(Accounts)]
pub struct CreateVesting<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.owner.as_ref(), ledger.mint.as_ref()],
        bump = ledger.bump,
        has_one = owner @ VestingError::Unauthorized,
    )]
    pub ledger: Account<'info, VestingLedger>,

    #[account(
        init,
        payer = owner,
        space = VestingEntry::SPACE,
        seeds = [VESTING_SEED, ledger.key().as_ref(), &ledger.next_id.to_le_bytes()],
        bump
    )]
    pub entry: Account<'info, VestingEntry>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct VestingCreated {
    pub id: u64,
    pub beneficiary: Pubkey,
    pub unlock_time: i64,
    pub amount: u64,
}
