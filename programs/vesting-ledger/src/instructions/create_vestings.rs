use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::error::VestingError;
use crate::state::VestingLedger;

// Bulk scheduling of a pre-existing grant list ("day zero" schedule).
// Remaining accounts: one uninitialized entry PDA per grant, in id order.
// The handler is in `src/lib.rs` next to `batch_release`, for the same
// remaining-accounts lifetime reason.

#[derive(Accounts)]
pub struct CreateVestings<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.owner.as_ref(), ledger.mint.as_ref()],
        bump = ledger.bump,
        has_one = owner @ VestingError::Unauthorized,
    )]
    pub ledger: Account<'info, VestingLedger>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}
