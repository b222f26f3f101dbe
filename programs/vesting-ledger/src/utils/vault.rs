use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

use crate::constants::LEDGER_SEED;
use crate::state::VestingLedger;

/// CPI transfer out of the vault, signed by the ledger PDA.
pub fn transfer_from_vault<'info>(
    token_program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    destination: AccountInfo<'info>,
    ledger: &Account<'info, VestingLedger>,
    amount: u64,
) -> Result<()> {
    let bump = [ledger.bump];
    let seeds: &[&[u8]] = &[
        LEDGER_SEED,
        ledger.owner.as_ref(),
        ledger.mint.as_ref(),
        &bump,
    ];
    let signer_seeds: &[&[&[u8]]] = &[seeds];

    token::transfer(
        CpiContext::new_with_signer(
            token_program,
            Transfer {
                from: vault,
                to: destination,
                authority: ledger.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )
}
