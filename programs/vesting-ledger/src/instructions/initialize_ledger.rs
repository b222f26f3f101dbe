use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{LEDGER_SEED, VAULT_SEED};
use crate::state::VestingLedger;

pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    ledger.set_inner(VestingLedger::new(
        ctx.accounts.owner.key(),
        ctx.accounts.mint.key(),
        ctx.accounts.vault.key(),
        ctx.bumps.ledger,
    ));

    msg!("Vesting ledger {} initialized", ledger.key());
    emit!(LedgerInitialized {
        ledger: ledger.key(),
        owner: ledger.owner,
        mint: ledger.mint,
        vault: ledger.vault,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = owner,
        space = VestingLedger::SPACE,
        seeds = [LEDGER_SEED, owner.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, VestingLedger>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = ledger,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LedgerInitialized {
    pub ledger: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
}
