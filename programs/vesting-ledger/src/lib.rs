use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, CreateAccount};
use anchor_spl::token::{self, TokenAccount};

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use constants::{
    ACCOUNTS_PER_BATCH_ITEM, ACCOUNTS_PER_GRANT, MAX_BATCH_CREATE, MAX_BATCH_RELEASE, VESTING_SEED,
};
use error::VestingError;
use instructions::*;
use state::{GrantInput, VestingEntry};
use utils::batch::ensure_batch_shape;

declare_id!("5nUQHa9YpR3WM6pQ1m5X8s2tqCDhr1NpQH6kKqXBV3mL");

#[program]
pub mod vesting_ledger {
    use super::*;

    pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
        instructions::initialize_ledger::initialize_ledger(ctx)
    }

    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    pub fn create_vesting(
        ctx: Context<CreateVesting>,
        beneficiary: Pubkey,
        unlock_time: i64,
        amount: u64,
    ) -> Result<u64> {
        instructions::create_vesting::create_vesting(ctx, beneficiary, unlock_time, amount)
    }

    /// Owner-only bulk scheduling; returns the assigned ids. Either every
    /// grant gets an entry or the transaction fails.
    pub fn create_vestings<'info>(
        ctx: Context<'_, '_, 'info, 'info, CreateVestings<'info>>,
        grants: Vec<GrantInput>,
    ) -> Result<Vec<u64>> {
        ensure_batch_shape(
            grants.len(),
            MAX_BATCH_CREATE,
            ctx.remaining_accounts.len(),
            ACCOUNTS_PER_GRANT,
        )?;

        let ledger_key = ctx.accounts.ledger.key();
        let program_id = *ctx.program_id;
        let entries = ctx.accounts.ledger.schedule_all(ledger_key, &grants, |id| {
            let (_, bump) = Pubkey::find_program_address(
                &[VESTING_SEED, ledger_key.as_ref(), &id.to_le_bytes()],
                &program_id,
            );
            bump
        })?;

        let lamports = Rent::get()?.minimum_balance(VestingEntry::SPACE);
        let mut ids = Vec::with_capacity(entries.len());

        for (entry, entry_info) in entries.iter().zip(ctx.remaining_accounts.iter()) {
            let id_bytes = entry.id.to_le_bytes();
            let bump = [entry.bump];
            let seeds: &[&[u8]] = &[VESTING_SEED, ledger_key.as_ref(), &id_bytes, &bump];
            let address = Pubkey::create_program_address(seeds, &program_id)
                .map_err(|_| VestingError::BatchAccountsMismatch)?;
            require_keys_eq!(*entry_info.key, address, VestingError::BatchAccountsMismatch);

            system_program::create_account(
                CpiContext::new_with_signer(
                    ctx.accounts.system_program.to_account_info(),
                    CreateAccount {
                        from: ctx.accounts.owner.to_account_info(),
                        to: entry_info.clone(),
                    },
                    &[seeds],
                ),
                lamports,
                VestingEntry::SPACE as u64,
                &program_id,
            )?;
            entry.store(entry_info)?;

            emit!(VestingCreated {
                id: entry.id,
                beneficiary: entry.beneficiary,
                unlock_time: entry.unlock_time,
                amount: entry.amount,
            });
            ids.push(entry.id);
        }

        msg!("Scheduled {} vesting entries", ids.len());
        Ok(ids)
    }

    pub fn release(ctx: Context<Release>, id: u64) -> Result<u64> {
        instructions::release::release(ctx, id)
    }

    /// Releases several vested entries in one transaction; any failing id
    /// aborts the whole batch.
    pub fn batch_release<'info>(
        ctx: Context<'_, '_, 'info, 'info, BatchRelease<'info>>,
        ids: Vec<u64>,
    ) -> Result<u64> {
        ensure_batch_shape(
            ids.len(),
            MAX_BATCH_RELEASE,
            ctx.remaining_accounts.len(),
            ACCOUNTS_PER_BATCH_ITEM,
        )?;

        let ledger_key = ctx.accounts.ledger.key();
        let now = Clock::get()?.unix_timestamp;
        let mut total: u64 = 0;

        for (&id, pair) in ids
            .iter()
            .zip(ctx.remaining_accounts.chunks(ACCOUNTS_PER_BATCH_ITEM))
        {
            let entry_info = &pair[0];
            let destination_info = &pair[1];
            require!(
                entry_info.is_writable && destination_info.is_writable,
                VestingError::BatchAccountsMismatch
            );

            ctx.accounts.ledger.ensure_assigned(id)?;
            // Reloaded per item so a repeated id sees the status stored by its first occurrence.
            let mut entry = VestingEntry::load(entry_info, &ledger_key, id)?;

            let balance = ctx.accounts.vault.amount;
            let payout = ctx.accounts.ledger.release(&mut entry, now, balance)?;

            require_keys_eq!(
                *destination_info.owner,
                token::ID,
                VestingError::InvalidTokenAccount
            );
            let destination = {
                let data = destination_info.try_borrow_data()?;
                TokenAccount::try_deserialize(&mut &data[..])?
            };
            require_keys_eq!(
                destination.mint,
                ctx.accounts.ledger.mint,
                VestingError::InvalidTokenMint
            );
            require_keys_eq!(destination.owner, payout.to, VestingError::InvalidTokenAccount);

            entry.store(entry_info)?;
            utils::vault::transfer_from_vault(
                ctx.accounts.token_program.to_account_info(),
                ctx.accounts.vault.to_account_info(),
                destination_info.clone(),
                &ctx.accounts.ledger,
                payout.amount,
            )?;
            ctx.accounts.vault.reload()?;

            emit!(VestingReleased {
                id,
                beneficiary: payout.to,
                amount: payout.amount,
            });

            total = total
                .checked_add(payout.amount)
                .ok_or(VestingError::MathOverflow)?;
        }

        msg!("Batch released {} entries, {} tokens", ids.len(), total);
        emit!(BatchReleased {
            count: ids.len() as u8,
            total_amount: total,
        });

        Ok(total)
    }

    pub fn remove_vesting(ctx: Context<RemoveVesting>, id: u64) -> Result<u64> {
        instructions::remove_vesting::remove_vesting(ctx, id)
    }

    pub fn retrieve_excess_tokens(ctx: Context<RetrieveExcessTokens>, amount: u64) -> Result<()> {
        instructions::retrieve_excess_tokens::retrieve_excess_tokens(ctx, amount)
    }

    pub fn vesting_amount(ctx: Context<VestingAmount>, id: u64) -> Result<u64> {
        instructions::vesting_amount::vesting_amount(ctx, id)
    }

    pub fn excess_tokens(ctx: Context<ExcessTokens>) -> Result<u64> {
        instructions::excess_tokens::excess_tokens(ctx)
    }
}
