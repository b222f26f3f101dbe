use anchor_lang::prelude::*;

use crate::constants::FIRST_VESTING_ID;
use crate::error::VestingError;
use crate::state::{EntryStatus, GrantInput, VestingEntry};
use crate::utils::accounting;

/// Custody ledger PDA, keyed by `[LEDGER_SEED, owner, mint]`.
#[account]
#[derive(InitSpace)]
pub struct VestingLedger {
    /// Privileged principal for create/remove/retrieve.
    pub owner: Pubkey,
    /// The one mint held in custody.
    pub mint: Pubkey,
    /// Vault token account (authority = this ledger PDA).
    pub vault: Pubkey,
    /// Next id to assign; ids 1..next_id are all assigned.
    pub next_id: u64,
    /// Sum of amounts over Pending entries.
    pub committed: u64,
    /// Cumulative amount paid to beneficiaries.
    pub released_total: u64,
    /// Cumulative amount freed by removals.
    pub removed_total: u64,
    pub bump: u8,
}

/// A transfer out of the vault decided by the ledger, executed by the handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub to: Pubkey,
    pub amount: u64,
}

/// Released and Removed entries are both reported as `AlreadyReleased`;
/// the actual terminal state goes to the program log.
pub fn terminal_error(status: EntryStatus) -> VestingError {
    msg!("Vesting entry is no longer pending: {:?}", status);
    VestingError::AlreadyReleased
}

impl VestingLedger {
    pub const SPACE: usize = 8 + VestingLedger::INIT_SPACE;

    pub fn new(owner: Pubkey, mint: Pubkey, vault: Pubkey, bump: u8) -> Self {
        Self {
            owner,
            mint,
            vault,
            next_id: FIRST_VESTING_ID,
            committed: 0,
            released_total: 0,
            removed_total: 0,
            bump,
        }
    }

    pub fn is_assigned(&self, id: u64) -> bool {
        id >= FIRST_VESTING_ID && id < self.next_id
    }

    pub fn ensure_assigned(&self, id: u64) -> core::result::Result<(), VestingError> {
        if self.is_assigned(id) {
            Ok(())
        } else {
            Err(VestingError::InvalidId)
        }
    }

    /// Allocates the next id and builds its Pending entry.
    /// Funding is not checked here; it is checked at release.
    pub fn schedule(
        &mut self,
        ledger_key: Pubkey,
        beneficiary: Pubkey,
        unlock_time: i64,
        amount: u64,
        bump: u8,
    ) -> core::result::Result<VestingEntry, VestingError> {
        if beneficiary == Pubkey::default() || amount == 0 {
            return Err(VestingError::InvalidInput);
        }
        let id = self.next_id;
        let next_id = id.checked_add(1).ok_or(VestingError::MathOverflow)?;
        let committed = accounting::commit(self.committed, amount)?;

        self.next_id = next_id;
        self.committed = committed;

        Ok(VestingEntry {
            ledger: ledger_key,
            id,
            beneficiary,
            unlock_time,
            amount,
            status: EntryStatus::Pending,
            bump,
        })
    }

    /// Schedules every grant in order, or none of them. `bump_for` supplies
    /// the PDA bump of each newly assigned id.
    pub fn schedule_all(
        &mut self,
        ledger_key: Pubkey,
        grants: &[GrantInput],
        mut bump_for: impl FnMut(u64) -> u8,
    ) -> core::result::Result<Vec<VestingEntry>, VestingError> {
        let mut staged = self.clone();
        let mut entries = Vec::with_capacity(grants.len());
        for grant in grants {
            let bump = bump_for(staged.next_id);
            entries.push(staged.schedule(
                ledger_key,
                grant.beneficiary,
                grant.unlock_time,
                grant.amount,
                bump,
            )?);
        }
        *self = staged;
        Ok(entries)
    }

    /// Settles a Pending, unlocked entry against the live vault balance.
    ///
    /// Checks run in a fixed order and the first failure wins: assigned id,
    /// terminal state, unlock time, balance. Nothing is mutated on failure.
    pub fn release(
        &mut self,
        entry: &mut VestingEntry,
        now: i64,
        balance: u64,
    ) -> core::result::Result<Payout, VestingError> {
        self.ensure_assigned(entry.id)?;
        entry.ensure_pending().map_err(terminal_error)?;
        if !entry.is_unlocked(now) {
            return Err(VestingError::NotYetVested);
        }
        if balance < entry.amount {
            return Err(VestingError::InsufficientBalance);
        }
        let committed = accounting::uncommit(self.committed, entry.amount)?;
        let released_total = self
            .released_total
            .checked_add(entry.amount)
            .ok_or(VestingError::MathOverflow)?;

        entry.status = EntryStatus::Released;
        self.committed = committed;
        self.released_total = released_total;

        Ok(Payout {
            to: entry.beneficiary,
            amount: entry.amount,
        })
    }

    /// Cancels a Pending entry. The freed amount joins the excess; no tokens move.
    pub fn remove(&mut self, entry: &mut VestingEntry) -> core::result::Result<u64, VestingError> {
        self.ensure_assigned(entry.id)?;
        entry.ensure_pending().map_err(terminal_error)?;
        let committed = accounting::uncommit(self.committed, entry.amount)?;
        let removed_total = self
            .removed_total
            .checked_add(entry.amount)
            .ok_or(VestingError::MathOverflow)?;

        entry.status = EntryStatus::Removed;
        self.committed = committed;
        self.removed_total = removed_total;

        Ok(entry.amount)
    }

    pub fn excess(&self, balance: u64) -> u64 {
        accounting::excess(balance, self.committed)
    }

    /// Builds the owner payout for a withdrawal of excess tokens.
    pub fn retrieve_excess(
        &self,
        amount: u64,
        balance: u64,
    ) -> core::result::Result<Payout, VestingError> {
        accounting::ensure_within_excess(amount, balance, self.committed)?;
        Ok(Payout {
            to: self.owner,
            amount,
        })
    }
}
