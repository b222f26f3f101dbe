use anchor_lang::prelude::*;

use crate::error::VestingError;

/// Lifecycle of a single grant. `Released` and `Removed` are terminal.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum EntryStatus {
    Pending,
    Released,
    Removed,
}

/// One scheduled single-payout grant, keyed by `[VESTING_SEED, ledger, id]`.
#[account]
#[derive(InitSpace)]
pub struct VestingEntry {
    /// Ledger this entry belongs to.
    pub ledger: Pubkey,
    /// Sequential id, starting at 1.
    pub id: u64,
    /// Recipient wallet; the payout goes to a token account it owns.
    pub beneficiary: Pubkey,
    /// Unix seconds; release is allowed at and after this instant.
    pub unlock_time: i64,
    /// Token units, fixed at creation.
    pub amount: u64,
    pub status: EntryStatus,
    pub bump: u8,
}

/// Instruction input for bulk scheduling (beneficiary + unlock time + amount).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrantInput {
    pub beneficiary: Pubkey,
    pub unlock_time: i64,
    pub amount: u64,
}

impl VestingEntry {
    pub const SPACE: usize = 8 + VestingEntry::INIT_SPACE;

    /// Returns the terminal status that blocks any further transition.
    pub fn ensure_pending(&self) -> core::result::Result<(), EntryStatus> {
        match self.status {
            EntryStatus::Pending => Ok(()),
            terminal => Err(terminal),
        }
    }

    pub fn is_unlocked(&self, now: i64) -> bool {
        now >= self.unlock_time
    }

    /// Reads an entry from an account the `Accounts` validation left unchecked,
    /// so that never-assigned ids surface as `InvalidId` rather than a
    /// deserialization failure.
    pub fn load(info: &AccountInfo<'_>, ledger: &Pubkey, id: u64) -> Result<Self> {
        require_keys_eq!(*info.owner, crate::ID, VestingError::InvalidId);
        let data = info.try_borrow_data()?;
        let entry = VestingEntry::try_deserialize(&mut &data[..])?;
        require_keys_eq!(entry.ledger, *ledger, VestingError::InvalidId);
        require!(entry.id == id, VestingError::InvalidId);
        Ok(entry)
    }

    /// Writes the entry back into the account loaded with [`VestingEntry::load`].
    pub fn store(&self, info: &AccountInfo<'_>) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(status: EntryStatus) -> VestingEntry {
        VestingEntry {
            ledger: Pubkey::new_unique(),
            id: 1,
            beneficiary: Pubkey::new_unique(),
            unlock_time: 1_000,
            amount: 10,
            status,
            bump: 255,
        }
    }

    #[test]
    fn terminal_states_are_reported_distinctly() {
        assert!(entry(EntryStatus::Pending).ensure_pending().is_ok());
        assert_eq!(
            entry(EntryStatus::Released).ensure_pending(),
            Err(EntryStatus::Released)
        );
        assert_eq!(
            entry(EntryStatus::Removed).ensure_pending(),
            Err(EntryStatus::Removed)
        );
    }

    #[test]
    fn unlock_boundary_inclusive() {
        let e = entry(EntryStatus::Pending);
        assert!(!e.is_unlocked(999));
        assert!(e.is_unlocked(1_000));
        assert!(e.is_unlocked(1_001));
    }

    #[test]
    fn serialized_entry_fits_allocated_space() {
        let e = entry(EntryStatus::Released);
        let mut buf = Vec::new();
        e.try_serialize(&mut buf).unwrap();
        assert!(buf.len() <= VestingEntry::SPACE);

        let back = VestingEntry::try_deserialize(&mut &buf[..]).unwrap();
        assert_eq!(back.status, EntryStatus::Released);
        assert_eq!(back.amount, 10);
    }
}
