//! Program-wide constants.

/// PDA seed of the ledger account: `[LEDGER_SEED, owner, mint]`.
pub const LEDGER_SEED: &[u8] = b"ledger";

/// PDA seed of the custody vault: `[VAULT_SEED, ledger]`.
pub const VAULT_SEED: &[u8] = b"vault";

/// PDA seed of a vesting entry: `[VESTING_SEED, ledger, id.to_le_bytes()]`.
pub const VESTING_SEED: &[u8] = b"vesting";

/// Ids start at 1; 0 is never assigned.
pub const FIRST_VESTING_ID: u64 = 1;

/// Max entries processed per `batch_release` call.
pub const MAX_BATCH_RELEASE: usize = 5;

/// Max grants scheduled per `create_vestings` call.
pub const MAX_BATCH_CREATE: usize = 8;

/// Remaining accounts consumed per batch item: entry + beneficiary token account.
pub const ACCOUNTS_PER_BATCH_ITEM: usize = 2;

/// Remaining accounts consumed per `create_vestings` grant: the new entry PDA.
pub const ACCOUNTS_PER_GRANT: usize = 1;
