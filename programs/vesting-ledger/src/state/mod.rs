pub mod vesting_entry;
pub mod vesting_ledger;

pub use vesting_entry::*;
pub use vesting_ledger::*;
