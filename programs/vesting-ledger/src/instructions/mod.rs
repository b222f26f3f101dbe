pub mod initialize_ledger;
pub mod deposit_tokens;
pub mod create_vesting;
pub mod create_vestings;
pub mod release;
pub mod batch_release;
pub mod remove_vesting;
pub mod retrieve_excess_tokens;
pub mod vesting_amount;
pub mod excess_tokens;

pub use initialize_ledger::*;
pub use deposit_tokens::*;
pub use create_vesting::*;
pub use create_vestings::*;
pub use release::*;
pub use batch_release::*;
pub use remove_vesting::*;
pub use retrieve_excess_tokens::*;
pub use vesting_amount::*;
pub use excess_tokens::*;
