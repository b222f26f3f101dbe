use anchor_lang::prelude::*;

/// Custom error codes for the vesting ledger program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: owner signature required")]
    Unauthorized,

    #[msg("Invalid vesting id")]
    InvalidId,

    #[msg("Vesting already released")]
    AlreadyReleased,

    #[msg("Tokens have not vested yet")]
    NotYetVested,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Amount exceeds excess tokens")]
    InsufficientExcess,

    #[msg("Invalid input (zero amount or default beneficiary)")]
    InvalidInput,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account owner")]
    InvalidTokenAccount,

    #[msg("Empty batch")]
    EmptyBatch,

    #[msg("Batch size too large")]
    BatchTooLarge,

    #[msg("Batch accounts do not match ids")]
    BatchAccountsMismatch,

    #[msg("Math overflow")]
    MathOverflow,
}
