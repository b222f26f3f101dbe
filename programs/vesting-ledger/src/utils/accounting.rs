//! Commitment arithmetic for the custody pool.
//! - committed = sum of amounts over Pending entries
//! - excess = balance - committed, floored at 0 while the pool is under-funded

use crate::error::VestingError;

/// Adds a newly scheduled amount to the committed total.
pub fn commit(committed: u64, amount: u64) -> Result<u64, VestingError> {
    committed
        .checked_add(amount)
        .ok_or(VestingError::MathOverflow)
}

/// Removes a settled (released or removed) amount from the committed total.
pub fn uncommit(committed: u64, amount: u64) -> Result<u64, VestingError> {
    committed
        .checked_sub(amount)
        .ok_or(VestingError::MathOverflow)
}

/// Balance the owner may reclaim without touching Pending obligations.
pub fn excess(balance: u64, committed: u64) -> u64 {
    balance.saturating_sub(committed)
}

/// Fails with `InsufficientExcess` unless `amount` fits inside the live excess.
pub fn ensure_within_excess(
    amount: u64,
    balance: u64,
    committed: u64,
) -> Result<(), VestingError> {
    if amount == 0 {
        return Err(VestingError::InvalidInput);
    }
    if amount > excess(balance, committed) {
        return Err(VestingError::InsufficientExcess);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excess_floors_at_zero_when_underfunded() {
        assert_eq!(excess(100, 40), 60);
        assert_eq!(excess(40, 40), 0);
        assert_eq!(excess(10, 40), 0);
    }

    #[test]
    fn commit_overflow_is_reported() {
        assert_eq!(commit(1, 2).unwrap(), 3);
        assert!(matches!(
            commit(u64::MAX, 1),
            Err(VestingError::MathOverflow)
        ));
        assert!(matches!(uncommit(1, 2), Err(VestingError::MathOverflow)));
    }

    #[test]
    fn withdrawal_bounded_by_excess() {
        assert!(ensure_within_excess(60, 100, 40).is_ok());
        assert!(matches!(
            ensure_within_excess(61, 100, 40),
            Err(VestingError::InsufficientExcess)
        ));
        // Raw balance covers it, but it is committed.
        assert!(matches!(
            ensure_within_excess(100, 100, 40),
            Err(VestingError::InsufficientExcess)
        ));
        assert!(matches!(
            ensure_within_excess(0, 100, 40),
            Err(VestingError::InvalidInput)
        ));
    }
}
