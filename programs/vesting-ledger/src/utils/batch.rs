//! Shape checks shared by the batch instructions. Items arrive as an
//! instruction vector; their accounts arrive as `remaining_accounts`.

use crate::error::VestingError;

/// Checks, in order: non-empty, within `max`, and exactly `per_item`
/// remaining accounts per item.
pub fn ensure_batch_shape(
    items: usize,
    max: usize,
    remaining_accounts: usize,
    per_item: usize,
) -> Result<(), VestingError> {
    if items == 0 {
        return Err(VestingError::EmptyBatch);
    }
    if items > max {
        return Err(VestingError::BatchTooLarge);
    }
    let expected = items
        .checked_mul(per_item)
        .ok_or(VestingError::MathOverflow)?;
    if remaining_accounts != expected {
        return Err(VestingError::BatchAccountsMismatch);
    }
    Ok(())
}
