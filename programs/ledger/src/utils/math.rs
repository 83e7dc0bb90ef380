//! Checked Arithmetic
//!
//! Every amount the ledger stores goes through these helpers.
//! Overflow never wraps; it becomes a `LedgerError`.

use crate::error::{LedgerError, LedgerResult};
use num_traits::{CheckedAdd, CheckedSub};

/// Checked addition that returns `Overflow` instead of wrapping.
///
/// # Example
///
/// ```ignore
/// let supply = checked_add(ledger.total_supply(), amount)?;
/// ```
pub fn checked_add<T: CheckedAdd>(a: T, b: T) -> LedgerResult<T> {
    a.checked_add(&b).ok_or(LedgerError::Overflow)
}

/// Checked subtraction that reports `on_underflow` when `b > a`.
///
/// The caller picks the error, because an underflow means different
/// things for a balance and for an allowance.
///
/// # Example
///
/// ```ignore
/// let remaining = checked_sub(allowance, amount, LedgerError::InsufficientAllowance)?;
/// ```
pub fn checked_sub<T: CheckedSub>(a: T, b: T, on_underflow: LedgerError) -> LedgerResult<T> {
    a.checked_sub(&b).ok_or(on_underflow)
}

/// Sum an iterator of amounts, failing on overflow.
pub fn checked_sum<T, I>(values: I) -> LedgerResult<T>
where
    T: CheckedAdd + num_traits::Zero,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .try_fold(T::zero(), |acc, value| checked_add(acc, value))
}

// =============================================================================
// UNIT TESTS
// =============================================================================
