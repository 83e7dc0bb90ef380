//! Assertion Helper Functions
//!
//! Precondition checks shared by the processors.
//! Every processor runs its assertions before touching state, so a
//! failed check never leaves a half-applied operation behind.
//!
//! # Usage Pattern
//!
//! ```ignore
//! pub fn process(ledger: &mut Ledger, caller: &Pubkey, ...) -> LedgerResult<()> {
//!     // Validate everything first
//!     assert_owner(ledger, caller)?;
//!     assert_sufficient_balance(ledger, account, amount, BalanceShortfall::Burn)?;
//!
//!     // Then do the actual work
//!     ...
//! }
//! ```

use crate::error::{BalanceShortfall, LedgerError, LedgerResult};
use crate::state::Ledger;
use solana_program::pubkey::Pubkey;

// =============================================================================
// AUTHORITY CHECKS
// =============================================================================

/// Assert that `caller` is the ledger owner.
///
/// # Errors
///
/// Returns `AccessDenied` for any other identity.
pub fn assert_owner(ledger: &Ledger, caller: &Pubkey) -> LedgerResult<()> {
    if ledger.owner() != caller {
        Err(LedgerError::AccessDenied)
    } else {
        Ok(())
    }
}

// =============================================================================
// FUNDS CHECKS
// =============================================================================

/// Assert that `account` holds at least `amount`.
///
/// # Errors
///
/// Returns `InsufficientBalance(shortfall)` if the balance is lower.
pub fn assert_sufficient_balance(
    ledger: &Ledger,
    account: &Pubkey,
    amount: u64,
    shortfall: BalanceShortfall,
) -> LedgerResult<()> {
    if ledger.balance_of(account) < amount {
        Err(LedgerError::InsufficientBalance(shortfall))
    } else {
        Ok(())
    }
}

/// Assert that `spender` may still move `amount` out of `owner`'s balance.
///
/// # Errors
///
/// Returns `InsufficientAllowance` if the allowance is lower,
/// including when none was ever granted.
pub fn assert_sufficient_allowance(
    ledger: &Ledger,
    owner: &Pubkey,
    spender: &Pubkey,
    amount: u64,
) -> LedgerResult<()> {
    if ledger.allowance(owner, spender) < amount {
        Err(LedgerError::InsufficientAllowance)
    } else {
        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
