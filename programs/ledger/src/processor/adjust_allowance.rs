//! IncreaseAllowance / DecreaseAllowance Processors
//!
//! Relative alternatives to Approve that adjust the current allowance
//! instead of overwriting it.

use crate::error::{LedgerError, LedgerResult};
use crate::state::Ledger;
use crate::utils::*;
use solana_program::pubkey::Pubkey;

/// Process IncreaseAllowance
///
/// Fails with `Overflow` if the result exceeds u64::MAX.
pub fn increase(
    ledger: &mut Ledger,
    caller: &Pubkey,
    spender: &Pubkey,
    added: u64,
) -> LedgerResult<()> {
    let allowance = checked_add(ledger.allowance(caller, spender), added)?;
    ledger.set_allowance(caller, spender, allowance);
    Ok(())
}

/// Process DecreaseAllowance
///
/// Fails with `InsufficientAllowance` if the result would be negative.
pub fn decrease(
    ledger: &mut Ledger,
    caller: &Pubkey,
    spender: &Pubkey,
    subtracted: u64,
) -> LedgerResult<()> {
    let allowance = checked_sub(
        ledger.allowance(caller, spender),
        subtracted,
        LedgerError::InsufficientAllowance,
    )?;
    ledger.set_allowance(caller, spender, allowance);
    Ok(())
}

// =============================================================================
// UNIT TESTS
// =============================================================================
