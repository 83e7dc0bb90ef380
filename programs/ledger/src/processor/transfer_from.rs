//! TransferFrom Processor
//!
//! Moves tokens out of a payer's balance on the payer's prior approval.
//! The caller acts as the spender.

use crate::error::{BalanceShortfall, LedgerError, LedgerResult};
use crate::processor::transfer::move_funds;
use crate::state::Ledger;
use crate::utils::*;
use solana_program::pubkey::Pubkey;

/// Process TransferFrom
///
/// Checks, in this order:
/// 1. `amount <= allowance(payer, caller)`, else `InsufficientAllowance`
/// 2. `amount <= balance_of(payer)`, else `InsufficientBalance`
///
/// On success the allowance is decremented by `amount`, leaving any
/// residual for later calls.
pub fn process(
    ledger: &mut Ledger,
    caller: &Pubkey,
    payer: &Pubkey,
    recipient: &Pubkey,
    amount: u64,
) -> LedgerResult<()> {
    // Allowance first: the caller sees this error even if the balance is short too
    assert_sufficient_allowance(ledger, payer, caller, amount)?;

    let remaining = checked_sub(
        ledger.allowance(payer, caller),
        amount,
        LedgerError::InsufficientAllowance,
    )?;

    // Writes nothing on failure
    move_funds(ledger, payer, recipient, amount, BalanceShortfall::TransferFrom)?;

    ledger.set_allowance(payer, caller, remaining);

    Ok(())
}

// =============================================================================
// UNIT TESTS
// =============================================================================
