//! Transfer Processor
//!
//! Transfers tokens from the caller to a recipient.

use crate::error::{BalanceShortfall, LedgerError, LedgerResult};
use crate::state::Ledger;
use crate::utils::*;
use solana_program::pubkey::Pubkey;

/// Process Transfer
///
/// Debits `caller` and credits `recipient`. Supply is unchanged.
/// A transfer to oneself still has to pass the balance check.
pub fn process(
    ledger: &mut Ledger,
    caller: &Pubkey,
    recipient: &Pubkey,
    amount: u64,
) -> LedgerResult<()> {
    move_funds(ledger, caller, recipient, amount, BalanceShortfall::Transfer)
}

/// Debit `from` and credit `to` in one step.
///
/// Both new balances are computed before either is written.
pub(crate) fn move_funds(
    ledger: &mut Ledger,
    from: &Pubkey,
    to: &Pubkey,
    amount: u64,
    shortfall: BalanceShortfall,
) -> LedgerResult<()> {
    // Validate sufficient funds
    assert_sufficient_balance(ledger, from, amount, shortfall)?;

    // Net no-op, nothing to write
    if from == to {
        return Ok(());
    }

    let from_balance = checked_sub(
        ledger.balance_of(from),
        amount,
        LedgerError::InsufficientBalance(shortfall),
    )?;
    let to_balance = checked_add(ledger.balance_of(to), amount)?;

    ledger.set_balance(from, from_balance);
    ledger.set_balance(to, to_balance);

    Ok(())
}

// =============================================================================
// UNIT TESTS
// =============================================================================
