//! Burn Processor
//!
//! Burns (destroys) tokens held by an account, decreasing supply.

use crate::error::{BalanceShortfall, LedgerError, LedgerResult};
use crate::state::Ledger;
use crate::utils::*;
use solana_program::{msg, pubkey::Pubkey};

/// Process Burn
///
/// Checks, in this order:
/// 1. `caller` is the ledger owner, else `AccessDenied`
/// 2. `amount <= balance_of(account)`, else `InsufficientBalance`
pub fn process(
    ledger: &mut Ledger,
    caller: &Pubkey,
    account: &Pubkey,
    amount: u64,
) -> LedgerResult<()> {
    // Validate authority
    assert_owner(ledger, caller)?;

    // Validate sufficient funds
    assert_sufficient_balance(ledger, account, amount, BalanceShortfall::Burn)?;

    let shortfall = LedgerError::InsufficientBalance(BalanceShortfall::Burn);
    let balance = checked_sub(ledger.balance_of(account), amount, shortfall)?;
    let supply = checked_sub(ledger.total_supply(), amount, LedgerError::ConservationViolated)?;

    ledger.set_balance(account, balance);
    ledger.set_total_supply(supply);

    msg!("Burned {} from {}, supply {}", amount, account, supply);

    Ok(())
}

// =============================================================================
// UNIT TESTS
// =============================================================================
