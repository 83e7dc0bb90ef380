//! MintTo Processor
//!
//! Mints new tokens to a recipient, increasing supply.

use crate::error::LedgerResult;
use crate::state::Ledger;
use crate::utils::*;
use solana_program::{msg, pubkey::Pubkey};

/// Process MintTo
///
/// Only the ledger owner may mint. Overflow of either the supply or
/// the recipient's balance is rejected with `Overflow`.
pub fn process(
    ledger: &mut Ledger,
    caller: &Pubkey,
    recipient: &Pubkey,
    amount: u64,
) -> LedgerResult<()> {
    // Validate authority
    assert_owner(ledger, caller)?;

    // Compute both before writing either
    let supply = checked_add(ledger.total_supply(), amount)?;
    let balance = checked_add(ledger.balance_of(recipient), amount)?;

    ledger.set_total_supply(supply);
    ledger.set_balance(recipient, balance);

    msg!("Minted {} to {}, supply {}", amount, recipient, supply);

    Ok(())
}

// =============================================================================
// UNIT TESTS
// =============================================================================
