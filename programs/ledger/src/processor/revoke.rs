//! Revoke Processor
//!
//! Removes a spender's right to move the caller's tokens.

use crate::error::LedgerResult;
use crate::processor::approve;
use crate::state::Ledger;
use solana_program::pubkey::Pubkey;

/// Process Revoke
///
/// Same effect as approving zero.
pub fn process(ledger: &mut Ledger, caller: &Pubkey, spender: &Pubkey) -> LedgerResult<()> {
    approve::process(ledger, caller, spender, 0)
}

// =============================================================================
// UNIT TESTS
// =============================================================================
