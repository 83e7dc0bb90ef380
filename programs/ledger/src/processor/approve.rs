//! Approve Processor
//!
//! Grants a spender the right to move tokens out of the caller's balance.

use crate::error::LedgerResult;
use crate::state::Ledger;
use solana_program::pubkey::Pubkey;

/// Process Approve
///
/// Sets the allowance to exactly `amount`, overwriting any previous
/// value. The caller's current balance is not consulted; it is only
/// enforced when the spender calls `transfer_from`.
pub fn process(
    ledger: &mut Ledger,
    caller: &Pubkey,
    spender: &Pubkey,
    amount: u64,
) -> LedgerResult<()> {
    ledger.set_allowance(caller, spender, amount);
    Ok(())
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approve_overwrites() {
        let owner = Pubkey::new_unique();
        let spender = Pubkey::new_unique();
        let mut ledger = Ledger::new(owner, 100, "Test", "TST", 0);

        process(&mut ledger, &owner, &spender, 10).unwrap();
        process(&mut ledger, &owner, &spender, 10).unwrap();
        assert_eq!(ledger.allowance(&owner, &spender), 10);

        // Re-approving lower reduces it
        process(&mut ledger, &owner, &spender, 3).unwrap();
        assert_eq!(ledger.allowance(&owner, &spender), 3);
    }

    #[test]
    fn test_approve_beyond_balance() {
        let owner = Pubkey::new_unique();
        let broke = Pubkey::new_unique();
        let spender = Pubkey::new_unique();
        let mut ledger = Ledger::new(owner, 100, "Test", "TST", 0);

        process(&mut ledger, &broke, &spender, 1_000_000).unwrap();

        assert_eq!(ledger.allowance(&broke, &spender), 1_000_000);
        assert_eq!(ledger.balance_of(&broke), 0);
        assert_eq!(ledger.total_supply(), 100);
    }
}
