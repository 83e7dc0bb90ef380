//! Shared Ledger Handle
//!
//! `Ledger` mutates through `&mut self` and is single-threaded.
//! `SharedLedger` lets several threads use one ledger by putting it
//! behind a single `RwLock`.
//!
//! # Locking
//!
//! - Every mutating call holds the write lock for its whole
//!   check-then-write sequence, so two mutations never interleave.
//! - Reads take the read lock and see a state between operations.
//!
//! ```ignore
//! let shared = SharedLedger::new(Ledger::new(owner, 1_000, "Test", "TST", 0));
//! let handle = shared.clone();
//! std::thread::spawn(move || handle.transfer(&owner, &alice, 10));
//! ```

use crate::error::LedgerResult;
use crate::processor::Processor;
use crate::state::Ledger;
use parking_lot::RwLock;
use solana_program::{entrypoint::ProgramResult, pubkey::Pubkey};
use std::sync::Arc;

/// Cloneable, thread-safe handle to one ledger.
///
/// Clones share the same underlying state.
#[derive(Clone, Debug)]
pub struct SharedLedger {
    inner: Arc<RwLock<Ledger>>,
}

impl SharedLedger {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    /// Run `f` with shared read access.
    pub fn read<R>(&self, f: impl FnOnce(&Ledger) -> R) -> R {
        f(&*self.inner.read())
    }

    /// Run `f` with exclusive access. Use for multi-step host logic
    /// that must not be interleaved with other mutations.
    pub fn write<R>(&self, f: impl FnOnce(&mut Ledger) -> R) -> R {
        f(&mut *self.inner.write())
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> Ledger {
        self.inner.read().clone()
    }

    pub fn total_supply(&self) -> u64 {
        self.read(|ledger| ledger.total_supply())
    }

    pub fn balance_of(&self, account: &Pubkey) -> u64 {
        self.read(|ledger| ledger.balance_of(account))
    }

    pub fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> u64 {
        self.read(|ledger| ledger.allowance(owner, spender))
    }

    pub fn transfer(&self, caller: &Pubkey, recipient: &Pubkey, amount: u64) -> LedgerResult<()> {
        self.write(|ledger| ledger.transfer(caller, recipient, amount))
    }

    pub fn approve(&self, caller: &Pubkey, spender: &Pubkey, amount: u64) -> LedgerResult<()> {
        self.write(|ledger| ledger.approve(caller, spender, amount))
    }

    pub fn transfer_from(
        &self,
        caller: &Pubkey,
        payer: &Pubkey,
        recipient: &Pubkey,
        amount: u64,
    ) -> LedgerResult<()> {
        self.write(|ledger| ledger.transfer_from(caller, payer, recipient, amount))
    }

    pub fn mint(&self, caller: &Pubkey, recipient: &Pubkey, amount: u64) -> LedgerResult<()> {
        self.write(|ledger| ledger.mint(caller, recipient, amount))
    }

    pub fn burn(&self, caller: &Pubkey, account: &Pubkey, amount: u64) -> LedgerResult<()> {
        self.write(|ledger| ledger.burn(caller, account, amount))
    }

    /// Decode and apply a packed instruction under the write lock.
    pub fn process(&self, caller: &Pubkey, instruction_data: &[u8]) -> ProgramResult {
        self.write(|ledger| Processor::process(ledger, caller, instruction_data))
    }
}

impl From<Ledger> for SharedLedger {
    fn from(ledger: Ledger) -> Self {
        Self::new(ledger)
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let owner = Pubkey::new_unique();
        let alice = Pubkey::new_unique();
        let shared = SharedLedger::new(Ledger::new(owner, 100, "Test", "TST", 0));
        let other = shared.clone();

        other.transfer(&owner, &alice, 30).unwrap();

        assert_eq!(shared.balance_of(&alice), 30);
        assert_eq!(shared.balance_of(&owner), 70);
    }

    #[test]
    fn test_concurrent_spends_never_overdraw() {
        let owner = Pubkey::new_unique();
        let spender = Pubkey::new_unique();
        let sink = Pubkey::new_unique();
        let shared = SharedLedger::new(Ledger::new(owner, 100, "Test", "TST", 0));
        shared.approve(&owner, &spender, 50).unwrap();

        // 10 threads each try to spend 10 from an allowance of 50
        let handles: Vec<_> = (0..10)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || shared.transfer_from(&spender, &owner, &sink, 10))
            })
            .collect();

        let results: Vec<LedgerResult<()>> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();

        let ok = results.iter().filter(|r| r.is_ok()).count();
        let denied = results
            .iter()
            .filter(|r| **r == Err(LedgerError::InsufficientAllowance))
            .count();

        assert_eq!(ok, 5);
        assert_eq!(denied, 5);
        assert_eq!(shared.balance_of(&sink), 50);
        assert_eq!(shared.allowance(&owner, &spender), 0);
        assert!(shared.read(|ledger| ledger.check_invariants()).is_ok());
    }
}
