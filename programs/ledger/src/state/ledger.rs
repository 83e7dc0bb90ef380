//! Ledger State
//!
//! The `Ledger` owns every piece of token state: metadata, the owner,
//! the total supply, balances and allowances.
//!
//! # What the Ledger Guarantees
//!
//! 1. `total_supply` equals the sum of all balances
//! 2. Balances and allowances never go negative (u64 + checked math)
//! 3. `owner` is fixed at construction
//!
//! Mutating operations live in `crate::processor`, one file each.
//! The methods on `Ledger` with the same names are thin wrappers so
//! callers can write `ledger.transfer(...)` directly.

use crate::error::{LedgerError, LedgerResult};
use crate::processor::{
    adjust_allowance, approve, burn, mint_to, revoke, transfer, transfer_from,
};
use crate::state::TokenMetadata;
use crate::utils::checked_sum;
use solana_program::{msg, pubkey::Pubkey};
use std::collections::HashMap;

// =============================================================================
// LEDGER STRUCTURE
// =============================================================================

/// In-memory authoritative state of one fungible token.
///
/// # Example Usage
///
/// ```ignore
/// let owner = Pubkey::new_unique();
/// let mut ledger = Ledger::new(owner, 5_000_000, "Bucks Bunny", "BKB", 8);
///
/// let alice = Pubkey::new_unique();
/// ledger.transfer(&owner, &alice, 20)?;
/// assert_eq!(ledger.balance_of(&alice), 20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ledger {
    /// Name, symbol and decimals.
    metadata: TokenMetadata,

    /// The constructing account; the only one allowed to mint and burn.
    owner: Pubkey,

    /// Total number of base units in existence.
    total_supply: u64,

    /// Account balances. Missing keys read as zero.
    balances: HashMap<Pubkey, u64>,

    /// Allowances keyed by (owner, spender). Missing keys read as zero.
    allowances: HashMap<(Pubkey, Pubkey), u64>,
}

impl Ledger {
    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Create a ledger whose whole initial supply belongs to `owner`.
    ///
    /// Never fails: a zero supply or zero decimals are valid.
    pub fn new(
        owner: Pubkey,
        initial_supply: u64,
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
    ) -> Self {
        Self::with_metadata(owner, initial_supply, TokenMetadata::new(name, symbol, decimals))
    }

    /// Create a ledger from prepared metadata.
    pub fn with_metadata(owner: Pubkey, initial_supply: u64, metadata: TokenMetadata) -> Self {
        msg!(
            "Ledger created: {} ({}), supply {}, owner {}",
            metadata.name,
            metadata.symbol,
            initial_supply,
            owner
        );

        let mut balances = HashMap::new();
        balances.insert(owner, initial_supply);

        Self {
            metadata,
            owner,
            total_supply: initial_supply,
            balances,
            allowances: HashMap::new(),
        }
    }

    // =========================================================================
    // READ OPERATIONS
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    pub fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    pub fn owner(&self) -> &Pubkey {
        &self.owner
    }

    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }

    /// Balance of `account`, or 0 if it never held funds.
    pub fn balance_of(&self, account: &Pubkey) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Amount `spender` may still move out of `owner`'s balance.
    pub fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> u64 {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(0)
    }

    /// Every represented account with its balance, in no particular order.
    ///
    /// Accounts whose balance dropped back to zero are still listed.
    pub fn holders(&self) -> impl Iterator<Item = (&Pubkey, u64)> {
        self.balances.iter().map(|(account, amount)| (account, *amount))
    }

    /// Recompute the sum of balances and compare it with the total supply.
    ///
    /// # Errors
    ///
    /// Returns `ConservationViolated` if they differ or the sum overflows.
    pub fn check_invariants(&self) -> LedgerResult<()> {
        let sum: u64 = checked_sum(self.balances.values().copied())
            .map_err(|_| LedgerError::ConservationViolated)?;
        if sum != self.total_supply {
            return Err(LedgerError::ConservationViolated);
        }
        Ok(())
    }

    // =========================================================================
    // MUTATING OPERATIONS
    // =========================================================================

    /// Move `amount` from `caller` to `recipient`.
    pub fn transfer(&mut self, caller: &Pubkey, recipient: &Pubkey, amount: u64) -> LedgerResult<()> {
        transfer::process(self, caller, recipient, amount)
    }

    /// Set the allowance of `spender` over `caller`'s balance to `amount`.
    pub fn approve(&mut self, caller: &Pubkey, spender: &Pubkey, amount: u64) -> LedgerResult<()> {
        approve::process(self, caller, spender, amount)
    }

    /// Move `amount` from `payer` to `recipient`, spending `caller`'s allowance.
    pub fn transfer_from(
        &mut self,
        caller: &Pubkey,
        payer: &Pubkey,
        recipient: &Pubkey,
        amount: u64,
    ) -> LedgerResult<()> {
        transfer_from::process(self, caller, payer, recipient, amount)
    }

    /// Create `amount` new units for `recipient`. Owner only.
    pub fn mint(&mut self, caller: &Pubkey, recipient: &Pubkey, amount: u64) -> LedgerResult<()> {
        mint_to::process(self, caller, recipient, amount)
    }

    /// Destroy `amount` units held by `account`. Owner only.
    pub fn burn(&mut self, caller: &Pubkey, account: &Pubkey, amount: u64) -> LedgerResult<()> {
        burn::process(self, caller, account, amount)
    }

    /// Reset the allowance of `spender` over `caller`'s balance to zero.
    pub fn revoke(&mut self, caller: &Pubkey, spender: &Pubkey) -> LedgerResult<()> {
        revoke::process(self, caller, spender)
    }

    /// Add `added` to the allowance of `spender` over `caller`'s balance.
    pub fn increase_allowance(
        &mut self,
        caller: &Pubkey,
        spender: &Pubkey,
        added: u64,
    ) -> LedgerResult<()> {
        adjust_allowance::increase(self, caller, spender, added)
    }

    /// Subtract `subtracted` from the allowance of `spender` over `caller`'s balance.
    pub fn decrease_allowance(
        &mut self,
        caller: &Pubkey,
        spender: &Pubkey,
        subtracted: u64,
    ) -> LedgerResult<()> {
        adjust_allowance::decrease(self, caller, spender, subtracted)
    }

    // =========================================================================
    // RAW WRITES (processors only)
    // =========================================================================

    pub(crate) fn set_balance(&mut self, account: &Pubkey, amount: u64) {
        self.balances.insert(*account, amount);
    }

    pub(crate) fn set_allowance(&mut self, owner: &Pubkey, spender: &Pubkey, amount: u64) {
        self.allowances.insert((*owner, *spender), amount);
    }

    pub(crate) fn set_total_supply(&mut self, supply: u64) {
        self.total_supply = supply;
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
