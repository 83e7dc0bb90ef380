//! Ledger State Structures
//!
//! This module defines the data the ledger keeps in memory.
//!
//! # Types
//!
//! | Type | Description |
//! |------|-------------|
//! | Ledger | Balances, allowances, supply and the owner |
//! | TokenMetadata | Immutable name, symbol and decimals |
//!
//! # Implicit Zeros
//!
//! Accounts and allowance pairs that were never written are not stored.
//! Every lookup for a missing key reads as zero, so no account has to be
//! registered before it can receive funds.

// =============================================================================
// SUBMODULES
// =============================================================================

pub mod ledger;
pub mod metadata;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use ledger::Ledger;
pub use metadata::TokenMetadata;
