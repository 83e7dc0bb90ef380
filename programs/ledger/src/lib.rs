//! # Token Ledger
//!
//! An in-memory ledger for one divisible, fungible token.
//!
//! ## Overview
//!
//! The ledger lets you:
//! - Transfer tokens between accounts
//! - Approve spenders (allow others to spend your tokens)
//! - Transfer on behalf of an approver, within the allowance
//! - Mint and burn tokens (owner only)
//!
//! ## Invariants
//!
//! | Invariant | Enforced by |
//! |-----------|-------------|
//! | `total_supply == sum(balances)` | mint/burn adjust both; transfers move, never create |
//! | No negative balances or allowances | `u64` + checked arithmetic |
//! | Owner is fixed | no operation writes `owner` |
//!
//! ## Instructions
//!
//! | # | Instruction | Description |
//! |---|-------------|-------------|
//! | 0 | Initialize | Create the ledger |
//! | 1 | Transfer | Transfer tokens |
//! | 2 | Approve | Set a spender's allowance |
//! | 3 | TransferFrom | Spend an allowance |
//! | 4 | MintTo | Mint new tokens |
//! | 5 | Burn | Burn tokens |
//! | 6 | Revoke | Clear a spender's allowance |
//! | 7 | IncreaseAllowance | Raise an allowance |
//! | 8 | DecreaseAllowance | Lower an allowance |

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Custom error types with unique codes
pub mod error;

/// Instruction definitions and parsing
pub mod instruction;

/// Operation processors (business logic)
pub mod processor;

/// Thread-safe handle around a ledger
pub mod shared;

/// Ledger state and token metadata
pub mod state;

/// Utility functions for validation and math
pub mod utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use error::{BalanceShortfall, LedgerError, LedgerResult};
pub use instruction::LedgerInstruction;
pub use processor::Processor;
pub use shared::SharedLedger;
pub use state::{Ledger, TokenMetadata};
