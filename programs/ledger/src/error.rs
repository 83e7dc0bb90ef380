//! Custom Error Types
//!
//! This module defines every rejection the ledger can report.
//! Each error has a stable numeric code that clients can match against
//! once it is converted into a `ProgramError`.
//!
//! # Error Codes
//!
//! | Code | Variant |
//! |------|---------|
//! | 0 | InsufficientBalance |
//! | 1 | InsufficientAllowance |
//! | 2 | AccessDenied |
//! | 3 | Overflow |
//! | 4 | InvalidInstruction |
//! | 5 | AlreadyInitialized |
//! | 6 | ConservationViolated |
//!
//! # Usage
//!
//! ```ignore
//! use crate::error::{LedgerError, LedgerResult};
//!
//! fn some_check(ok: bool) -> LedgerResult<()> {
//!     if !ok {
//!         return Err(LedgerError::AccessDenied);
//!     }
//!     Ok(())
//! }
//! ```

use solana_program::program_error::ProgramError;
use std::fmt;
use thiserror::Error;

// =============================================================================
// BALANCE SHORTFALL
// =============================================================================

/// Which debit ran short of funds.
///
/// The three debit paths share one error code but report
/// their own message, so callers can tell them apart in logs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BalanceShortfall {
    /// A direct transfer out of the caller's balance.
    Transfer,

    /// The balance leg of a delegated transfer.
    TransferFrom,

    /// An owner-initiated burn.
    Burn,
}

impl fmt::Display for BalanceShortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            BalanceShortfall::Transfer => "value higher than balance",
            BalanceShortfall::TransferFrom => "not enough balance",
            BalanceShortfall::Burn => "amount lower than existent",
        };
        f.write_str(message)
    }
}

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors that may be returned by the ledger.
///
/// # Important
///
/// Codes are part of the public interface.
/// Add new variants at the end and give them the next free code.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Error 0: Attempted debit exceeds the account's current balance.
    #[error("{0}")]
    InsufficientBalance(BalanceShortfall),

    /// Error 1: Delegated debit exceeds the spender's allowance.
    ///
    /// Also returned when an allowance would be decreased below zero.
    #[error("not enough allowance")]
    InsufficientAllowance,

    /// Error 2: Mint or burn invoked by someone other than the owner.
    #[error("Access denied, only owner")]
    AccessDenied,

    /// Error 3: Arithmetic overflow.
    ///
    /// E.g., minting would push supply above u64::MAX.
    #[error("Arithmetic overflow")]
    Overflow,

    /// Error 4: Could not parse the instruction data.
    #[error("Invalid instruction")]
    InvalidInstruction,

    /// Error 5: An Initialize instruction was sent to a live ledger.
    #[error("Ledger already initialized")]
    AlreadyInitialized,

    /// Error 6: Sum of balances differs from the recorded total supply.
    #[error("Total supply does not match balances")]
    ConservationViolated,
}

impl LedgerError {
    /// Stable numeric code used for `ProgramError::Custom`.
    pub fn code(&self) -> u32 {
        match self {
            LedgerError::InsufficientBalance(_) => 0,
            LedgerError::InsufficientAllowance => 1,
            LedgerError::AccessDenied => 2,
            LedgerError::Overflow => 3,
            LedgerError::InvalidInstruction => 4,
            LedgerError::AlreadyInitialized => 5,
            LedgerError::ConservationViolated => 6,
        }
    }
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

// =============================================================================
// CONVERSION TO PROGRAMERROR
// =============================================================================

/// Convert LedgerError to ProgramError.
///
/// This lets the byte-level processor use `?` on typed operations.
impl From<LedgerError> for ProgramError {
    fn from(e: LedgerError) -> Self {
        ProgramError::Custom(e.code())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================


/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

ONE CODE, THREE MESSAGES
========================

A short balance can surface from three places:

    transfer       -> "value higher than balance"
    transferFrom   -> "not enough balance"
    burn           -> "amount lower than existent"

Clients that only see ProgramError::Custom(0) can treat them alike.
Callers holding the typed LedgerError can match on the BalanceShortfall
and show the exact reason.

    match err {
        LedgerError::InsufficientBalance(BalanceShortfall::Burn) => ...,
        LedgerError::InsufficientBalance(_) => ...,
        _ => ...,
    }

WHY code() INSTEAD OF `as u32`?
===============================

`e as u32` only works for field-less enums.
InsufficientBalance carries a BalanceShortfall, so the discriminant
cast is not available. code() spells the table out explicitly, which
also makes accidental renumbering show up in review.
*/
