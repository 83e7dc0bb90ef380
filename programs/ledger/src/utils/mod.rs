//! Utility Modules
//!
//! This module provides helper functions used across all processors.
//!
//! # Modules
//!
//! - `assertions`: Precondition checks (owner gate, balance, allowance)
//! - `math`: Checked arithmetic that maps failures to ledger errors

pub mod assertions;
pub mod math;

// Re-export all utilities for easy access
pub use assertions::*;
pub use math::*;
