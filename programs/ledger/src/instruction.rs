//! Instruction Types
//!
//! This module defines every mutating operation in byte form.
//! A host that receives requests as raw bytes hands them to
//! `Processor::process` together with the authenticated caller.
//!
//! # Instruction Format
//!
//! ```text
//! [discriminant: u8][data: varies]
//! ```
//!
//! Integers are little-endian. Account keys are 32 raw bytes.
//!
//! # Discriminant Values
//!
//! | Value | Instruction |
//! |-------|-------------|
//! | 0 | Initialize |
//! | 1 | Transfer |
//! | 2 | Approve |
//! | 3 | TransferFrom |
//! | 4 | MintTo |
//! | 5 | Burn |
//! | 6 | Revoke |
//! | 7 | IncreaseAllowance |
//! | 8 | DecreaseAllowance |

use crate::error::LedgerError;
use arrayref::{array_ref, array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

/// Length of a packed key followed by a packed amount.
const KEY_AMOUNT_LEN: usize = 32 + 8;

/// Length of two packed keys followed by a packed amount.
const KEY_KEY_AMOUNT_LEN: usize = 32 + 32 + 8;

// =============================================================================
// LEDGER INSTRUCTION ENUM
// =============================================================================

/// All instructions supported by the ledger.
///
/// The caller is never encoded; it is supplied by the host alongside
/// the data and trusted as authentic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerInstruction {
    /// Create the ledger. The caller becomes its owner.
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (0)
    /// [1..9]: initial_supply (u64)
    /// [9]: decimals (u8)
    /// [10..14]: name length N (u32)
    /// [14..14+N]: name (UTF-8)
    /// [14+N..18+N]: symbol length S (u32)
    /// [18+N..18+N+S]: symbol (UTF-8)
    /// ```
    Initialize {
        /// Supply credited to the caller
        initial_supply: u64,

        /// Display precision
        decimals: u8,

        /// Token name
        name: String,

        /// Token symbol
        symbol: String,
    },

    /// Transfer from the caller to `recipient`.
    ///
    /// ```text
    /// [0]: discriminant (1)
    /// [1..33]: recipient
    /// [33..41]: amount (u64)
    /// ```
    Transfer { recipient: Pubkey, amount: u64 },

    /// Set the allowance of `spender` over the caller's balance.
    ///
    /// ```text
    /// [0]: discriminant (2)
    /// [1..33]: spender
    /// [33..41]: amount (u64)
    /// ```
    Approve { spender: Pubkey, amount: u64 },

    /// Spend the caller's allowance over `payer` to pay `recipient`.
    ///
    /// ```text
    /// [0]: discriminant (3)
    /// [1..33]: payer
    /// [33..65]: recipient
    /// [65..73]: amount (u64)
    /// ```
    TransferFrom {
        payer: Pubkey,
        recipient: Pubkey,
        amount: u64,
    },

    /// Mint new tokens to `recipient`. Owner only.
    MintTo { recipient: Pubkey, amount: u64 },

    /// Burn tokens held by `account`. Owner only.
    Burn { account: Pubkey, amount: u64 },

    /// Reset the allowance of `spender` to zero.
    ///
    /// ```text
    /// [0]: discriminant (6)
    /// [1..33]: spender
    /// ```
    Revoke { spender: Pubkey },

    /// Add to the allowance of `spender`.
    IncreaseAllowance { spender: Pubkey, amount: u64 },

    /// Subtract from the allowance of `spender`.
    DecreaseAllowance { spender: Pubkey, amount: u64 },
}

// =============================================================================
// INSTRUCTION PARSING (UNPACK)
// =============================================================================

impl LedgerInstruction {
    /// Parse instruction bytes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInstruction` for empty input, an unknown
    /// discriminant, a payload of the wrong length or non-UTF-8 strings.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        // Get the discriminant (first byte)
        let (&discriminant, rest) = input
            .split_first()
            .ok_or(LedgerError::InvalidInstruction)?;

        Ok(match discriminant {
            0 => {
                if rest.len() < 9 {
                    return Err(LedgerError::InvalidInstruction.into());
                }
                let (head, tail) = rest.split_at(9);
                let head = array_ref![head, 0, 9];
                let (supply, decimals) = array_refs![head, 8, 1];

                let (name, tail) = unpack_string(tail)?;
                let (symbol, tail) = unpack_string(tail)?;
                if !tail.is_empty() {
                    return Err(LedgerError::InvalidInstruction.into());
                }

                LedgerInstruction::Initialize {
                    initial_supply: u64::from_le_bytes(*supply),
                    decimals: decimals[0],
                    name,
                    symbol,
                }
            }

            1 => {
                let (recipient, amount) = unpack_key_amount(rest)?;
                LedgerInstruction::Transfer { recipient, amount }
            }

            2 => {
                let (spender, amount) = unpack_key_amount(rest)?;
                LedgerInstruction::Approve { spender, amount }
            }

            3 => {
                if rest.len() != KEY_KEY_AMOUNT_LEN {
                    return Err(LedgerError::InvalidInstruction.into());
                }
                let src = array_ref![rest, 0, KEY_KEY_AMOUNT_LEN];
                let (payer, recipient, amount) = array_refs![src, 32, 32, 8];
                LedgerInstruction::TransferFrom {
                    payer: Pubkey::new_from_array(*payer),
                    recipient: Pubkey::new_from_array(*recipient),
                    amount: u64::from_le_bytes(*amount),
                }
            }

            4 => {
                let (recipient, amount) = unpack_key_amount(rest)?;
                LedgerInstruction::MintTo { recipient, amount }
            }

            5 => {
                let (account, amount) = unpack_key_amount(rest)?;
                LedgerInstruction::Burn { account, amount }
            }

            6 => {
                if rest.len() != 32 {
                    return Err(LedgerError::InvalidInstruction.into());
                }
                LedgerInstruction::Revoke {
                    spender: Pubkey::new_from_array(*array_ref![rest, 0, 32]),
                }
            }

            7 => {
                let (spender, amount) = unpack_key_amount(rest)?;
                LedgerInstruction::IncreaseAllowance { spender, amount }
            }

            8 => {
                let (spender, amount) = unpack_key_amount(rest)?;
                LedgerInstruction::DecreaseAllowance { spender, amount }
            }

            _ => return Err(LedgerError::InvalidInstruction.into()),
        })
    }

    // =========================================================================
    // INSTRUCTION PACKING (for hosts and tests)
    // =========================================================================

    /// Serialize into instruction bytes. Inverse of `unpack`.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        match self {
            LedgerInstruction::Initialize {
                initial_supply,
                decimals,
                name,
                symbol,
            } => {
                buf.push(0);
                buf.extend_from_slice(&initial_supply.to_le_bytes());
                buf.push(*decimals);
                pack_string(&mut buf, name);
                pack_string(&mut buf, symbol);
            }

            LedgerInstruction::Transfer { recipient, amount } => {
                buf.push(1);
                pack_key_amount(&mut buf, recipient, *amount);
            }

            LedgerInstruction::Approve { spender, amount } => {
                buf.push(2);
                pack_key_amount(&mut buf, spender, *amount);
            }

            LedgerInstruction::TransferFrom {
                payer,
                recipient,
                amount,
            } => {
                buf.push(3);
                buf.extend_from_slice(payer.as_ref());
                pack_key_amount(&mut buf, recipient, *amount);
            }

            LedgerInstruction::MintTo { recipient, amount } => {
                buf.push(4);
                pack_key_amount(&mut buf, recipient, *amount);
            }

            LedgerInstruction::Burn { account, amount } => {
                buf.push(5);
                pack_key_amount(&mut buf, account, *amount);
            }

            LedgerInstruction::Revoke { spender } => {
                buf.push(6);
                buf.extend_from_slice(spender.as_ref());
            }

            LedgerInstruction::IncreaseAllowance { spender, amount } => {
                buf.push(7);
                pack_key_amount(&mut buf, spender, *amount);
            }

            LedgerInstruction::DecreaseAllowance { spender, amount } => {
                buf.push(8);
                pack_key_amount(&mut buf, spender, *amount);
            }
        }

        buf
    }
}

// =============================================================================
// FIELD HELPERS
// =============================================================================

fn unpack_key_amount(rest: &[u8]) -> Result<(Pubkey, u64), ProgramError> {
    if rest.len() != KEY_AMOUNT_LEN {
        return Err(LedgerError::InvalidInstruction.into());
    }
    let src = array_ref![rest, 0, KEY_AMOUNT_LEN];
    let (key, amount) = array_refs![src, 32, 8];
    Ok((Pubkey::new_from_array(*key), u64::from_le_bytes(*amount)))
}

fn pack_key_amount(buf: &mut Vec<u8>, key: &Pubkey, amount: u64) {
    buf.extend_from_slice(key.as_ref());
    buf.extend_from_slice(&amount.to_le_bytes());
}

/// Read a u32 length prefix followed by that many UTF-8 bytes.
fn unpack_string(input: &[u8]) -> Result<(String, &[u8]), ProgramError> {
    if input.len() < 4 {
        return Err(LedgerError::InvalidInstruction.into());
    }
    let (len, rest) = input.split_at(4);
    let len = u32::from_le_bytes(*array_ref![len, 0, 4]) as usize;

    if rest.len() < len {
        return Err(LedgerError::InvalidInstruction.into());
    }
    let (bytes, rest) = rest.split_at(len);
    let value = std::str::from_utf8(bytes)
        .map_err(|_| LedgerError::InvalidInstruction)?
        .to_string();

    Ok((value, rest))
}

fn pack_string(buf: &mut Vec<u8>, value: &str) {
    buf.extend_from_slice(&(value.len() as u32).to_le_bytes());
    buf.extend_from_slice(value.as_bytes());
}

// =============================================================================
// UNIT TESTS
// =============================================================================
