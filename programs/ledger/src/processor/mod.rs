//! Instruction Processors
//!
//! This module contains the state-transition logic for each operation.
//! Each operation has its own file; `Processor` decodes packed
//! instructions and routes them to the right one.

pub mod adjust_allowance;
pub mod approve;
pub mod burn;
pub mod initialize;
pub mod mint_to;
pub mod revoke;
pub mod transfer;
pub mod transfer_from;

use crate::error::LedgerError;
use crate::instruction::LedgerInstruction;
use crate::state::Ledger;
use solana_program::{
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
};

/// Main processor that routes instructions to specific handlers
pub struct Processor;

impl Processor {
    /// Create a ledger from a packed Initialize instruction.
    ///
    /// `caller` becomes the owner. Any other instruction is rejected
    /// with `InvalidInstruction`.
    pub fn initialize(caller: &Pubkey, instruction_data: &[u8]) -> Result<Ledger, ProgramError> {
        match LedgerInstruction::unpack(instruction_data)? {
            LedgerInstruction::Initialize {
                initial_supply,
                decimals,
                name,
                symbol,
            } => {
                msg!("Instruction: Initialize");
                Ok(initialize::process(caller, initial_supply, decimals, name, symbol))
            }
            _ => Err(LedgerError::InvalidInstruction.into()),
        }
    }

    /// Process a packed instruction against an existing ledger.
    ///
    /// `caller` is the identity the host authenticated for this request.
    pub fn process(
        ledger: &mut Ledger,
        caller: &Pubkey,
        instruction_data: &[u8],
    ) -> ProgramResult {
        // Parse the instruction
        let instruction = LedgerInstruction::unpack(instruction_data)?;

        // Route to appropriate handler
        let result = match instruction {
            LedgerInstruction::Initialize { .. } => {
                msg!("Instruction: Initialize");
                Err(LedgerError::AlreadyInitialized)
            }

            LedgerInstruction::Transfer { recipient, amount } => {
                msg!("Instruction: Transfer");
                transfer::process(ledger, caller, &recipient, amount)
            }

            LedgerInstruction::Approve { spender, amount } => {
                msg!("Instruction: Approve");
                approve::process(ledger, caller, &spender, amount)
            }

            LedgerInstruction::TransferFrom {
                payer,
                recipient,
                amount,
            } => {
                msg!("Instruction: TransferFrom");
                transfer_from::process(ledger, caller, &payer, &recipient, amount)
            }

            LedgerInstruction::MintTo { recipient, amount } => {
                msg!("Instruction: MintTo");
                mint_to::process(ledger, caller, &recipient, amount)
            }

            LedgerInstruction::Burn { account, amount } => {
                msg!("Instruction: Burn");
                burn::process(ledger, caller, &account, amount)
            }

            LedgerInstruction::Revoke { spender } => {
                msg!("Instruction: Revoke");
                revoke::process(ledger, caller, &spender)
            }

            LedgerInstruction::IncreaseAllowance { spender, amount } => {
                msg!("Instruction: IncreaseAllowance");
                adjust_allowance::increase(ledger, caller, &spender, amount)
            }

            LedgerInstruction::DecreaseAllowance { spender, amount } => {
                msg!("Instruction: DecreaseAllowance");
                adjust_allowance::decrease(ledger, caller, &spender, amount)
            }
        };

        result.map_err(|e| {
            msg!("Error: {}", e);
            e.into()
        })
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
