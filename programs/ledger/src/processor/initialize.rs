//! Initialize Processor
//!
//! Builds a new ledger from an Initialize instruction.

use crate::state::{Ledger, TokenMetadata};
use solana_program::pubkey::Pubkey;

/// Process Initialize
///
/// The caller becomes the owner and receives the whole initial supply.
/// All inputs are accepted as given.
pub fn process(
    caller: &Pubkey,
    initial_supply: u64,
    decimals: u8,
    name: String,
    symbol: String,
) -> Ledger {
    Ledger::with_metadata(
        *caller,
        initial_supply,
        TokenMetadata {
            name,
            symbol,
            decimals,
        },
    )
}
