//! Token Metadata
//!
//! Display information fixed at construction.
//!
//! # Decimals
//!
//! `decimals` only affects how amounts are shown to people.
//! All ledger arithmetic works on whole integer base units.
//!
//! ```text
//! decimals = 8
//! 1 token       = 100_000_000 base units
//! 5_000_000     = "0.05"
//! ```

/// Immutable name, symbol and display precision of the token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenMetadata {
    /// Human-readable token name, e.g. "Bucks Bunny".
    pub name: String,

    /// Short ticker symbol, e.g. "BKB".
    pub symbol: String,

    /// Number of fractional digits used for display.
    pub decimals: u8,
}

impl TokenMetadata {
    /// Create metadata from its three parts.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Render a base-unit amount as a decimal string.
    ///
    /// Trailing fractional zeros are trimmed, and a whole number is
    /// shown without a decimal point.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let meta = TokenMetadata::new("Bucks Bunny", "BKB", 8);
    /// assert_eq!(meta.format_amount(5_000_000), "0.05");
    /// assert_eq!(meta.format_amount(100_000_000), "1");
    /// ```
    pub fn format_amount(&self, amount: u64) -> String {
        let decimals = self.decimals as usize;
        if decimals == 0 {
            return amount.to_string();
        }

        // Left-pad so there is always at least one whole digit
        let digits = format!("{:0>width$}", amount, width = decimals + 1);
        let (whole, fraction) = digits.split_at(digits.len() - decimals);
        let fraction = fraction.trim_end_matches('0');

        if fraction.is_empty() {
            whole.to_string()
        } else {
            format!("{}.{}", whole, fraction)
        }
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
