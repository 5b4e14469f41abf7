//! Ticker symbol definitions.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Placeholder written by lookup tools when no listing was found.
pub const NOT_AVAILABLE: &str = "N/A";

/// Stock ticker symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
pub struct Symbol(pub String);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Parse a raw lookup-table cell into a symbol.
    ///
    /// Returns `None` for empty cells and the placeholders spreadsheets leave
    /// behind for unresolved brands (`N/A`, `NaN`, `nan`).
    #[must_use]
    pub fn parse_cell(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case(NOT_AVAILABLE)
            || matches!(trimmed, "NaN" | "nan")
        {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    /// Get the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn symbol_from_str() {
        let sym: Symbol = "AAPL".into();
        assert_eq!(sym.as_str(), "AAPL");
        assert_eq!(sym.to_string(), "AAPL");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("N/A")]
    #[case("n/a")]
    #[case("NaN")]
    #[case("nan")]
    fn parse_cell_rejects_placeholders(#[case] raw: &str) {
        assert_eq!(Symbol::parse_cell(raw), None);
    }

    #[rstest]
    #[case("NAN")]
    #[case("NA")]
    fn parse_cell_keeps_listed_tickers(#[case] raw: &str) {
        assert_eq!(Symbol::parse_cell(raw), Some(Symbol::new(raw)));
    }

    #[test]
    fn parse_cell_trims() {
        assert_eq!(Symbol::parse_cell(" MSFT "), Some(Symbol::new("MSFT")));
        assert_eq!(Symbol::parse_cell("^GSPC"), Some(Symbol::new("^GSPC")));
    }
}
