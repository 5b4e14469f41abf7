//! Price history source trait definitions.

use std::future::Future;

use brandreturns_primitives::{PriceSeries, Symbol, YearWindow};

/// Errors that can occur while fetching price history.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The provider request failed.
    #[error("fetching {symbol} for {year} failed: {message}")]
    Fetch {
        /// Ticker requested.
        symbol: String,
        /// Ranking year requested.
        year: i32,
        /// Provider error message.
        message: String,
    },

    /// The requested window cannot be expressed as provider timestamps.
    #[error("invalid window for {year}: {message}")]
    InvalidWindow {
        /// Ranking year requested.
        year: i32,
        /// Conversion error message.
        message: String,
    },

    /// The provider client could not be created.
    #[error("price client unavailable: {0}")]
    Client(String),

    /// The provider returned data that cannot be interpreted.
    #[error("malformed data for {symbol}: {message}")]
    Malformed {
        /// Ticker requested.
        symbol: String,
        /// Description.
        message: String,
    },
}

/// Source of monthly price bars.
///
/// Implementations return every bar they have inside the window, oldest
/// first. A short or empty series is not an error; a failed request is.
pub trait PriceSource {
    /// Fetch monthly bars for `symbol` inside `window`.
    ///
    /// # Errors
    /// Returns `SourceError` if the provider request fails.
    fn monthly_bars(
        &self,
        symbol: &Symbol,
        window: YearWindow,
    ) -> impl Future<Output = Result<PriceSeries, SourceError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_display() {
        let err = SourceError::Fetch {
            symbol: "AAPL".to_string(),
            year: 2022,
            message: "timeout".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("AAPL") && text.contains("2022") && text.contains("timeout"));
    }
}
