//! Yahoo Finance monthly price history.

use std::fmt;

use brandreturns_primitives::{PriceSeries, Symbol, YearWindow};
use brandreturns_traits::{PriceSource, SourceError};
use tracing::debug;
use yahoo_finance_api as yahoo;

use crate::{RawBar, bars_in_window, window_bounds};

/// Quote interval requested from the provider.
pub const MONTHLY_INTERVAL: &str = "1mo";

/// Monthly bars from Yahoo Finance quote history.
pub struct YahooPriceSource {
    connector: yahoo::YahooConnector,
}

impl fmt::Debug for YahooPriceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YahooPriceSource").field("interval", &MONTHLY_INTERVAL).finish_non_exhaustive()
    }
}

impl YahooPriceSource {
    /// Create a source with a fresh provider connection.
    ///
    /// # Errors
    /// Returns `SourceError::Client` if the HTTP client cannot be built.
    pub fn new() -> Result<Self, SourceError> {
        let connector = yahoo::YahooConnector::new().map_err(|e| SourceError::Client(e.to_string()))?;
        Ok(Self { connector })
    }
}

impl PriceSource for YahooPriceSource {
    async fn monthly_bars(
        &self,
        symbol: &Symbol,
        window: YearWindow,
    ) -> Result<PriceSeries, SourceError> {
        let (start, end) = window_bounds(window)?;
        let response = self
            .connector
            .get_quote_history_interval(symbol.as_str(), start, end, MONTHLY_INTERVAL)
            .await
            .map_err(|e| SourceError::Fetch {
                symbol: symbol.to_string(),
                year: window.year,
                message: e.to_string(),
            })?;
        let quotes = response
            .quotes()
            .map_err(|e| SourceError::Malformed { symbol: symbol.to_string(), message: e.to_string() })?;

        let raw = quotes.iter().filter_map(|q| {
            Some(RawBar {
                timestamp: i64::try_from(q.timestamp).ok()?,
                open: q.open,
                close: q.close,
                adjclose: q.adjclose,
            })
        });
        let bars = bars_in_window(raw, window);
        debug!(%symbol, year = window.year, quotes = quotes.len(), bars = bars.len(), "monthly quotes");

        Ok(PriceSeries::new(symbol.clone(), bars))
    }
}
