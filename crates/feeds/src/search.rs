//! Yahoo Finance company-name search.

use std::fmt;

use brandreturns_primitives::Symbol;
use brandreturns_traits::{Listing, SearchError, TickerSearch};
use tracing::debug;
use yahoo_finance_api as yahoo;

/// Ticker search backed by the Yahoo Finance search endpoint.
pub struct YahooTickerSearch {
    connector: yahoo::YahooConnector,
}

impl fmt::Debug for YahooTickerSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YahooTickerSearch").finish_non_exhaustive()
    }
}

impl YahooTickerSearch {
    /// Create a search client with a fresh provider connection.
    ///
    /// # Errors
    /// Returns `SearchError::Client` if the HTTP client cannot be built.
    pub fn new() -> Result<Self, SearchError> {
        let connector = yahoo::YahooConnector::new().map_err(|e| SearchError::Client(e.to_string()))?;
        Ok(Self { connector })
    }
}

/// Listing for a search hit, `None` when the hit carries no symbol.
fn listing(symbol: &str, exchange: &str) -> Option<Listing> {
    Symbol::parse_cell(symbol).map(|symbol| Listing::new(symbol, exchange.trim()))
}

impl TickerSearch for YahooTickerSearch {
    async fn search(&self, query: &str) -> Result<Vec<Listing>, SearchError> {
        let result = self
            .connector
            .search_ticker(query)
            .await
            .map_err(|e| SearchError::Request { query: query.to_string(), message: e.to_string() })?;

        let listings: Vec<Listing> =
            result.quotes.iter().filter_map(|item| listing(&item.symbol, &item.exchange)).collect();
        debug!(query, hits = result.quotes.len(), listings = listings.len(), "ticker search");
        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_without_symbol_is_skipped() {
        assert_eq!(listing(" TM ", " NYQ "), Some(Listing::new("TM", "NYQ")));
        assert_eq!(listing("", "NYQ"), None);
    }
}
