//! Ticker search trait definitions.

use std::future::Future;

use brandreturns_primitives::Symbol;

/// Errors that can occur while searching for a ticker.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The search request failed.
    #[error("ticker search for {query:?} failed: {message}")]
    Request {
        /// Query text.
        query: String,
        /// Provider error message.
        message: String,
    },

    /// The search client could not be created.
    #[error("search client unavailable: {0}")]
    Client(String),
}

/// A candidate listing returned by a ticker search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Provider exchange code.
    pub exchange: String,
}

impl Listing {
    /// Create a new listing.
    #[must_use]
    pub fn new(symbol: impl Into<Symbol>, exchange: impl Into<String>) -> Self {
        Self { symbol: symbol.into(), exchange: exchange.into() }
    }
}

/// Exchanges a listing may come from, in order of preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeAllowlist {
    /// Major exchanges tried first.
    pub preferred: Vec<String>,
    /// Over-the-counter venues tried when no preferred listing exists.
    pub fallback: Vec<String>,
}

impl Default for ExchangeAllowlist {
    fn default() -> Self {
        let codes = |codes: &[&str]| codes.iter().map(|c| (*c).to_string()).collect();
        Self {
            // NYSE, Nasdaq tiers, NYSE American, NYSE Arca
            preferred: codes(&["NYQ", "NMS", "NGM", "NCM", "ASE", "PCX"]),
            // OTC Markets tiers
            fallback: codes(&["PNK", "OQX", "OQB", "OEM"]),
        }
    }
}

impl ExchangeAllowlist {
    /// Pick the first candidate on a preferred exchange, else the first on a
    /// fallback exchange.
    ///
    /// Candidate order is the provider's relevance order.
    #[must_use]
    pub fn pick(&self, candidates: &[Listing]) -> Option<Symbol> {
        let on = |venues: &[String]| {
            candidates
                .iter()
                .find(|listing| venues.iter().any(|v| v.eq_ignore_ascii_case(&listing.exchange)))
                .map(|listing| listing.symbol.clone())
        };
        on(&self.preferred).or_else(|| on(&self.fallback))
    }
}

/// Search service mapping a company name to candidate listings.
pub trait TickerSearch {
    /// Candidate listings for `query`, most relevant first.
    ///
    /// # Errors
    /// Returns `SearchError` if the request fails.
    fn search(&self, query: &str) -> impl Future<Output = Result<Vec<Listing>, SearchError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_prefers_major_exchange_over_relevance() {
        let candidates = vec![
            Listing::new("NSRGY", "PNK"),
            Listing::new("NESN.SW", "EBS"),
            Listing::new("NSRGF", "NYQ"),
        ];
        assert_eq!(ExchangeAllowlist::default().pick(&candidates), Some(Symbol::new("NSRGF")));
    }

    #[test]
    fn pick_falls_back_to_otc() {
        let candidates = vec![Listing::new("7203.T", "JPX"), Listing::new("TOYOF", "PNK")];
        assert_eq!(ExchangeAllowlist::default().pick(&candidates), Some(Symbol::new("TOYOF")));
    }

    #[test]
    fn pick_none_when_no_allowed_exchange() {
        let candidates = vec![Listing::new("005930.KS", "KSC")];
        assert_eq!(ExchangeAllowlist::default().pick(&candidates), None);
        assert_eq!(ExchangeAllowlist::default().pick(&[]), None);
    }

    #[test]
    fn search_error_display() {
        let err = SearchError::Request { query: "Coca-Cola".to_string(), message: "429".to_string() };
        assert!(err.to_string().contains("Coca-Cola"));
    }
}
