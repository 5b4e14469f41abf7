//! Brand to ticker resolution through a search service.

use std::time::Duration;

use brandreturns_primitives::Symbol;
use brandreturns_traits::{ExchangeAllowlist, SearchError, TickerSearch};
use tracing::{info, warn};

/// Pause between consecutive search requests.
pub const DEFAULT_LOOKUP_PAUSE: Duration = Duration::from_millis(500);

/// Brands paired with their resolved ticker, in input order.
pub type ResolvedBrands = Vec<(String, Option<Symbol>)>;

/// A search failed part way through a lookup.
#[derive(Debug, thiserror::Error)]
#[error("ticker lookup stopped after {count} brands: {source}", count = .resolved.len())]
pub struct LookupError {
    /// Brands resolved before the failed search.
    pub resolved: ResolvedBrands,
    /// The failed search.
    #[source]
    pub source: SearchError,
}

/// Resolve each brand to a listed ticker.
///
/// Queries run one at a time with `pause` between them, as the search
/// provider throttles bursts. Brands without a listing on an allowed
/// exchange map to `None`.
///
/// # Errors
/// Returns a [`LookupError`] on the first failed search. It keeps the brands
/// resolved before it so they can still be written out.
pub async fn resolve_brands<S: TickerSearch>(
    brands: &[String],
    search: &S,
    allowlist: &ExchangeAllowlist,
    pause: Duration,
) -> Result<ResolvedBrands, LookupError> {
    let mut resolved = Vec::with_capacity(brands.len());

    for (i, brand) in brands.iter().enumerate() {
        if i > 0 && !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }

        let candidates = match search.search(brand).await {
            Ok(candidates) => candidates,
            Err(source) => return Err(LookupError { resolved, source }),
        };
        let symbol = allowlist.pick(&candidates);
        match &symbol {
            Some(symbol) => info!(index = i, brand = %brand, ticker = %symbol, "resolved ticker"),
            None => warn!(index = i, brand = %brand, candidates = candidates.len(), "no listed ticker"),
        }
        resolved.push((brand.clone(), symbol));
    }

    Ok(resolved)
}
