//! Cohort aggregation.

use brandreturns_math::{mean, positional_mean};
use brandreturns_primitives::{TickerReturns, YearlyResult};

/// Combine the contributing tickers of one year into a cohort result.
///
/// Monthly returns are averaged position by position; the yearly return is
/// the mean of the tickers' yearly returns.
///
/// # Returns
/// `None` when no ticker contributed, so that the year is left out of the
/// series instead of being recorded as a zero return.
#[must_use]
pub fn aggregate_year(year: i32, contributions: &[TickerReturns]) -> Option<YearlyResult> {
    if contributions.is_empty() {
        return None;
    }

    let monthly: Vec<&[f64]> = contributions.iter().map(|c| c.monthly_returns.as_slice()).collect();
    let yearly: Vec<f64> = contributions.iter().map(|c| c.yearly_return).collect();

    Some(YearlyResult {
        year,
        tickers: contributions.iter().map(|c| c.symbol.clone()).collect(),
        monthly_returns: positional_mean(&monthly),
        yearly_return: mean(&yearly),
    })
}
