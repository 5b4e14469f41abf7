//! Whole-span performance figures.

use brandreturns_math::{MONTHS_PER_YEAR, annualized_return, net_compounded_return, risk_adjusted_ratio};
use brandreturns_primitives::{SeriesKind, SeriesResult};
use serde::Serialize;

/// Net, annualized and risk-adjusted performance of one series.
///
/// Undefined figures are `NaN`, never zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceSummary {
    /// What the series tracks.
    pub kind: SeriesKind,
    /// Display label.
    pub label: String,
    /// Number of years with a recorded result.
    pub years_covered: usize,
    /// Compounded return over recorded years.
    pub net_return: f64,
    /// Per-year rate compounding to the net return.
    pub annualized_return: f64,
    /// Annualized mean-over-deviation of all recorded monthly returns.
    pub risk_adjusted_ratio: f64,
}

impl PerformanceSummary {
    /// Reduce a series' recorded years.
    #[must_use]
    pub fn from_series(series: &SeriesResult) -> Self {
        let net_return = net_compounded_return(&series.yearly_returns());
        Self {
            kind: series.kind,
            label: series.label.clone(),
            years_covered: series.years_covered(),
            net_return,
            annualized_return: annualized_return(net_return, series.years_covered()),
            risk_adjusted_ratio: risk_adjusted_ratio(&series.monthly_returns(), MONTHS_PER_YEAR),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use brandreturns_primitives::{Symbol, YearlyResult};

    use super::*;

    fn year(year: i32, monthly: Vec<f64>, yearly: f64) -> YearlyResult {
        YearlyResult { year, tickers: vec![Symbol::new("^GSPC")], monthly_returns: monthly, yearly_return: yearly }
    }

    #[test]
    fn compounds_recorded_years() {
        let series = SeriesResult::new(
            SeriesKind::Benchmark,
            "S&P 500",
            vec![year(2022, vec![0.02, -0.01], 0.1), year(2023, vec![0.03, 0.01], -0.1)],
        );
        let summary = PerformanceSummary::from_series(&series);

        assert_eq!(summary.years_covered, 2);
        assert_relative_eq!(summary.net_return, -0.01, epsilon = 1e-12);
        assert_relative_eq!(summary.annualized_return, 0.99_f64.sqrt() - 1.0, epsilon = 1e-12);
        assert!(summary.risk_adjusted_ratio > 0.0);
    }

    #[test]
    fn empty_series_is_undefined_not_zero() {
        let series = SeriesResult::new(SeriesKind::Benchmark, "S&P 500", Vec::new());
        let summary = PerformanceSummary::from_series(&series);

        assert_eq!(summary.years_covered, 0);
        assert_eq!(summary.net_return, 0.0);
        assert!(summary.annualized_return.is_nan());
        assert!(summary.risk_adjusted_ratio.is_nan());
    }
}
