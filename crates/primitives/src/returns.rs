//! Return record definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{SelectionMode, Symbol};

/// Returns of a single ticker over one year window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerReturns {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Monthly returns in date order.
    pub monthly_returns: Vec<f64>,
    /// Return over the whole window.
    pub yearly_return: f64,
}

/// Aggregated returns of one series for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyResult {
    /// Ranking year.
    pub year: i32,
    /// Tickers that contributed to the aggregate.
    pub tickers: Vec<Symbol>,
    /// Mean monthly returns by position.
    pub monthly_returns: Vec<f64>,
    /// Mean of the contributing tickers' yearly returns.
    pub yearly_return: f64,
}

/// What a result series tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesKind {
    /// A brand cohort drawn with the given selection mode.
    Cohort(SelectionMode),
    /// The market benchmark index.
    Benchmark,
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cohort(mode) => write!(f, "cohort:{mode}"),
            Self::Benchmark => write!(f, "benchmark"),
        }
    }
}

/// Per-year results for one series, in year order.
///
/// Years for which no ticker contributed are absent rather than zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResult {
    /// What the series tracks.
    pub kind: SeriesKind,
    /// Display label.
    pub label: String,
    /// Recorded years.
    pub years: Vec<YearlyResult>,
}

impl SeriesResult {
    /// Create a new series result, sorting years.
    #[must_use]
    pub fn new(kind: SeriesKind, label: impl Into<String>, mut years: Vec<YearlyResult>) -> Self {
        years.sort_by_key(|y| y.year);
        Self { kind, label: label.into(), years }
    }

    /// Result for a specific year.
    #[must_use]
    pub fn get(&self, year: i32) -> Option<&YearlyResult> {
        self.years.iter().find(|y| y.year == year)
    }

    /// Number of recorded years.
    #[must_use]
    pub const fn years_covered(&self) -> usize {
        self.years.len()
    }

    /// Yearly returns of recorded years in year order.
    #[must_use]
    pub fn yearly_returns(&self) -> Vec<f64> {
        self.years.iter().map(|y| y.yearly_return).collect()
    }

    /// All monthly returns of recorded years, concatenated in year order.
    #[must_use]
    pub fn monthly_returns(&self) -> Vec<f64> {
        self.years.iter().flat_map(|y| y.monthly_returns.iter().copied()).collect()
    }
}
