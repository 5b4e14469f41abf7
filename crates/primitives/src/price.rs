//! Monthly price bar definitions.

use serde::{Deserialize, Serialize};

use crate::{Date, Symbol};

/// One month of prices for a single ticker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBar {
    /// First trading day of the month as reported by the provider.
    pub date: Date,
    /// Opening price.
    pub open: f64,
    /// Closing price.
    pub close: f64,
    /// Close adjusted for splits and dividends.
    pub adjclose: f64,
}

impl MonthlyBar {
    /// Create a new bar.
    #[must_use]
    pub const fn new(date: Date, open: f64, close: f64, adjclose: f64) -> Self {
        Self { date, open, close, adjclose }
    }

    /// A bar whose open, close and adjusted close are all `price`.
    #[must_use]
    pub const fn flat(date: Date, price: f64) -> Self {
        Self { date, open: price, close: price, adjclose: price }
    }
}

/// Monthly bars for one ticker over one year window, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Bars in date order.
    pub bars: Vec<MonthlyBar>,
}

impl PriceSeries {
    /// Create a new series, sorting bars by date.
    #[must_use]
    pub fn new(symbol: Symbol, mut bars: Vec<MonthlyBar>) -> Self {
        bars.sort_by_key(|bar| bar.date);
        Self { symbol, bars }
    }

    /// Number of bars.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bars.len()
    }

    /// Check if empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Adjusted closes in date order.
    #[must_use]
    pub fn adjcloses(&self) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.adjclose).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(month: u32) -> Date {
        Date::from_ymd_opt(2023, month, 1).unwrap()
    }

    #[test]
    fn new_sorts_bars() {
        let series = PriceSeries::new(
            Symbol::new("KO"),
            vec![MonthlyBar::flat(date(3), 3.0), MonthlyBar::flat(date(1), 1.0)],
        );
        assert_eq!(series.adjcloses(), vec![1.0, 3.0]);
        assert_eq!(series.len(), 2);
        assert!(!series.is_empty());
    }
}
