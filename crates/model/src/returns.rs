//! Per-ticker return computation.

use brandreturns_primitives::{MonthlyBar, PriceSeries, ReturnFormula, TickerReturns};
use tracing::warn;

/// Fewest monthly bars a ticker-year needs to be used at all.
pub const MIN_MONTHLY_BARS: usize = 12;

/// Monthly returns of consecutive bars.
///
/// Close-to-close yields one return fewer than there are bars; open-to-close
/// yields one per bar.
#[must_use]
pub fn monthly_returns(bars: &[MonthlyBar], formula: ReturnFormula) -> Vec<f64> {
    match formula {
        ReturnFormula::CloseToClose => {
            bars.windows(2).map(|pair| pair[1].adjclose / pair[0].adjclose - 1.0).collect()
        }
        ReturnFormula::OpenToClose => bars.iter().map(|bar| bar.close / bar.open - 1.0).collect(),
    }
}

/// Monthly and whole-window returns of one ticker-year.
///
/// The yearly return compares the last adjusted close with the first.
///
/// # Returns
/// `None` when the series has fewer than [`MIN_MONTHLY_BARS`] bars; such a
/// ticker-year is left out of its cohort rather than partially used.
#[must_use]
pub fn ticker_returns(series: &PriceSeries, formula: ReturnFormula) -> Option<TickerReturns> {
    if series.len() < MIN_MONTHLY_BARS {
        warn!(symbol = %series.symbol, bars = series.len(), "too few monthly bars, discarded");
        return None;
    }
    let first = series.bars.first()?;
    let last = series.bars.last()?;

    Some(TickerReturns {
        symbol: series.symbol.clone(),
        monthly_returns: monthly_returns(&series.bars, formula),
        yearly_return: last.adjclose / first.adjclose - 1.0,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use brandreturns_primitives::{Date, Symbol};
    use rstest::rstest;

    use super::*;

    fn bars(closes: &[f64]) -> Vec<MonthlyBar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                let date = Date::from_ymd_opt(2020 + (i / 12) as i32, (i % 12) as u32 + 1, 1).unwrap();
                MonthlyBar::new(date, close * 0.5, close, close)
            })
            .collect()
    }

    #[test]
    fn close_to_close_compares_consecutive_months() {
        let returns = monthly_returns(&bars(&[100.0, 110.0, 99.0]), ReturnFormula::CloseToClose);
        assert_eq!(returns.len(), 2);
        assert_relative_eq!(returns[0], 0.1, epsilon = 1e-12);
        assert_relative_eq!(returns[1], -0.1, epsilon = 1e-12);
    }

    #[test]
    fn open_to_close_uses_each_bar() {
        // opens are half the close in the fixture
        let returns = monthly_returns(&bars(&[100.0, 110.0, 99.0]), ReturnFormula::OpenToClose);
        assert_eq!(returns, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn formulas_differ_on_same_bars() {
        let series = bars(&[100.0, 120.0]);
        assert_ne!(
            monthly_returns(&series, ReturnFormula::CloseToClose),
            monthly_returns(&series, ReturnFormula::OpenToClose)
        );
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(11)]
    fn short_series_discarded(#[case] n: usize) {
        let series = PriceSeries::new(Symbol::new("X"), bars(&vec![100.0; n]));
        assert!(ticker_returns(&series, ReturnFormula::CloseToClose).is_none());
        assert!(ticker_returns(&series, ReturnFormula::OpenToClose).is_none());
    }

    #[test]
    fn full_prior_december_window() {
        let mut closes = vec![100.0];
        closes.extend((1..=12).map(|i| 100.0 + f64::from(i)));
        let series = PriceSeries::new(Symbol::new("X"), bars(&closes));

        let result = ticker_returns(&series, ReturnFormula::CloseToClose).unwrap();
        assert_eq!(result.monthly_returns.len(), 12);
        assert_relative_eq!(result.yearly_return, 0.12, epsilon = 1e-12);
        assert_eq!(result.symbol, Symbol::new("X"));
    }

    #[test]
    fn twelve_bars_kept() {
        let series = PriceSeries::new(Symbol::new("X"), bars(&[50.0; 12]));
        let result = ticker_returns(&series, ReturnFormula::OpenToClose).unwrap();
        assert_eq!(result.monthly_returns.len(), 12);
        assert_eq!(result.yearly_return, 0.0);
    }
}
