//! Yearly comparison pipeline.

use brandreturns_primitives::{
    SelectionMode, SeriesKind, SeriesResult, Symbol, TickerReturns, YearWindow, YearlyResult,
};
use brandreturns_rankings::{TickerMap, load_cohort};
use brandreturns_traits::PriceSource;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{ModelError, PerformanceSummary, StudyConfig, aggregate_year, ticker_returns};

/// Results of a study run.
#[derive(Debug, Clone, Serialize)]
pub struct StudyResult {
    /// First ranking year.
    pub start_year: i32,
    /// Last ranking year.
    pub end_year: i32,
    /// One entry per enabled series, cohorts first, benchmark last.
    pub series: Vec<SeriesResult>,
}

impl StudyResult {
    /// Performance summary of every series, in series order.
    #[must_use]
    pub fn summaries(&self) -> Vec<PerformanceSummary> {
        self.series.iter().map(PerformanceSummary::from_series).collect()
    }

    /// Series of a given kind.
    #[must_use]
    pub fn get(&self, kind: SeriesKind) -> Option<&SeriesResult> {
        self.series.iter().find(|s| s.kind == kind)
    }
}

/// Brand cohort versus benchmark study over a span of ranking years.
///
/// Every year is processed independently: load the ranking table, select a
/// cohort, resolve tickers, fetch each ticker's window, aggregate.
#[derive(Debug)]
pub struct Study<S> {
    config: StudyConfig,
    tickers: TickerMap,
    source: S,
}

impl<S: PriceSource> Study<S> {
    /// Create a study, validating the configuration.
    ///
    /// # Errors
    /// Returns `ModelError::InvalidConfig` if the configuration is unusable.
    pub fn new(config: StudyConfig, tickers: TickerMap, source: S) -> Result<Self, ModelError> {
        config.validate()?;
        Ok(Self { config, tickers, source })
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &StudyConfig {
        &self.config
    }

    /// Run every enabled series.
    ///
    /// # Errors
    /// Returns `ModelError` if a ranking table is missing or malformed, or a
    /// price request fails. Either aborts the whole run.
    pub async fn run(&self) -> Result<StudyResult, ModelError> {
        let mut series = Vec::new();
        for mode in self.config.series.cohort_modes() {
            series.push(self.cohort_series(mode).await?);
        }
        if self.config.series.benchmark {
            series.push(self.benchmark_series().await?);
        }
        Ok(StudyResult { start_year: self.config.start_year, end_year: self.config.end_year, series })
    }

    /// Yearly results of the cohorts selected with `mode`.
    ///
    /// # Errors
    /// Returns `ModelError` on a missing ranking table or failed fetch.
    pub async fn cohort_series(&self, mode: SelectionMode) -> Result<SeriesResult, ModelError> {
        let kind = SeriesKind::Cohort(mode);
        let label = self.config.label(kind);
        let mut years = Vec::new();

        for year in self.config.years() {
            let cohort = load_cohort(
                &self.config.rankings_dir,
                year,
                mode,
                self.config.cohort_size,
                self.config.missing_previous_position,
            )?;
            let symbols = self.tickers.resolve(&cohort);
            info!(year, series = %label, tickers = ?symbols, "resolved cohort");

            if symbols.is_empty() {
                warn!(year, series = %label, "no resolvable tickers, year skipped");
                continue;
            }
            if let Some(result) = self.basket_year(&symbols, year, &label).await? {
                years.push(result);
            }
        }

        Ok(SeriesResult::new(kind, label, years))
    }

    /// Yearly results of the benchmark index.
    ///
    /// # Errors
    /// Returns `ModelError` on a failed fetch.
    pub async fn benchmark_series(&self) -> Result<SeriesResult, ModelError> {
        let kind = SeriesKind::Benchmark;
        let label = self.config.label(kind);
        let symbols = [Symbol::new(self.config.benchmark.symbol.trim())];
        let mut years = Vec::new();

        for year in self.config.years() {
            if let Some(result) = self.basket_year(&symbols, year, &label).await? {
                years.push(result);
            }
        }

        Ok(SeriesResult::new(kind, label, years))
    }

    /// Aggregate result of `symbols` for one year, `None` if none contributed.
    async fn basket_year(
        &self,
        symbols: &[Symbol],
        year: i32,
        label: &str,
    ) -> Result<Option<YearlyResult>, ModelError> {
        let mut contributions = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            if let Some(returns) = self.ticker_year(symbol, year).await? {
                contributions.push(returns);
            }
        }

        let result = aggregate_year(year, &contributions);
        match &result {
            Some(r) => info!(
                year,
                series = %label,
                contributors = r.tickers.len(),
                yearly_return = r.yearly_return,
                monthly_returns = ?r.monthly_returns,
                "yearly result"
            ),
            None => warn!(year, series = %label, "no ticker had a full year of data, year skipped"),
        }
        Ok(result)
    }

    /// Returns of one ticker over one year's window.
    async fn ticker_year(
        &self,
        symbol: &Symbol,
        year: i32,
    ) -> Result<Option<TickerReturns>, ModelError> {
        let window = YearWindow::new(year, self.config.window);
        let series = self.source.monthly_bars(symbol, window).await?;
        debug!(%symbol, year, bars = series.len(), "fetched monthly bars");
        Ok(ticker_returns(&series, self.config.formula))
    }
}
