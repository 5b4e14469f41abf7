//! Study configuration.

use std::{ops::RangeInclusive, path::PathBuf};

use brandreturns_primitives::{ReturnFormula, SelectionMode, SeriesKind, Symbol, WindowConvention};
use brandreturns_rankings::DEFAULT_MISSING_PREVIOUS;
use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Market index the cohorts are compared against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Provider symbol of the index.
    pub symbol: String,
    /// Display label.
    pub label: String,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self { symbol: "^GSPC".to_string(), label: "S&P 500".to_string() }
    }
}

/// Which series a study computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesSwitches {
    /// Best-ranked brands.
    pub top_brands: bool,
    /// Largest raw climb.
    pub most_improved_exact: bool,
    /// Largest relative climb.
    pub most_improved_weighted: bool,
    /// Benchmark index.
    pub benchmark: bool,
}

impl Default for SeriesSwitches {
    fn default() -> Self {
        Self { top_brands: true, most_improved_exact: true, most_improved_weighted: true, benchmark: true }
    }
}

impl SeriesSwitches {
    /// Enabled cohort selection modes, in report order.
    #[must_use]
    pub fn cohort_modes(&self) -> Vec<SelectionMode> {
        SelectionMode::ALL
            .into_iter()
            .filter(|mode| match mode {
                SelectionMode::Plain => self.top_brands,
                SelectionMode::MostImprovedExact => self.most_improved_exact,
                SelectionMode::MostImprovedWeighted => self.most_improved_weighted,
            })
            .collect()
    }
}

/// Parameters of one comparison run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    /// First ranking year, inclusive.
    pub start_year: i32,
    /// Last ranking year, inclusive.
    pub end_year: i32,
    /// Directory holding the yearly ranking tables.
    pub rankings_dir: PathBuf,
    /// `Brand,Ticker` lookup table.
    pub ticker_map: PathBuf,
    /// Directory charts and the report are written to.
    pub output_dir: PathBuf,
    /// Brands per cohort.
    pub cohort_size: usize,
    /// Previous position assumed for brands new to the ranking.
    pub missing_previous_position: u32,
    /// Months fetched per year.
    pub window: WindowConvention,
    /// Monthly return formula.
    pub formula: ReturnFormula,
    /// Benchmark index.
    pub benchmark: BenchmarkConfig,
    /// Enabled series.
    pub series: SeriesSwitches,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            start_year: 2022,
            end_year: 2023,
            rankings_dir: PathBuf::from("BrandData"),
            ticker_map: PathBuf::from("BrandData/CompanyToTicker_with_tickers.csv"),
            output_dir: PathBuf::from("output"),
            cohort_size: 10,
            missing_previous_position: DEFAULT_MISSING_PREVIOUS,
            window: WindowConvention::default(),
            formula: ReturnFormula::default(),
            benchmark: BenchmarkConfig::default(),
            series: SeriesSwitches::default(),
        }
    }
}

impl StudyConfig {
    /// Check the configuration for values the pipeline cannot run with.
    ///
    /// # Errors
    /// Returns `ModelError::InvalidConfig` describing the first problem found.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.start_year > self.end_year {
            return Err(ModelError::InvalidConfig(format!(
                "start_year {} is after end_year {}",
                self.start_year, self.end_year
            )));
        }
        if self.cohort_size == 0 {
            return Err(ModelError::InvalidConfig("cohort_size must be positive".to_string()));
        }
        if self.missing_previous_position == 0 {
            return Err(ModelError::InvalidConfig(
                "missing_previous_position must be positive".to_string(),
            ));
        }
        if self.series.benchmark && Symbol::parse_cell(&self.benchmark.symbol).is_none() {
            return Err(ModelError::InvalidConfig("benchmark symbol is empty".to_string()));
        }
        Ok(())
    }

    /// Ranking years covered, in order.
    #[must_use]
    pub const fn years(&self) -> RangeInclusive<i32> {
        self.start_year..=self.end_year
    }

    /// Number of ranking years covered.
    #[must_use]
    pub fn span_years(&self) -> usize {
        usize::try_from(self.end_year - self.start_year + 1).unwrap_or(0)
    }

    /// Display label for a series.
    #[must_use]
    pub fn label(&self, kind: SeriesKind) -> String {
        let n = self.cohort_size;
        match kind {
            SeriesKind::Cohort(SelectionMode::Plain) => format!("Top {n} Brands"),
            SeriesKind::Cohort(SelectionMode::MostImprovedExact) => {
                format!("Top {n} Most Improved (Exact)")
            }
            SeriesKind::Cohort(SelectionMode::MostImprovedWeighted) => {
                format!("Top {n} Most Improved (Weighted)")
            }
            SeriesKind::Benchmark => self.benchmark.label.clone(),
        }
    }
}
