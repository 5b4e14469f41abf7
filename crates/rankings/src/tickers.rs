//! Brand to ticker lookup table.

use std::{collections::HashMap, fs::File, path::Path};

use brandreturns_primitives::{Cohort, NOT_AVAILABLE, Symbol};
use polars::prelude::*;
use tracing::{debug, warn};

use crate::{
    BRAND_COLUMN, RankingError,
    loader::{read_csv_as_strings, require_columns},
};

/// Ticker column of the lookup table.
pub const TICKER_COLUMN: &str = "Ticker";

/// Static mapping from brand name to listed ticker.
///
/// Brands whose ticker cell is empty or a placeholder are not stored.
#[derive(Debug, Clone, Default)]
pub struct TickerMap {
    tickers: HashMap<String, Symbol>,
}

impl TickerMap {
    /// Build a map from `(brand, ticker cell)` pairs.
    #[must_use]
    pub fn from_pairs<B, T>(pairs: impl IntoIterator<Item = (B, T)>) -> Self
    where
        B: Into<String>,
        T: AsRef<str>,
    {
        let tickers = pairs
            .into_iter()
            .filter_map(|(brand, cell)| Symbol::parse_cell(cell.as_ref()).map(|s| (brand.into(), s)))
            .collect();
        Self { tickers }
    }

    /// Load a `Brand,Ticker` CSV table.
    ///
    /// # Errors
    /// Returns `RankingError` if the file cannot be read or lacks a column.
    pub fn load(path: &Path) -> Result<Self, RankingError> {
        let df = read_csv_as_strings(path)?;
        require_columns(&df, &[BRAND_COLUMN, TICKER_COLUMN], path)?;

        let brands = df.column(BRAND_COLUMN)?.str()?;
        let tickers = df.column(TICKER_COLUMN)?.str()?;
        let map = Self::from_pairs(
            brands
                .into_iter()
                .zip(tickers.into_iter())
                .filter_map(|(brand, ticker)| Some((brand?.trim().to_string(), ticker?))),
        );

        debug!(path = %path.display(), rows = df.height(), resolved = map.len(), "loaded ticker map");
        Ok(map)
    }

    /// Ticker for a brand, if resolved.
    #[must_use]
    pub fn get(&self, brand: &str) -> Option<&Symbol> {
        self.tickers.get(brand)
    }

    /// Number of resolved brands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }

    /// Tickers of a cohort's brands, in cohort order.
    ///
    /// Brands without a ticker are dropped, so the result may be shorter
    /// than the cohort.
    #[must_use]
    pub fn resolve(&self, cohort: &Cohort) -> Vec<Symbol> {
        cohort
            .brands
            .iter()
            .filter_map(|brand| {
                let symbol = self.get(brand).cloned();
                if symbol.is_none() {
                    warn!(year = cohort.year, brand = %brand, "no ticker for brand, excluded");
                }
                symbol
            })
            .collect()
    }

    /// Write `(brand, ticker)` rows as a `Brand,Ticker` CSV, with `N/A` for
    /// unresolved brands.
    ///
    /// # Errors
    /// Returns `RankingError` if the file cannot be written.
    pub fn write_csv(rows: &[(String, Option<Symbol>)], path: &Path) -> Result<(), RankingError> {
        let brands: Vec<&str> = rows.iter().map(|(brand, _)| brand.as_str()).collect();
        let tickers: Vec<&str> = rows
            .iter()
            .map(|(_, ticker)| ticker.as_ref().map_or(NOT_AVAILABLE, Symbol::as_str))
            .collect();

        let mut df = DataFrame::new(vec![
            Column::new(BRAND_COLUMN.into(), brands),
            Column::new(TICKER_COLUMN.into(), tickers),
        ])?;
        let mut file = File::create(path)?;
        CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
        Ok(())
    }
}
