//! Ranking table loading.

use std::path::{Path, PathBuf};

use brandreturns_primitives::RankingRow;
use polars::prelude::*;
use tracing::debug;

use crate::RankingError;

/// File name prefix of the yearly ranking tables.
pub const RANKING_FILE_PREFIX: &str = "brandirectory-ranking-data-global-";

/// Brand name column.
pub const BRAND_COLUMN: &str = "Brand";

/// Current position column.
pub const POSITION_COLUMN: &str = "Position";

/// Previous edition's position column.
pub const PREVIOUS_POSITION_COLUMN: &str = "Previous Position";

/// Path of the ranking table for `year` inside `dir`.
#[must_use]
pub fn ranking_path(dir: &Path, year: i32) -> PathBuf {
    dir.join(format!("{RANKING_FILE_PREFIX}{year}.csv"))
}

/// Load the ranking table for `year` from `dir`.
///
/// # Errors
/// Returns `RankingError::MissingFile` if the year has no table, or any
/// error from [`read_ranking_table`].
pub fn load_rankings(dir: &Path, year: i32) -> Result<Vec<RankingRow>, RankingError> {
    let path = ranking_path(dir, year);
    if !path.is_file() {
        return Err(RankingError::MissingFile { year, path });
    }
    read_ranking_table(&path)
}

/// Read a ranking table.
///
/// `Previous Position` cells that are empty or not numeric (new entries are
/// usually marked `-`) become `None`. Rows without a brand are skipped.
///
/// # Errors
/// Returns `RankingError` if the file cannot be parsed, a required column is
/// missing, or a row's `Position` is not a positive number.
pub fn read_ranking_table(path: &Path) -> Result<Vec<RankingRow>, RankingError> {
    let df = read_csv_as_strings(path)?;
    require_columns(&df, &[BRAND_COLUMN, POSITION_COLUMN, PREVIOUS_POSITION_COLUMN], path)?;

    let parsed = df
        .lazy()
        .select([
            col(BRAND_COLUMN).alias("brand"),
            col(POSITION_COLUMN).alias("raw_position"),
            col(POSITION_COLUMN).cast(DataType::Float64).alias("position"),
            col(PREVIOUS_POSITION_COLUMN).cast(DataType::Float64).alias("previous_position"),
        ])
        .collect()?;

    let brands = parsed.column("brand")?.str()?;
    let raw_positions = parsed.column("raw_position")?.str()?;
    let positions = parsed.column("position")?.f64()?;
    let previous = parsed.column("previous_position")?.f64()?;

    let mut rows = Vec::with_capacity(parsed.height());
    for (((brand, raw), position), previous) in brands
        .into_iter()
        .zip(raw_positions.into_iter())
        .zip(positions.into_iter())
        .zip(previous.into_iter())
    {
        let Some(brand) = brand.map(str::trim).filter(|b| !b.is_empty()) else {
            debug!(path = %path.display(), "skipping ranking row without brand");
            continue;
        };
        let position = position.and_then(to_rank).ok_or_else(|| RankingError::InvalidPosition {
            brand: brand.to_string(),
            value: raw.map(str::to_string),
            path: path.to_path_buf(),
        })?;
        rows.push(RankingRow::new(brand, position, previous.and_then(to_rank)));
    }

    debug!(path = %path.display(), rows = rows.len(), "loaded ranking table");
    Ok(rows)
}

/// Read a headed CSV with every column as a string.
pub(crate) fn read_csv_as_strings(path: &Path) -> Result<DataFrame, RankingError> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    Ok(df)
}

/// Fail with `MissingColumn` unless every name is present.
pub(crate) fn require_columns(
    df: &DataFrame,
    columns: &[&str],
    path: &Path,
) -> Result<(), RankingError> {
    for &column in columns {
        if df.column(column).is_err() {
            return Err(RankingError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

fn to_rank(value: f64) -> Option<u32> {
    (value.is_finite() && value >= 1.0 && value <= f64::from(u32::MAX))
        .then(|| value.round() as u32)
}
