//! Brand universe across ranking editions.

use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

use polars::prelude::*;
use tracing::info;

use crate::{
    BRAND_COLUMN, RANKING_FILE_PREFIX, RankingError,
    loader::{read_csv_as_strings, require_columns},
};

/// Ranking tables in `dir` as `(year, path)`, oldest first.
///
/// Files not named `brandirectory-ranking-data-global-<year>.csv` are ignored.
///
/// # Errors
/// Returns `RankingError::Io` if the directory cannot be listed.
pub fn ranking_files(dir: &Path) -> Result<Vec<(i32, PathBuf)>, RankingError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let year = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_prefix(RANKING_FILE_PREFIX))
            .and_then(|rest| rest.strip_suffix(".csv"))
            .and_then(|year| year.parse::<i32>().ok());
        if let Some(year) = year {
            files.push((year, path));
        }
    }
    files.sort();
    Ok(files)
}

/// Distinct brand names across every ranking table in `dir`, sorted.
///
/// # Errors
/// Returns `RankingError::NoRankingFiles` if `dir` holds no ranking table,
/// or any error reading one.
pub fn unique_brands(dir: &Path) -> Result<Vec<String>, RankingError> {
    let files = ranking_files(dir)?;
    if files.is_empty() {
        return Err(RankingError::NoRankingFiles(dir.to_path_buf()));
    }

    let mut frames = Vec::with_capacity(files.len());
    for (year, path) in &files {
        let df = read_csv_as_strings(path)?;
        require_columns(&df, &[BRAND_COLUMN], path)?;
        info!(year, path = %path.display(), rows = df.height(), "collecting brands");
        frames.push(df.lazy().select([col(BRAND_COLUMN).str().strip_chars(lit(NULL))]));
    }

    let brands = concat(frames, UnionArgs::default())?
        .drop_nulls(None)
        .filter(col(BRAND_COLUMN).neq(lit("")))
        .unique(None, UniqueKeepStrategy::First)
        .sort([BRAND_COLUMN], SortMultipleOptions::default())
        .collect()?;

    Ok(brands
        .column(BRAND_COLUMN)?
        .str()?
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect())
}

/// Brand names of a `Brand` CSV in file order, skipping blank cells.
///
/// # Errors
/// Returns `RankingError` if the file cannot be read or has no `Brand` column.
pub fn read_brand_list(path: &Path) -> Result<Vec<String>, RankingError> {
    let df = read_csv_as_strings(path)?;
    require_columns(&df, &[BRAND_COLUMN], path)?;
    Ok(df
        .column(BRAND_COLUMN)?
        .str()?
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|brand| !brand.is_empty())
        .map(str::to_string)
        .collect())
}

/// Write brand names as a one-column `Brand` CSV.
///
/// # Errors
/// Returns `RankingError` if the file cannot be written.
pub fn write_brand_list(brands: &[String], path: &Path) -> Result<(), RankingError> {
    let mut df = DataFrame::new(vec![Column::new(BRAND_COLUMN.into(), brands)])?;
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
    Ok(())
}
