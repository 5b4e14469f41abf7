//! Error types for ranking ingestion.

use std::path::PathBuf;

/// Errors that can occur while loading rankings or ticker tables.
#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    /// No ranking file for a requested year.
    #[error("no ranking file for {year} at {}", path.display())]
    MissingFile {
        /// Requested year.
        year: i32,
        /// Expected path.
        path: PathBuf,
    },

    /// Missing required column.
    #[error("missing column {column:?} in {}", path.display())]
    MissingColumn {
        /// Column name.
        column: String,
        /// File being read.
        path: PathBuf,
    },

    /// A row whose current position is not a positive number.
    #[error("invalid position {value:?} for brand {brand:?} in {}", path.display())]
    InvalidPosition {
        /// Brand on the offending row.
        brand: String,
        /// Raw cell value.
        value: Option<String>,
        /// File being read.
        path: PathBuf,
    },

    /// No ranking files found in a directory.
    #[error("no ranking files in {}", .0.display())]
    NoRankingFiles(PathBuf),

    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RankingError::MissingFile { year: 2021, path: PathBuf::from("data/x.csv") };
        let text = err.to_string();
        assert!(text.contains("2021") && text.contains("data/x.csv"));

        let err = RankingError::MissingColumn {
            column: "Previous Position".to_string(),
            path: PathBuf::from("y.csv"),
        };
        assert!(err.to_string().contains("Previous Position"));
    }
}
