//! Error types for the comparison pipeline.

use brandreturns_rankings::RankingError;
use brandreturns_traits::SourceError;

/// Errors that can occur while running the study.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Ranking or ticker table error.
    #[error("ranking error: {0}")]
    Ranking(#[from] RankingError),

    /// Price source error.
    #[error("price source error: {0}")]
    Source(#[from] SourceError),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ModelError {
    /// Returns whether this error points at the study setup rather than at
    /// the data provider.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Ranking(_) | Self::InvalidConfig(_))
    }
}
