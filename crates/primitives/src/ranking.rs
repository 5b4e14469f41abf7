//! Brand ranking type definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a cohort is drawn from a year's ranking table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionMode {
    /// Best current positions.
    Plain,
    /// Largest raw climb since the previous ranking.
    MostImprovedExact,
    /// Largest climb relative to the previous position.
    MostImprovedWeighted,
}

impl SelectionMode {
    /// All selection modes in report order.
    pub const ALL: [Self; 3] = [Self::Plain, Self::MostImprovedExact, Self::MostImprovedWeighted];

    /// Sort key for a row, higher is selected first.
    ///
    /// Plain mode ranks by negated position so that position 1 sorts first.
    #[must_use]
    pub fn metric(self, row: &RankingRow, missing_previous: u32) -> f64 {
        match self {
            Self::Plain => -f64::from(row.position),
            Self::MostImprovedExact => row.delta(missing_previous) as f64,
            Self::MostImprovedWeighted => row.weighted_delta(missing_previous),
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::MostImprovedExact => write!(f, "most-improved-exact"),
            Self::MostImprovedWeighted => write!(f, "most-improved-weighted"),
        }
    }
}

/// One brand's line in a yearly ranking table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingRow {
    /// Brand name as printed in the table.
    pub brand: String,
    /// Current rank, 1 is best.
    pub position: u32,
    /// Rank in the previous edition, absent for new entries.
    pub previous_position: Option<u32>,
}

impl RankingRow {
    /// Create a new ranking row.
    #[must_use]
    pub fn new(brand: impl Into<String>, position: u32, previous_position: Option<u32>) -> Self {
        Self { brand: brand.into(), position, previous_position }
    }

    /// Previous position, substituting `missing` when absent.
    #[must_use]
    pub fn previous_or(&self, missing: u32) -> u32 {
        self.previous_position.unwrap_or(missing)
    }

    /// Places gained since the previous ranking (negative when the brand fell).
    #[must_use]
    pub fn delta(&self, missing_previous: u32) -> i64 {
        i64::from(self.previous_or(missing_previous)) - i64::from(self.position)
    }

    /// Places gained divided by the previous position.
    ///
    /// The same climb counts for more the nearer the brand already was to the top.
    #[must_use]
    pub fn weighted_delta(&self, missing_previous: u32) -> f64 {
        self.delta(missing_previous) as f64 / f64::from(self.previous_or(missing_previous))
    }
}

/// Brands selected for one year under one selection mode, in selection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cohort {
    /// Ranking year the cohort was drawn from.
    pub year: i32,
    /// Selection mode used.
    pub mode: SelectionMode,
    /// Selected brand names.
    pub brands: Vec<String>,
}

impl Cohort {
    /// Number of brands.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.brands.len()
    }

    /// Check if empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }
}
