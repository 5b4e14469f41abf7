//! Cohort selection.

use std::path::Path;

use brandreturns_primitives::{Cohort, RankingRow, SelectionMode};
use tracing::debug;

use crate::{RankingError, load_rankings};

/// Previous position assumed for brands new to the ranking.
///
/// Worse than any real rank in a 500-brand table, so a newcomer's climb is
/// bounded by where it entered.
pub const DEFAULT_MISSING_PREVIOUS: u32 = 501;

/// Select the first `size` brands of `rows` under `mode`.
///
/// Rows are ordered by [`SelectionMode::metric`] descending. The sort is
/// stable, so ties keep table order.
#[must_use]
pub fn select_cohort(
    rows: &[RankingRow],
    year: i32,
    mode: SelectionMode,
    size: usize,
    missing_previous: u32,
) -> Cohort {
    let mut ranked: Vec<(f64, &RankingRow)> =
        rows.iter().map(|row| (mode.metric(row, missing_previous), row)).collect();
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    let brands = ranked.into_iter().take(size).map(|(_, row)| row.brand.clone()).collect();
    Cohort { year, mode, brands }
}

/// Load `year`'s ranking table from `dir` and select a cohort from it.
///
/// # Errors
/// Returns `RankingError` if the table is missing or malformed.
pub fn load_cohort(
    dir: &Path,
    year: i32,
    mode: SelectionMode,
    size: usize,
    missing_previous: u32,
) -> Result<Cohort, RankingError> {
    let rows = load_rankings(dir, year)?;
    let cohort = select_cohort(&rows, year, mode, size, missing_previous);
    debug!(year, %mode, brands = ?cohort.brands, "selected cohort");
    Ok(cohort)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<RankingRow> {
        vec![
            RankingRow::new("Alpha", 1, Some(1)),
            RankingRow::new("Bravo", 2, Some(5)),
            RankingRow::new("Charlie", 3, Some(2)),
            RankingRow::new("Delta", 4, Some(40)),
            RankingRow::new("Echo", 5, None),
            RankingRow::new("Foxtrot", 6, Some(10)),
        ]
    }

    #[test]
    fn plain_takes_best_positions() {
        let cohort = select_cohort(&table(), 2023, SelectionMode::Plain, 3, 501);
        assert_eq!(cohort.brands, vec!["Alpha", "Bravo", "Charlie"]);
        assert_eq!(cohort.year, 2023);
        assert_eq!(cohort.mode, SelectionMode::Plain);
    }

    #[test]
    fn plain_ignores_file_order() {
        let mut rows = table();
        rows.reverse();
        let cohort = select_cohort(&rows, 2023, SelectionMode::Plain, 2, 501);
        assert_eq!(cohort.brands, vec!["Alpha", "Bravo"]);
    }

    #[test]
    fn exact_orders_by_raw_climb() {
        // climbs: Echo 496, Delta 36, Foxtrot 4, Bravo 3, Alpha 0, Charlie -1
        let cohort = select_cohort(&table(), 2023, SelectionMode::MostImprovedExact, 4, 501);
        assert_eq!(cohort.brands, vec!["Echo", "Delta", "Foxtrot", "Bravo"]);
    }

    #[test]
    fn weighted_orders_by_relative_climb() {
        // ratios: Echo 496/501, Delta 0.9, Bravo 0.6, Foxtrot 0.4, Alpha 0, Charlie -0.5
        let cohort = select_cohort(&table(), 2023, SelectionMode::MostImprovedWeighted, 6, 501);
        assert_eq!(cohort.brands, vec!["Echo", "Delta", "Bravo", "Foxtrot", "Alpha", "Charlie"]);
    }

    #[test]
    fn weighted_invariant_under_position_rescaling() {
        let rows = vec![
            RankingRow::new("A", 10, Some(40)),
            RankingRow::new("B", 12, Some(30)),
            RankingRow::new("C", 20, Some(100)),
            RankingRow::new("D", 8, Some(9)),
        ];
        let rescaled: Vec<RankingRow> = rows
            .iter()
            .map(|r| RankingRow::new(r.brand.clone(), r.position * 2, r.previous_position))
            .collect();

        let original = select_cohort(&rows, 2023, SelectionMode::MostImprovedWeighted, 4, 501);
        let scaled = select_cohort(&rescaled, 2023, SelectionMode::MostImprovedWeighted, 4, 501);
        assert_eq!(original.brands, scaled.brands);
    }

    #[test]
    fn weighted_depends_on_sentinel() {
        let rows = vec![RankingRow::new("Newcomer", 50, None), RankingRow::new("Climber", 5, Some(20))];

        let high = select_cohort(&rows, 2023, SelectionMode::MostImprovedWeighted, 1, 501);
        let low = select_cohort(&rows, 2023, SelectionMode::MostImprovedWeighted, 1, 100);
        assert_eq!(high.brands, vec!["Newcomer"]);
        assert_eq!(low.brands, vec!["Climber"]);
    }

    #[test]
    fn missing_previous_ranks_as_sentinel() {
        let peers = |newcomer: RankingRow| {
            vec![
                RankingRow::new("P1", 3, Some(300)),
                newcomer,
                RankingRow::new("P2", 7, Some(450)),
                RankingRow::new("P3", 9, Some(510)),
            ]
        };
        let missing = peers(RankingRow::new("New", 5, None));
        let explicit = peers(RankingRow::new("New", 5, Some(501)));

        for mode in SelectionMode::ALL {
            assert_eq!(
                select_cohort(&missing, 2023, mode, 4, 501).brands,
                select_cohort(&explicit, 2023, mode, 4, 501).brands
            );
        }
    }

    #[test]
    fn size_larger_than_table() {
        let cohort = select_cohort(&table(), 2023, SelectionMode::Plain, 50, 501);
        assert_eq!(cohort.len(), 6);
        assert!(select_cohort(&[], 2023, SelectionMode::Plain, 10, 501).is_empty());
    }
}
