//! Plain-text summary for the terminal.

use std::fmt::{self, Write};

use brandreturns_model::StudyResult;

use crate::{format_percent, format_ratio};

const RULE_WIDTH: usize = 80;

struct SummaryTable<'a>(&'a StudyResult);

impl fmt::Display for SummaryTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(f, self.0)
    }
}

/// Summary and per-year tables as plain text.
#[must_use]
pub fn summary_table(result: &StudyResult) -> String {
    SummaryTable(result).to_string()
}

fn write_summary(out: &mut impl Write, result: &StudyResult) -> fmt::Result {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    writeln!(out, "\n{heavy}")?;
    writeln!(out, "BRAND COHORTS VS BENCHMARK: {} to {}", result.start_year, result.end_year)?;
    writeln!(out, "{heavy}")?;
    writeln!(
        out,
        "{:<36} {:>12} {:>12} {:>10} {:>6}",
        "Series", "Annualized", "Net", "Ratio", "Years"
    )?;
    writeln!(out, "{:-<36} {:-^12} {:-^12} {:-^10} {:-^6}", "", "", "", "", "")?;
    for summary in result.summaries() {
        writeln!(
            out,
            "{:<36} {:>12} {:>12} {:>10} {:>6}",
            summary.label,
            format_percent(summary.annualized_return),
            format_percent(summary.net_return),
            format_ratio(summary.risk_adjusted_ratio),
            summary.years_covered
        )?;
    }

    writeln!(out, "{light}")?;
    writeln!(out, "\nYEARLY RETURNS:")?;
    for series in &result.series {
        writeln!(out, "{}", series.label)?;
        for year in result.start_year..=result.end_year {
            match series.get(year) {
                Some(r) => writeln!(
                    out,
                    "  {year}  {:>10}  ({} tickers)",
                    format_percent(r.yearly_return),
                    r.tickers.len()
                )?,
                None => writeln!(out, "  {year}  {:>10}", "n/a")?,
            }
        }
    }
    writeln!(out, "{heavy}")
}

/// Print [`summary_table`] to stdout.
pub fn print_summary(result: &StudyResult) {
    print!("{}", summary_table(result));
}

#[cfg(test)]
mod tests {
    use brandreturns_primitives::{SeriesKind, SeriesResult, Symbol, YearlyResult};

    use super::*;

    #[test]
    fn lists_each_series_and_year() {
        let result = StudyResult {
            start_year: 2022,
            end_year: 2023,
            series: vec![SeriesResult::new(
                SeriesKind::Benchmark,
                "S&P 500",
                vec![YearlyResult {
                    year: 2023,
                    tickers: vec![Symbol::new("^GSPC")],
                    monthly_returns: vec![0.01, 0.02],
                    yearly_return: 0.24,
                }],
            )],
        };
        let table = summary_table(&result);

        assert!(table.contains("BRAND COHORTS VS BENCHMARK: 2022 to 2023"));
        assert!(table.contains("S&P 500"));
        assert!(table.contains("+24.00%"));
        assert!(table.contains("  2022         n/a"));
        assert!(table.contains("(1 tickers)"));
    }
}
