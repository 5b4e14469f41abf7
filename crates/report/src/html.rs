//! One-page HTML report.

use brandreturns_model::StudyResult;

use crate::{escape_html, format_percent, format_ratio, growth_chart, yearly_returns_chart};

const STYLE: &str = r"
body { font-family: Arial, sans-serif; color: #222; margin: 32px auto; max-width: 780px; }
h1 { font-size: 22px; margin-bottom: 4px; }
h2 { font-size: 16px; margin-top: 28px; border-bottom: 1px solid #ccc; padding-bottom: 4px; }
p.meta { color: #666; margin-top: 0; }
table { border-collapse: collapse; width: 100%; font-size: 13px; }
th, td { padding: 6px 8px; border-bottom: 1px solid #eee; text-align: right; }
th:first-child, td:first-child { text-align: left; }
td.na { color: #999; }
.chart svg { width: 100%; height: auto; }
@media print { body { margin: 0; } .chart { page-break-inside: avoid; } }
";

fn value_cell(text: String) -> String {
    if text == "n/a" { "<td class=\"na\">n/a</td>".to_string() } else { format!("<td>{text}</td>") }
}

fn build_summary_table(result: &StudyResult) -> String {
    let mut html = String::new();
    html.push_str(
        "<table>\n<thead>\n<tr><th>Series</th><th>Annualized return</th><th>Net return</th><th>Risk-adjusted ratio</th><th>Years</th></tr>\n</thead>\n<tbody>\n",
    );
    for summary in result.summaries() {
        html.push_str(&format!(
            "<tr><td>{label}</td>{annualized}{net}{ratio}<td>{years}</td></tr>\n",
            label = escape_html(&summary.label),
            annualized = value_cell(format_percent(summary.annualized_return)),
            net = value_cell(format_percent(summary.net_return)),
            ratio = value_cell(format_ratio(summary.risk_adjusted_ratio)),
            years = summary.years_covered,
        ));
    }
    html.push_str("</tbody>\n</table>");
    html
}

fn build_yearly_table(result: &StudyResult) -> String {
    let mut html = String::new();
    html.push_str("<table>\n<thead>\n<tr><th>Year</th>");
    for series in &result.series {
        html.push_str(&format!("<th>{}</th>", escape_html(&series.label)));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for year in result.start_year..=result.end_year {
        html.push_str(&format!("<tr><td>{year}</td>"));
        for series in &result.series {
            let value = series.get(year).map_or(f64::NAN, |r| r.yearly_return);
            html.push_str(&value_cell(format_percent(value)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>");
    html
}

fn build_members_table(result: &StudyResult) -> String {
    let mut html = String::new();
    html.push_str("<table>\n<thead>\n<tr><th>Series</th><th>Year</th><th>Tickers</th></tr>\n</thead>\n<tbody>\n");
    for series in &result.series {
        for year in &series.years {
            let tickers: Vec<&str> = year.tickers.iter().map(|t| t.as_str()).collect();
            html.push_str(&format!(
                "<tr><td>{label}</td><td>{year}</td><td style=\"text-align:left\">{tickers}</td></tr>\n",
                label = escape_html(&series.label),
                year = year.year,
                tickers = escape_html(&tickers.join(", ")),
            ));
        }
    }
    html.push_str("</tbody>\n</table>");
    html
}

/// Render the self-contained report page.
///
/// Undefined figures are shown as `n/a`.
#[must_use]
pub fn html_report(result: &StudyResult) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Brand cohorts vs benchmark</title>\n");
    html.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));
    html.push_str("<h1>Brand cohorts vs benchmark</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Ranking years {} to {}</p>\n",
        result.start_year, result.end_year
    ));

    html.push_str("<h2>Performance summary</h2>\n");
    html.push_str(&build_summary_table(result));
    html.push_str("\n<h2>Cumulative growth</h2>\n<div class=\"chart\">");
    html.push_str(&growth_chart(result));
    html.push_str("</div>\n<h2>Yearly returns</h2>\n<div class=\"chart\">");
    html.push_str(&yearly_returns_chart(result));
    html.push_str("</div>\n");
    html.push_str(&build_yearly_table(result));
    html.push_str("\n<h2>Cohort members</h2>\n");
    html.push_str(&build_members_table(result));
    html.push_str("\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use brandreturns_primitives::{SelectionMode, SeriesKind, SeriesResult, Symbol, YearlyResult};

    use super::*;

    fn result() -> StudyResult {
        let flat = YearlyResult {
            year: 2022,
            tickers: vec![Symbol::new("AAPL"), Symbol::new("MSFT")],
            monthly_returns: vec![0.0; 12],
            yearly_return: 0.0,
        };
        StudyResult {
            start_year: 2022,
            end_year: 2023,
            series: vec![
                SeriesResult::new(SeriesKind::Cohort(SelectionMode::Plain), "Top 10 Brands", vec![flat]),
                SeriesResult::new(SeriesKind::Benchmark, "S&P 500", Vec::new()),
            ],
        }
    }

    #[test]
    fn report_is_complete_document() {
        let html = html_report(&result());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert_eq!(html.matches("<svg").count(), 2);
        assert!(html.contains("Ranking years 2022 to 2023"));
    }

    #[test]
    fn summary_rows_show_undefined_as_na() {
        let table = build_summary_table(&result());
        assert!(table.contains("<tr><td>Top 10 Brands</td><td>+0.00%</td><td>+0.00%</td><td class=\"na\">n/a</td><td>1</td></tr>"));
        assert!(table.contains("<tr><td>S&amp;P 500</td><td class=\"na\">n/a</td><td>+0.00%</td>"));
    }

    #[test]
    fn yearly_table_marks_missing_years() {
        let table = build_yearly_table(&result());
        assert!(table.contains("<tr><td>2023</td><td class=\"na\">n/a</td><td class=\"na\">n/a</td></tr>"));
    }

    #[test]
    fn members_listed_per_recorded_year() {
        let table = build_members_table(&result());
        assert!(table.contains("AAPL, MSFT"));
        assert_eq!(table.matches("<tr><td>").count(), 1);
    }
}
