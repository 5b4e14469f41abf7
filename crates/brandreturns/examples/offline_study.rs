//! Example: Offline Comparison Study
//!
//! Runs the full comparison on generated ranking tables and a synthetic
//! price source, so no network access is needed:
//! 1. Writing two ranking editions and a ticker map to a scratch directory
//! 2. Running all three cohort series and the benchmark
//! 3. Printing the summary table and writing charts plus the HTML report
//!
//! Run with: `cargo run --example offline_study`

use std::{fs, path::Path};

use brandreturns::{
    model::{Study, StudyConfig},
    primitives::{Date, MonthlyBar, PriceSeries, Symbol, YearWindow},
    rankings::TickerMap,
    report::{print_summary, write_report},
    traits::{PriceSource, SourceError},
};
use chrono::{Datelike, Months};

const BRANDS: &[(&str, &str)] = &[
    ("Apple", "AAPL"),
    ("Microsoft", "MSFT"),
    ("Amazon", "AMZN"),
    ("Google", "GOOGL"),
    ("Samsung Group", "N/A"),
    ("Walmart", "WMT"),
    ("Toyota", "TM"),
    ("Coca-Cola", "KO"),
    ("Nike", "NKE"),
    ("Tesla", "TSLA"),
    ("Nvidia", "NVDA"),
    ("Visa", "V"),
];

/// Deterministic monthly drift per symbol, so every run prints the same figures.
struct SyntheticSource;

impl SyntheticSource {
    fn drift(symbol: &Symbol, year: i32) -> f64 {
        let seed = symbol.as_str().bytes().map(u32::from).sum::<u32>() + year.unsigned_abs();
        f64::from(seed % 41) / 1000.0 - 0.012
    }
}

impl PriceSource for SyntheticSource {
    async fn monthly_bars(
        &self,
        symbol: &Symbol,
        window: YearWindow,
    ) -> Result<PriceSeries, SourceError> {
        let invalid = || SourceError::InvalidWindow {
            year: window.year,
            message: "window outside the supported date range".to_string(),
        };
        let start = window.start().and_then(|d| d.with_day(1)).ok_or_else(invalid)?;
        let end = window.end().ok_or_else(invalid)?;
        let drift = Self::drift(symbol, window.year);

        let mut bars = Vec::new();
        let mut month: Option<Date> = Some(start);
        let mut price = 100.0;
        while let Some(date) = month.filter(|d| *d <= end) {
            // alternate months wobble around the drift
            let wobble = if date.month() % 2 == 0 { 0.01 } else { -0.01 };
            let open = price;
            price *= 1.0 + drift + wobble;
            bars.push(MonthlyBar::new(date, open, price, price));
            month = date.checked_add_months(Months::new(1));
        }
        Ok(PriceSeries::new(symbol.clone(), bars))
    }
}

fn write_fixtures(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;

    let mut tickers = String::from("Brand,Ticker\n");
    for (brand, ticker) in BRANDS {
        tickers.push_str(&format!("{brand},{ticker}\n"));
    }
    fs::write(dir.join("tickers.csv"), tickers)?;

    // each edition reverses part of the previous order so cohorts differ
    for (year, shift) in [(2022, 3_usize), (2023, 7)] {
        let mut table = String::from("Brand,Position,Previous Position\n");
        for (i, (brand, _)) in BRANDS.iter().enumerate() {
            let position = i + 1;
            let previous = (i + shift) % BRANDS.len() + 1;
            table.push_str(&format!("{brand},{position},{previous}\n"));
        }
        fs::write(dir.join(format!("brandirectory-ranking-data-global-{year}.csv")), table)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::temp_dir().join("brandreturns-offline-study");
    write_fixtures(&dir)?;

    let config = StudyConfig {
        start_year: 2022,
        end_year: 2023,
        rankings_dir: dir.clone(),
        ticker_map: dir.join("tickers.csv"),
        output_dir: dir.join("output"),
        cohort_size: 5,
        ..StudyConfig::default()
    };
    let tickers = TickerMap::load(&config.ticker_map)?;
    let output_dir = config.output_dir.clone();

    let study = Study::new(config, tickers, SyntheticSource)?;
    let result = study.run().await?;

    print_summary(&result);
    let files = write_report(&output_dir, &result)?;
    println!("Charts: {}, {}", files.growth_chart.display(), files.yearly_chart.display());
    println!("Report: {}", files.report.display());

    Ok(())
}
