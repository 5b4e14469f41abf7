//! Ranking ingestion against fixture tables.
#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use brandreturns_primitives::{SelectionMode, Symbol};
use brandreturns_rankings::{
    DEFAULT_MISSING_PREVIOUS, RankingError, TickerMap, load_cohort, load_rankings,
    ranking_files, read_brand_list, read_ranking_table, unique_brands, write_brand_list,
};

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

#[test]
fn loads_rows_with_missing_previous_positions() {
    let rows = load_rankings(&fixtures(), 2023).unwrap();
    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0].brand, "Amazon");
    assert_eq!(rows[0].position, 1);

    let mercedes = rows.iter().find(|r| r.brand == "Mercedes-Benz").unwrap();
    assert_eq!(mercedes.previous_position, None);

    let dashed = load_rankings(&fixtures(), 2022).unwrap();
    let tiktok = dashed.iter().find(|r| r.brand == "TikTok").unwrap();
    assert_eq!(tiktok.previous_position, None);
    let tesla = dashed.iter().find(|r| r.brand == "Tesla").unwrap();
    assert_eq!(tesla.previous_position, Some(29));
}

#[test]
fn missing_year_is_fatal() {
    let err = load_rankings(&fixtures(), 2019).unwrap_err();
    assert!(matches!(err, RankingError::MissingFile { year: 2019, .. }));
}

#[test]
fn non_numeric_position_is_rejected() {
    let err = read_ranking_table(&fixtures().join("bad-position.csv")).unwrap_err();
    match err {
        RankingError::InvalidPosition { brand, value, .. } => {
            assert_eq!(brand, "Apple");
            assert_eq!(value.as_deref(), Some("two"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_column_is_rejected() {
    let err = read_ranking_table(&fixtures().join("no-previous.csv")).unwrap_err();
    assert!(matches!(err, RankingError::MissingColumn { ref column, .. } if column == "Previous Position"));
}

#[test]
fn most_improved_exact_cohort() {
    let cohort = load_cohort(
        &fixtures(),
        2023,
        SelectionMode::MostImprovedExact,
        3,
        DEFAULT_MISSING_PREVIOUS,
    )
    .unwrap();
    // Mercedes-Benz is new (490 places from the sentinel), Coca-Cola climbed 18,
    // then Verizon, Tesla and TikTok tie at 2 and keep table order.
    assert_eq!(cohort.brands, vec!["Mercedes-Benz", "Coca-Cola", "Verizon"]);
}

#[test]
fn plain_cohort_resolves_in_order() {
    let cohort =
        load_cohort(&fixtures(), 2023, SelectionMode::Plain, 10, DEFAULT_MISSING_PREVIOUS).unwrap();
    let map = TickerMap::load(&fixtures().join("tickers.csv")).unwrap();
    let tickers = map.resolve(&cohort);

    let expected: Vec<Symbol> = ["AMZN", "AAPL", "GOOGL", "MSFT", "WMT", "IDCBY", "VZ", "TSLA"]
        .into_iter()
        .map(Symbol::from)
        .collect();
    assert_eq!(tickers, expected);
}

#[test]
fn ticker_map_skips_placeholders() {
    let map = TickerMap::load(&fixtures().join("tickers.csv")).unwrap();
    assert_eq!(map.len(), 11);
    assert!(map.get("Huawei").is_none());
    assert!(map.get("TikTok").is_none());
    assert_eq!(map.get("Coca-Cola"), Some(&Symbol::new("KO")));
}

#[test]
fn unique_brands_across_editions() {
    let files = ranking_files(&fixtures()).unwrap();
    assert_eq!(files.iter().map(|(year, _)| *year).collect::<Vec<_>>(), vec![2022, 2023]);

    let brands = unique_brands(&fixtures()).unwrap();
    assert_eq!(
        brands,
        vec![
            "Amazon",
            "Apple",
            "Coca-Cola",
            "Facebook",
            "Google",
            "Huawei",
            "ICBC",
            "Mercedes-Benz",
            "Microsoft",
            "Samsung Group",
            "Tesla",
            "TikTok",
            "Verizon",
            "Walmart",
        ]
    );
}

#[test]
fn written_tables_load_back() {
    let dir = std::env::temp_dir().join(format!("brandreturns-rankings-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let ticker_path = dir.join("tickers.csv");
    TickerMap::write_csv(
        &[("Apple".to_string(), Some(Symbol::new("AAPL"))), ("Huawei".to_string(), None)],
        &ticker_path,
    )
    .unwrap();
    let map = TickerMap::load(&ticker_path).unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("Apple"), Some(&Symbol::new("AAPL")));

    let brand_path = dir.join("brands.csv");
    write_brand_list(&["Apple".to_string(), "Huawei".to_string()], &brand_path).unwrap();
    let text = std::fs::read_to_string(&brand_path).unwrap();
    assert_eq!(text.lines().collect::<Vec<_>>(), vec!["Brand", "Apple", "Huawei"]);
    assert_eq!(read_brand_list(&brand_path).unwrap(), vec!["Apple", "Huawei"]);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn unique_brands_requires_ranking_files() {
    let dir = std::env::temp_dir().join(format!("brandreturns-empty-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let err = unique_brands(&dir).unwrap_err();
    assert!(matches!(err, RankingError::NoRankingFiles(_)));
    std::fs::remove_dir_all(&dir).unwrap();
}
