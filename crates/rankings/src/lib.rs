#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/brandreturns/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod loader;
pub use loader::{
    BRAND_COLUMN, POSITION_COLUMN, PREVIOUS_POSITION_COLUMN, RANKING_FILE_PREFIX, load_rankings,
    ranking_path, read_ranking_table,
};

mod select;
pub use select::{DEFAULT_MISSING_PREVIOUS, load_cohort, select_cohort};

mod tickers;
pub use tickers::{TICKER_COLUMN, TickerMap};

mod brands;
pub use brands::{read_brand_list, ranking_files, unique_brands, write_brand_list};

mod error;
pub use error::RankingError;
