#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/brandreturns/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod config;
pub use config::{BenchmarkConfig, SeriesSwitches, StudyConfig};

mod returns;
pub use returns::{MIN_MONTHLY_BARS, monthly_returns, ticker_returns};

mod cohort;
pub use cohort::aggregate_year;

mod summary;
pub use summary::PerformanceSummary;

mod pipeline;
pub use pipeline::{Study, StudyResult};

mod lookup;
pub use lookup::{DEFAULT_LOOKUP_PAUSE, LookupError, ResolvedBrands, resolve_brands};

mod error;
pub use error::ModelError;

/// Re-export commonly used types.
pub mod prelude {
    pub use brandreturns_traits::{PriceSource, TickerSearch};

    pub use super::{ModelError, PerformanceSummary, Study, StudyConfig, StudyResult};
}
