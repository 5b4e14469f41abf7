#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/brandreturns/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod symbol;
pub use symbol::{NOT_AVAILABLE, Symbol};

mod ranking;
pub use ranking::{Cohort, RankingRow, SelectionMode};

mod price;
pub use price::{MonthlyBar, PriceSeries};

mod window;
pub use window::{ReturnFormula, WindowConvention, YearWindow};

mod returns;
pub use returns::{SeriesKind, SeriesResult, TickerReturns, YearlyResult};

/// Re-export common date type.
pub type Date = chrono::NaiveDate;
