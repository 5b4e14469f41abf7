#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/brandreturns/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod convert;
pub use convert::{RawBar, bars_in_window, window_bounds};

mod price;
pub use price::{MONTHLY_INTERVAL, YahooPriceSource};

mod search;
pub use search::YahooTickerSearch;
