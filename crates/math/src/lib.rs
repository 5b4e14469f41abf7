#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/brandreturns/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod stats;
pub use stats::{MONTHS_PER_YEAR, mean, risk_adjusted_ratio, sample_std};

mod compound;
pub use compound::{annualized_return, growth_index, net_compounded_return};

mod aggregate;
pub use aggregate::positional_mean;
