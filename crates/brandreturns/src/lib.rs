//! # brandreturns
//!
//! Compare the stock returns of top-ranked brands against a market benchmark.
//!
//! This crate provides a unified interface to the brandreturns workspace.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all offline components, settings included
//! - `primitives`: Core type definitions
//! - `traits`: Price source and ticker search abstractions
//! - `math`: Return statistics
//! - `rankings`: Ranking tables, cohort selection and ticker maps
//! - `model`: Return computation and the comparison pipeline
//! - `report`: Charts, console tables and the HTML report
//! - `feeds`: Yahoo Finance clients
//! - `settings`: Configuration loading
//!
//! ## Example
//!
//! ```rust,ignore
//! use brandreturns::model::{Study, StudyConfig};
//! use brandreturns::rankings::TickerMap;
//!
//! let config = StudyConfig::default();
//! let tickers = TickerMap::load(&config.ticker_map)?;
//! let study = Study::new(config, tickers, source)?;
//! let result = study.run().await?;
//! brandreturns::report::print_summary(&result);
//! ```

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/brandreturns/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use brandreturns_primitives as primitives;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use brandreturns_traits as traits;
#[cfg(feature = "math")]
#[doc(inline)]
pub use brandreturns_math as math;
#[cfg(feature = "rankings")]
#[doc(inline)]
pub use brandreturns_rankings as rankings;
#[cfg(feature = "model")]
#[doc(inline)]
pub use brandreturns_model as model;
#[cfg(feature = "report")]
#[doc(inline)]
pub use brandreturns_report as report;
#[cfg(feature = "feeds")]
#[doc(inline)]
pub use brandreturns_feeds as feeds;

#[cfg(feature = "settings")]
pub mod settings;
