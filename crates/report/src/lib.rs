#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/brandreturns/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod format;
pub use format::{escape_html, format_percent, format_ratio};

mod chart;
pub use chart::{growth_chart, growth_values, yearly_returns_chart};

mod html;
pub use html::html_report;

mod console;
pub use console::{print_summary, summary_table};

mod writer;
pub use writer::{GROWTH_CHART_FILE, REPORT_FILE, ReportFiles, YEARLY_CHART_FILE, write_report};

mod error;
pub use error::ReportError;
