//! Compliance rule evaluation for URAR appraisal reports.
//!
//! The shared pipeline: a [`Scanner`] walks the parsed document with a
//! per-rule [`ScanRequest`] (where to look, which case-insensitive patterns
//! to apply, when to stop), the date normalizer resolves ambiguous numeric
//! dates, and each rule module reduces the findings to a verdict. The
//! [`RuleEngine`] is the boundary that turns every machinery failure into a
//! verdict of `error` instead of propagating it.

mod engine;
pub mod extract;
mod normalize;
mod report;
pub mod rules;

pub use engine::RuleEngine;
pub use extract::{Capture, RegexScanner, ScanRequest, ScanTarget, Scanner, Stop};
pub use normalize::{
    DateFormatError, SALE_WINDOW_MONTHS, months_between, parse_report_date, within_sale_window,
};
pub use report::write_report_json;
