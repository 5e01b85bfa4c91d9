//! Data model for URAR appraisal-report compliance validation.
//!
//! A validation run parses one HTML appraisal report, evaluates one or more
//! compliance rules against it, and produces a [`Verdict`] per rule plus a
//! run-scoped audit [`Trace`]. The types here are shared by the ingest,
//! validate, and CLI crates.

mod fact;
mod outcome;
mod rule;
mod trace;
mod verdict;

pub use fact::{Fact, Finding, Location};
pub use outcome::{ComparableCounts, RuleOutcome, RuleRun, RunReport};
pub use rule::RuleId;
pub use trace::{Trace, TraceEntry, TraceSeverity};
pub use verdict::Verdict;
