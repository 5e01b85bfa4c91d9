//! Appraisal report ingestion.
//!
//! Loads an HTML appraisal report from disk and exposes it as an immutable
//! traversable tree with the flattened text views the extractors scan:
//! per-table text, per-string-node text, and leaf elements paired with
//! their enclosing section's text.

mod document;

pub use document::{ContextElement, Document, LoadError, NodeText, TableText, collapse_ws};
