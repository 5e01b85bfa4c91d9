use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::rule::RuleId;
use crate::trace::Trace;
use crate::verdict::Verdict;

/// Comparable-property counts extracted by the appraisal rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparableCounts {
    /// Comparable properties currently offered for sale.
    pub listed: u64,
    /// Comparable sales in the subject neighborhood.
    pub sold: u64,
}

/// One rule's verdict, with any facts it extracted along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: RuleId,
    pub verdict: Verdict,
    /// Present only when the appraisal-comparables rule succeeds.
    pub comparables: Option<ComparableCounts>,
}

impl RuleOutcome {
    pub fn new(rule: RuleId, verdict: Verdict) -> Self {
        Self {
            rule,
            verdict,
            comparables: None,
        }
    }

    pub fn error(rule: RuleId) -> Self {
        Self::new(rule, Verdict::Error)
    }

    pub fn with_comparables(mut self, counts: ComparableCounts) -> Self {
        self.comparables = Some(counts);
        self
    }

    /// Render the wire mapping for this rule, e.g.
    /// `{"rule_appraisal": "success", "appraisal_comparables": {"listed": 12, "sold": 8}}`.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            self.rule.key().to_string(),
            Value::String(self.verdict.as_str().to_string()),
        );
        if let Some(counts) = &self.comparables {
            map.insert(
                "appraisal_comparables".to_string(),
                json!({ "listed": counts.listed, "sold": counts.sold }),
            );
        }
        map
    }
}

/// The outcome of one rule run together with its audit trace.
#[derive(Debug, Clone)]
pub struct RuleRun {
    pub outcome: RuleOutcome,
    pub trace: Trace,
}

/// All rule runs performed against one document.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub document: PathBuf,
    pub runs: Vec<RuleRun>,
}

impl RunReport {
    /// Merge every rule's wire mapping into one result record.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for run in &self.runs {
            map.extend(run.outcome.to_map());
        }
        map
    }

    pub fn all_success(&self) -> bool {
        !self.runs.is_empty()
            && self
                .runs
                .iter()
                .all(|run| run.outcome.verdict.is_success())
    }

    pub fn has_errors(&self) -> bool {
        self.runs.iter().any(|run| run.outcome.verdict.is_error())
    }
}
