//! The rule engine: loads a document, dispatches rule evaluators, and turns
//! every machinery failure into a verdict instead of an escaping error.

use std::path::Path;

use urar_ingest::Document;
use urar_model::{RuleId, RuleOutcome, RuleRun, RunReport, Trace};

use crate::extract::{RegexScanner, Scanner};
use crate::rules;

/// Evaluates compliance rules against appraisal reports.
///
/// The engine owns the extraction strategy; the default is the regex
/// scanner, and tests or alternate pipelines can substitute their own.
pub struct RuleEngine {
    scanner: Box<dyn Scanner>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    pub fn new() -> Self {
        Self {
            scanner: Box::new(RegexScanner),
        }
    }

    pub fn with_scanner(scanner: Box<dyn Scanner>) -> Self {
        Self { scanner }
    }

    /// Run one rule against the document at `path`.
    ///
    /// Never fails: an unreadable document is reported as verdict `error`
    /// with the cause in the trace.
    pub fn check_path(&self, rule: RuleId, path: &Path) -> RuleRun {
        let mut trace = Trace::new();
        let outcome = match Document::load(path) {
            Ok(document) => self.check_document(rule, &document, &mut trace),
            Err(error) => {
                trace.error(format!(
                    "An error occurred while checking {}: {error}",
                    rule.describe()
                ));
                RuleOutcome::error(rule)
            }
        };
        RuleRun { outcome, trace }
    }

    /// Run the given rules against one shared load of the document. Each
    /// rule gets its own trace; a load failure yields `error` for every
    /// rule, matching what per-rule invocation would report.
    pub fn check_rules_path(&self, rules: &[RuleId], path: &Path) -> RunReport {
        let runs = match Document::load(path) {
            Ok(document) => rules
                .iter()
                .map(|&rule| {
                    let mut trace = Trace::new();
                    let outcome = self.check_document(rule, &document, &mut trace);
                    RuleRun { outcome, trace }
                })
                .collect(),
            Err(error) => rules
                .iter()
                .map(|&rule| {
                    let mut trace = Trace::new();
                    trace.error(format!(
                        "An error occurred while checking {}: {error}",
                        rule.describe()
                    ));
                    RuleRun {
                        outcome: RuleOutcome::error(rule),
                        trace,
                    }
                })
                .collect(),
        };
        RunReport {
            document: path.to_path_buf(),
            runs,
        }
    }

    /// Run every rule against the document at `path`.
    pub fn check_all_path(&self, path: &Path) -> RunReport {
        self.check_rules_path(&RuleId::ALL, path)
    }

    /// Evaluate one rule against an already-loaded document. The rule
    /// boundary: any error escaping the evaluator is traced and reported
    /// as verdict `error`, never propagated.
    pub fn check_document(
        &self,
        rule: RuleId,
        document: &Document,
        trace: &mut Trace,
    ) -> RuleOutcome {
        match self.evaluate(rule, document, trace) {
            Ok(outcome) => outcome,
            Err(error) => {
                trace.error(format!(
                    "An error occurred while checking {}: {error:#}",
                    rule.describe()
                ));
                RuleOutcome::error(rule)
            }
        }
    }

    fn evaluate(
        &self,
        rule: RuleId,
        document: &Document,
        trace: &mut Trace,
    ) -> anyhow::Result<RuleOutcome> {
        let scanner = self.scanner.as_ref();
        match rule {
            RuleId::AppraisalComparables => {
                rules::appraisal_comparables::evaluate(document, scanner, trace)
            }
            RuleId::ComparableSaleDates => rules::sale_recency::evaluate(document, scanner, trace),
            RuleId::SalesHistoryResearch => {
                rules::history_research::evaluate(document, scanner, trace)
            }
            RuleId::ComparableSalesHistory => {
                rules::comparable_history::evaluate(document, scanner, trace)
            }
        }
    }
}
