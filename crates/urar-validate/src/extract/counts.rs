//! Comparable-property counts from the appraisal's neighborhood section.

use std::sync::LazyLock;

use regex::Regex;

use urar_ingest::Document;
use urar_model::{Fact, Finding};

use super::{Capture, ScanRequest, ScanTarget, Scanner, Stop};

/// Listed first, sold second; finding indices refer to this order.
static COUNT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)There are\s*(\d+)\s*comparable properties currently offered for sale")
            .expect("valid listed-count regex"),
        Regex::new(r"(?i)There are\s*(\d+)\s*comparable sales in the subject neighborhood")
            .expect("valid sold-count regex"),
    ]
});

const LISTED: usize = 0;
const SOLD: usize = 1;

/// Counts of comparable properties recovered from the document's tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparableCountFacts {
    pub listed: Option<u64>,
    pub sold: Option<u64>,
}

/// Scan every table for the two count statements, stopping once both have
/// matched. When a statement appears in more than one table the last match
/// wins, as later tables restate the earlier summary.
pub fn comparable_counts(document: &Document, scanner: &dyn Scanner) -> ComparableCountFacts {
    let findings = scanner.scan(
        document,
        &ScanRequest {
            target: ScanTarget::Tables { require_all: &[] },
            patterns: &COUNT_PATTERNS,
            capture: Capture::Count,
            find_all: false,
            stop: Stop::AllPatternsMatched,
        },
    );
    ComparableCountFacts {
        listed: last_count(&findings, LISTED),
        sold: last_count(&findings, SOLD),
    }
}

fn last_count(findings: &[Finding], pattern: usize) -> Option<u64> {
    findings
        .iter()
        .rev()
        .find(|finding| finding.pattern == pattern)
        .and_then(|finding| match &finding.fact {
            Fact::Count(value) => Some(*value),
            _ => None,
        })
}
