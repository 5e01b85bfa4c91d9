//! Narrative evidence of sales/transfer history research.

use std::sync::LazyLock;

use regex::Regex;

use urar_ingest::Document;
use urar_model::{Fact, Finding};

use super::{Capture, ScanRequest, ScanTarget, Scanner, Stop};

/// A research/analysis verb within reach of "sale or transfer" and "three
/// year". Proximity bounds keep the match inside one sentence-ish span.
static STATEMENT_PATTERN: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)(research|analyz|report).{0,80}(sale|transfer).{0,80}three.{0,10}year")
            .expect("valid statement regex"),
    ]
});

/// Phrases appraisers use when history was unavailable or needs explaining.
static EXPLANATION_PATTERN: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(
            r"(?i)(if this information was available|no prior sale|not available|not found|explanation)",
        )
        .expect("valid explanation regex"),
    ]
});

/// What the narrative scan surfaced: the research statement and, when
/// present, an explanation phrase. The explanation is recorded for the
/// audit trace only; the verdict keys on the statement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NarrativeEvidence {
    pub statement: Option<String>,
    pub explanation: Option<String>,
}

/// Scan the whole document's strings for the research statement and the
/// explanation phrase; each scan stops at its first hit.
pub fn research_narrative(document: &Document, scanner: &dyn Scanner) -> NarrativeEvidence {
    NarrativeEvidence {
        statement: first_snippet(scanner.scan(document, &narrative_request(&STATEMENT_PATTERN))),
        explanation: first_snippet(scanner.scan(document, &narrative_request(&EXPLANATION_PATTERN))),
    }
}

fn narrative_request<'a>(patterns: &'a [Regex]) -> ScanRequest<'a> {
    ScanRequest {
        target: ScanTarget::Strings { require_any: &[] },
        patterns,
        capture: Capture::Evidence,
        find_all: false,
        stop: Stop::Findings(1),
    }
}

fn first_snippet(findings: Vec<Finding>) -> Option<String> {
    findings.into_iter().find_map(|finding| match finding.fact {
        Fact::Evidence(snippet) => Some(snippet),
        _ => None,
    })
}
