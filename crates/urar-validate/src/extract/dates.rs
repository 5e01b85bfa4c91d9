//! Appraisal and comparable-sale date extraction.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use urar_ingest::Document;
use urar_model::{Fact, Finding};

use super::{Capture, ScanRequest, ScanTarget, Scanner, Stop};

/// The generic numeric date shape reports use: `M/D/YY` through `MM/DD/YYYY`.
/// Deliberately loose; the normalizer decides what actually parses.
static DATE_PATTERN: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![Regex::new(r"(\d{1,2}/\d{1,2}/\d{2,4})").expect("valid date regex")]
});

/// Find the appraisal (effective) date.
///
/// Most templates put the date in the same string as its label, so the
/// primary scan takes the first date in a node mentioning "appraisal" or
/// "effective date". Grid-style templates split label and value into
/// sibling cells; the fallback accepts a bare date in a cell whose
/// enclosing section mentions "appraisal".
pub fn appraisal_date(document: &Document, scanner: &dyn Scanner) -> Option<String> {
    let labeled = scanner.scan(
        document,
        &ScanRequest {
            target: ScanTarget::Strings {
                require_any: &["appraisal", "effective date"],
            },
            patterns: &DATE_PATTERN,
            capture: Capture::Date,
            find_all: false,
            stop: Stop::Findings(1),
        },
    );
    if let Some(raw) = first_date(labeled) {
        return Some(raw);
    }
    let contextual = scanner.scan(
        document,
        &ScanRequest {
            target: ScanTarget::ContextElements {
                ancestor_contains: "appraisal",
            },
            patterns: &DATE_PATTERN,
            capture: Capture::Date,
            find_all: false,
            stop: Stop::Findings(1),
        },
    );
    first_date(contextual)
}

/// Collect every candidate comparable-sale date: all dates in tables whose
/// text mentions both "comparable" and "sale", plus all dates in strings
/// mentioning "sale" or "sold". Duplicates are removed (the same sale shows
/// up in several grid rows); first-seen order is kept so repeated runs
/// produce identical output.
pub fn sale_dates(document: &Document, scanner: &dyn Scanner) -> Vec<String> {
    let mut findings = scanner.scan(
        document,
        &ScanRequest {
            target: ScanTarget::Tables {
                require_all: &["comparable", "sale"],
            },
            patterns: &DATE_PATTERN,
            capture: Capture::Date,
            find_all: true,
            stop: Stop::Exhausted,
        },
    );
    findings.extend(scanner.scan(
        document,
        &ScanRequest {
            target: ScanTarget::Strings {
                require_any: &["sale", "sold"],
            },
            patterns: &DATE_PATTERN,
            capture: Capture::Date,
            find_all: true,
            stop: Stop::Exhausted,
        },
    ));

    let mut seen = HashSet::new();
    let mut dates = Vec::new();
    for finding in findings {
        if let Fact::Date(raw) = finding.fact
            && seen.insert(raw.clone())
        {
            dates.push(raw);
        }
    }
    dates
}

fn first_date(findings: Vec<Finding>) -> Option<String> {
    findings.into_iter().find_map(|finding| match finding.fact {
        Fact::Date(raw) => Some(raw),
        _ => None,
    })
}
