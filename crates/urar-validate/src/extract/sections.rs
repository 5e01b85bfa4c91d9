//! Comparable-sale section headings and their prior-sale-history fields.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use urar_ingest::Document;

use super::{Capture, ScanRequest, ScanTarget, Scanner, Stop};

/// How many comparable sale slots the report form carries.
pub const COMPARABLE_SLOTS: usize = 3;

/// Section headings for comparable sale slots 1..=3, tolerant of the "#"
/// and spacing variants the form renders with.
static HEADING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    (1..=COMPARABLE_SLOTS)
        .map(|slot| {
            Regex::new(&format!(r"(?i)COMPARABLE SALE #? ?{slot}"))
                .expect("valid comparable heading regex")
        })
        .collect()
});

/// Field labels that show a comparable's prior sale history was reported.
static HISTORY_LABEL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)Date of Prior Sale/Transfer",
        r"(?i)Price of Prior Sale/Transfer",
        r"(?i)Prior Sale",
        r"(?i)Prior Transfer",
        r"(?i)Sales History",
        r"(?i)Sales Comparison",
        r"(?i)Data Source\(s\)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid history label regex"))
    .collect()
});

/// One comparable-sale heading occurrence and whether its table also shows
/// a prior-history field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparableSection {
    /// Slot number printed in the heading (1-based).
    pub slot: usize,
    /// Table the heading was found in.
    pub table: usize,
    pub has_history: bool,
}

/// Walk the tables pairing each comparable heading with prior-history
/// labels in the same table. The heading scan stops once three headings
/// are tallied; a slot repeated across tables tallies each time, since the
/// form occasionally continues a comparable onto a second grid.
pub fn comparable_sections(document: &Document, scanner: &dyn Scanner) -> Vec<ComparableSection> {
    let headings = scanner.scan(
        document,
        &ScanRequest {
            target: ScanTarget::Tables { require_all: &[] },
            patterns: &HEADING_PATTERNS,
            capture: Capture::Evidence,
            find_all: false,
            stop: Stop::Findings(COMPARABLE_SLOTS),
        },
    );
    let labels = scanner.scan(
        document,
        &ScanRequest {
            target: ScanTarget::Tables { require_all: &[] },
            patterns: &HISTORY_LABEL_PATTERNS,
            capture: Capture::Evidence,
            find_all: false,
            stop: Stop::Exhausted,
        },
    );
    let tables_with_history: HashSet<usize> = labels
        .iter()
        .filter_map(|finding| finding.location.table_index())
        .collect();

    headings
        .iter()
        .filter_map(|finding| {
            let table = finding.location.table_index()?;
            Some(ComparableSection {
                slot: finding.pattern + 1,
                table,
                has_history: tables_with_history.contains(&table),
            })
        })
        .collect()
}
