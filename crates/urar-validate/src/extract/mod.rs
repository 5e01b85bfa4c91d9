//! Fact extraction: tolerant regex scans over the parsed document.
//!
//! Extraction is a capability behind the [`Scanner`] trait so alternate
//! strategies (structured-field lookup, layout-aware parsing) can be
//! substituted without touching rule logic. The default [`RegexScanner`]
//! applies each request's case-insensitive patterns to the requested view
//! of the document and stops as soon as the request's stop condition is
//! met, so a scan is bounded rather than exhaustive when an early match
//! suffices.
//!
//! Finding nothing is not an error: the scan returns an empty list and the
//! rule evaluator decides the verdict.

pub mod counts;
pub mod dates;
pub mod narrative;
pub mod sections;

use regex::Regex;

use urar_ingest::Document;
use urar_model::{Fact, Finding, Location};

/// Which view of the document a scan walks.
#[derive(Debug, Clone, Copy)]
pub enum ScanTarget<'a> {
    /// Flattened per-table text; only tables whose text contains every
    /// listed term (case-insensitive) are scanned.
    Tables { require_all: &'a [&'a str] },
    /// Every string-bearing node; when terms are given, only nodes
    /// containing at least one of them are scanned.
    Strings { require_any: &'a [&'a str] },
    /// Leaf td/p/span elements whose enclosing table/div/section text
    /// contains the given term. The fallback when a value's label lives in
    /// a sibling node.
    ContextElements { ancestor_contains: &'a str },
}

/// How a pattern match becomes a [`Fact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Parse the first capture group as a non-negative integer.
    Count,
    /// Keep the matched date substring as written.
    Date,
    /// Keep the matched snippet as narrative evidence.
    Evidence,
}

/// When a scan may stop early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// Stop once every pattern in the request has matched at least once.
    AllPatternsMatched,
    /// Stop once this many findings have been collected.
    Findings(usize),
    /// Scan the whole view.
    Exhausted,
}

/// A per-rule scan configuration: where to look, what to look for, how to
/// capture it, and when to stop.
#[derive(Debug, Clone, Copy)]
pub struct ScanRequest<'a> {
    pub target: ScanTarget<'a>,
    /// Case-insensitive patterns; a finding records which one matched.
    pub patterns: &'a [Regex],
    pub capture: Capture,
    /// Collect every match in a unit of text, or only the first per pattern.
    pub find_all: bool,
    pub stop: Stop,
}

/// Extraction capability: scan a document and return the facts recovered,
/// each with the location it was found at.
pub trait Scanner {
    fn scan(&self, document: &Document, request: &ScanRequest<'_>) -> Vec<Finding>;
}

/// Default scanner: regex-driven extraction over the flattened text views.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexScanner;

impl Scanner for RegexScanner {
    fn scan(&self, document: &Document, request: &ScanRequest<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();
        match request.target {
            ScanTarget::Tables { require_all } => {
                for table in document.tables() {
                    let lowered = table.text.to_lowercase();
                    if !require_all.iter().all(|term| lowered.contains(term)) {
                        continue;
                    }
                    scan_unit(request, &table.text, Location::Table(table.index), &mut findings);
                    // Stop is evaluated between tables so a table's matches
                    // are never half-collected.
                    if stop_reached(request, &findings) {
                        break;
                    }
                }
            }
            ScanTarget::Strings { require_any } => {
                for node in document.strings() {
                    if !require_any.is_empty() {
                        let lowered = node.text.to_lowercase();
                        if !require_any.iter().any(|term| lowered.contains(term)) {
                            continue;
                        }
                    }
                    scan_unit(request, &node.text, Location::Node(node.index), &mut findings);
                    if stop_reached(request, &findings) {
                        break;
                    }
                }
            }
            ScanTarget::ContextElements { ancestor_contains } => {
                for element in document.contextual_elements() {
                    if !element
                        .context
                        .to_lowercase()
                        .contains(ancestor_contains)
                    {
                        continue;
                    }
                    scan_unit(request, &element.text, Location::Node(element.index), &mut findings);
                    if stop_reached(request, &findings) {
                        break;
                    }
                }
            }
        }
        findings
    }
}

/// Apply every pattern to one unit of text, appending findings.
fn scan_unit(
    request: &ScanRequest<'_>,
    text: &str,
    location: Location,
    findings: &mut Vec<Finding>,
) {
    for (pattern, regex) in request.patterns.iter().enumerate() {
        if request.find_all {
            for captures in regex.captures_iter(text) {
                if let Some(fact) = capture_fact(request.capture, &captures) {
                    findings.push(Finding {
                        fact,
                        location,
                        pattern,
                    });
                }
            }
        } else if let Some(captures) = regex.captures(text)
            && let Some(fact) = capture_fact(request.capture, &captures)
        {
            findings.push(Finding {
                fact,
                location,
                pattern,
            });
        }
    }
}

fn capture_fact(capture: Capture, captures: &regex::Captures<'_>) -> Option<Fact> {
    match capture {
        Capture::Count => {
            let group = captures.get(1)?;
            // A run of digits too long for u64 is noise, not a count.
            group.as_str().parse::<u64>().ok().map(Fact::Count)
        }
        Capture::Date => {
            let group = captures.get(1).or_else(|| captures.get(0))?;
            Some(Fact::Date(group.as_str().to_string()))
        }
        Capture::Evidence => Some(Fact::Evidence(captures.get(0)?.as_str().to_string())),
    }
}

fn stop_reached(request: &ScanRequest<'_>, findings: &[Finding]) -> bool {
    match request.stop {
        Stop::Exhausted => false,
        Stop::Findings(limit) => findings.len() >= limit,
        Stop::AllPatternsMatched => (0..request.patterns.len())
            .all(|pattern| findings.iter().any(|finding| finding.pattern == pattern)),
    }
}
