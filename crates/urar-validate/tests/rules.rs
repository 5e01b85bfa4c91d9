//! End-to-end rule evaluation tests over inline report fixtures.

use std::io::Write;
use std::path::Path;

use serde_json::Value;

use urar_ingest::Document;
use urar_model::{Finding, RuleId, Trace, Verdict};
use urar_validate::{RuleEngine, ScanRequest, Scanner};

/// A miniature report that satisfies all four rules, including the
/// exact-twelve-month boundary sale (03/15/2023 against 03/15/2024).
const FULL_REPORT: &str = r#"
<html><body>
<p>Uniform Residential Appraisal Report</p>
<p>Effective Date of Appraisal: 03/15/2024</p>
<table>
  <tr><td>There are 12 comparable properties currently offered for sale in the subject neighborhood.</td></tr>
  <tr><td>There are 8 comparable sales in the subject neighborhood within the past twelve months.</td></tr>
</table>
<table>
  <tr><td>ITEM</td><td>COMPARABLE SALE # 1</td><td>COMPARABLE SALE # 2</td><td>COMPARABLE SALE # 3</td></tr>
  <tr><td>Date of Sale/Time</td><td>05/20/2023</td><td>09/12/2023</td><td>03/15/2023</td></tr>
  <tr><td>Date of Prior Sale/Transfer</td><td>None of record</td><td>None of record</td><td>None of record</td></tr>
</table>
<p>I researched the sale or transfer history of the subject property for the three years prior to the effective date of this appraisal.</p>
</body></html>
"#;

fn evaluate(rule: RuleId, html: &str) -> (Verdict, Trace) {
    let document = Document::parse(html).expect("parse fixture");
    let engine = RuleEngine::new();
    let mut trace = Trace::new();
    let outcome = engine.check_document(rule, &document, &mut trace);
    (outcome.verdict, trace)
}

#[test]
fn full_report_passes_every_rule() {
    let document = Document::parse(FULL_REPORT).expect("parse fixture");
    let engine = RuleEngine::new();
    for rule in RuleId::ALL {
        let mut trace = Trace::new();
        let outcome = engine.check_document(rule, &document, &mut trace);
        assert_eq!(
            outcome.verdict,
            Verdict::Success,
            "{} should pass; trace: {:?}",
            rule.key(),
            trace.messages()
        );
    }
}

#[test]
fn appraisal_counts_are_extracted_exactly() {
    let document = Document::parse(FULL_REPORT).expect("parse fixture");
    let engine = RuleEngine::new();
    let mut trace = Trace::new();
    let outcome = engine.check_document(RuleId::AppraisalComparables, &document, &mut trace);
    let counts = outcome.comparables.expect("counts extracted");
    assert_eq!(counts.listed, 12);
    assert_eq!(counts.sold, 8);

    let map = outcome.to_map();
    assert_eq!(map["rule_appraisal"], Value::String("success".into()));
    assert_eq!(map["appraisal_comparables"]["listed"], Value::from(12));
    assert_eq!(map["appraisal_comparables"]["sold"], Value::from(8));
}

#[test]
fn zero_counts_still_pass() {
    let html = r#"
<table>
  <tr><td>There are 0 comparable properties currently offered for sale in the subject neighborhood.</td></tr>
  <tr><td>There are 0 comparable sales in the subject neighborhood.</td></tr>
</table>
"#;
    let document = Document::parse(html).expect("parse fixture");
    let engine = RuleEngine::new();
    let mut trace = Trace::new();
    let outcome = engine.check_document(RuleId::AppraisalComparables, &document, &mut trace);
    assert_eq!(outcome.verdict, Verdict::Success);
    let counts = outcome.comparables.expect("counts extracted");
    assert_eq!((counts.listed, counts.sold), (0, 0));
}

#[test]
fn missing_sold_count_fails() {
    let html = r#"
<table>
  <tr><td>There are 12 comparable properties currently offered for sale in the subject neighborhood.</td></tr>
</table>
"#;
    let (verdict, _) = evaluate(RuleId::AppraisalComparables, html);
    assert_eq!(verdict, Verdict::Failed);
}

#[test]
fn document_without_tables_fails_appraisal_rule() {
    let html = "<html><body><p>No grids in this report at all.</p></body></html>";
    let document = Document::parse(html).expect("parse fixture");
    let engine = RuleEngine::new();
    let mut trace = Trace::new();
    let outcome = engine.check_document(RuleId::AppraisalComparables, &document, &mut trace);
    assert_eq!(outcome.verdict, Verdict::Failed);
    let map = outcome.to_map();
    assert_eq!(map.len(), 1);
    assert_eq!(map["rule_appraisal"], Value::String("failed".into()));
}

#[test]
fn sale_dates_within_window_pass() {
    let html = r#"
<p>Effective Date of Appraisal: 03/15/2024</p>
<table><tr><td>Comparable sale grid</td></tr><tr><td>Date of Sale/Time 05/20/2023</td></tr></table>
"#;
    let (verdict, trace) = evaluate(RuleId::ComparableSaleDates, html);
    assert_eq!(verdict, Verdict::Success, "trace: {:?}", trace.messages());
}

#[test]
fn sale_thirteen_months_before_appraisal_fails() {
    let html = r#"
<p>Effective Date of Appraisal: 03/15/2024</p>
<table><tr><td>Comparable sale grid</td></tr><tr><td>Date of Sale/Time 02/10/2023</td></tr></table>
"#;
    let (verdict, trace) = evaluate(RuleId::ComparableSaleDates, html);
    assert_eq!(verdict, Verdict::Failed);
    assert!(
        trace
            .messages()
            .iter()
            .any(|message| message.contains("NOT within 12 months")),
        "trace: {:?}",
        trace.messages()
    );
}

#[test]
fn missing_appraisal_date_fails() {
    let html = r#"
<table><tr><td>Comparable sale closed 05/20/2023</td></tr></table>
"#;
    let (verdict, trace) = evaluate(RuleId::ComparableSaleDates, html);
    assert_eq!(verdict, Verdict::Failed);
    assert!(trace.messages().contains(&"Appraisal date not found."));
}

#[test]
fn unparseable_sale_date_counts_as_failure() {
    // A three-digit year matches the tolerant scan pattern but neither
    // supported date format.
    let html = r#"
<p>Effective Date of Appraisal: 03/15/2024</p>
<table><tr><td>Comparable sale recorded 05/20/203</td></tr></table>
"#;
    let (verdict, trace) = evaluate(RuleId::ComparableSaleDates, html);
    assert_eq!(verdict, Verdict::Failed);
    assert!(
        trace
            .messages()
            .iter()
            .any(|message| message.contains("Sale date format not recognized: 05/20/203")),
        "trace: {:?}",
        trace.messages()
    );
}

#[test]
fn two_digit_years_resolve_through_the_pivot() {
    let html = r#"
<p>Effective Date of Appraisal: 03/15/23</p>
<table><tr><td>Comparable sale closed 03/01/22</td></tr></table>
"#;
    // 03/01/22 resolves to 2022-03-01, exactly twelve months before
    // 2023-03-15.
    let (verdict, trace) = evaluate(RuleId::ComparableSaleDates, html);
    assert_eq!(verdict, Verdict::Success, "trace: {:?}", trace.messages());
}

#[test]
fn appraisal_date_found_via_section_context_fallback() {
    // The date cell carries no label of its own; only the enclosing table
    // names it as appraisal data.
    let html = r#"
<table><tr><td>Appraisal Summary</td></tr><tr><td>04/02/2024</td></tr></table>
<table><tr><td>Comparable sale closed 01/15/2024</td></tr></table>
"#;
    let (verdict, trace) = evaluate(RuleId::ComparableSaleDates, html);
    assert_eq!(verdict, Verdict::Success, "trace: {:?}", trace.messages());
    assert!(
        trace
            .messages()
            .contains(&"Appraisal date found: 04/02/2024")
    );
}

#[test]
fn research_narrative_passes() {
    let html = r#"
<p>The appraiser analyzed the sale and transfer history for the prior three years.</p>
"#;
    let (verdict, _) = evaluate(RuleId::SalesHistoryResearch, html);
    assert_eq!(verdict, Verdict::Success);
}

#[test]
fn missing_research_narrative_fails() {
    let html = "<p>No research narrative here.</p>";
    let (verdict, _) = evaluate(RuleId::SalesHistoryResearch, html);
    assert_eq!(verdict, Verdict::Failed);
}

#[test]
fn explanation_phrase_alone_does_not_pass() {
    // The explanation flag is traced but the verdict keys on the research
    // statement.
    let html = "<p>No prior sale or transfer was found for the subject property.</p>";
    let (verdict, trace) = evaluate(RuleId::SalesHistoryResearch, html);
    assert_eq!(verdict, Verdict::Failed);
    assert!(
        trace
            .messages()
            .iter()
            .any(|message| message.starts_with("Found explanation:")),
        "trace: {:?}",
        trace.messages()
    );
}

#[test]
fn three_comparables_with_history_pass() {
    let (verdict, _) = evaluate(RuleId::ComparableSalesHistory, FULL_REPORT);
    assert_eq!(verdict, Verdict::Success);
}

#[test]
fn comparable_without_history_field_fails() {
    let html = r#"
<table><tr><td>COMPARABLE SALE #1</td></tr><tr><td>Date of Prior Sale/Transfer: 01/02/2020</td></tr></table>
<table><tr><td>COMPARABLE SALE #2</td></tr><tr><td>Prior Sale: none of record</td></tr></table>
<table><tr><td>COMPARABLE SALE #3</td></tr><tr><td>Address: 123 Main St</td></tr></table>
"#;
    let document = Document::parse(html).expect("parse fixture");
    let engine = RuleEngine::new();
    let mut trace = Trace::new();
    let outcome = engine.check_document(RuleId::ComparableSalesHistory, &document, &mut trace);
    assert_eq!(outcome.verdict, Verdict::Failed);
    let map = outcome.to_map();
    assert_eq!(map["rule61"], Value::String("failed".into()));
    assert!(
        trace
            .messages()
            .contains(&"Comparable Sale #3: prior sales history NOT found.")
    );
}

#[test]
fn fewer_than_three_comparables_fail() {
    let html = r#"
<table><tr><td>COMPARABLE SALE #1</td></tr><tr><td>Prior Sale: none</td></tr></table>
<table><tr><td>COMPARABLE SALE #2</td></tr><tr><td>Prior Sale: none</td></tr></table>
"#;
    let (verdict, trace) = evaluate(RuleId::ComparableSalesHistory, html);
    assert_eq!(verdict, Verdict::Failed);
    assert!(
        trace
            .messages()
            .contains(&"Validation failed: less than three comparable sales found.")
    );
}

#[test]
fn missing_file_yields_error_for_every_rule() {
    let engine = RuleEngine::new();
    let path = Path::new("/nonexistent/report.html");

    let report = engine.check_all_path(path);
    assert_eq!(report.runs.len(), RuleId::ALL.len());
    for run in &report.runs {
        assert_eq!(run.outcome.verdict, Verdict::Error);
    }
    let map = report.to_map();
    for rule in RuleId::ALL {
        assert_eq!(map[rule.key()], Value::String("error".into()));
    }

    // Per-rule invocation reports the same.
    let run = engine.check_path(RuleId::AppraisalComparables, path);
    assert_eq!(run.outcome.verdict, Verdict::Error);
    assert!(
        run.trace
            .messages()
            .iter()
            .any(|message| message.contains("An error occurred"))
    );
}

#[test]
fn repeated_runs_are_idempotent() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(FULL_REPORT.as_bytes()).expect("write fixture");

    let engine = RuleEngine::new();
    let first = engine.check_all_path(file.path());
    let second = engine.check_all_path(file.path());

    assert_eq!(first.to_map(), second.to_map());
    assert_eq!(first.runs.len(), second.runs.len());
    for (a, b) in first.runs.iter().zip(second.runs.iter()) {
        assert_eq!(a.outcome, b.outcome);
        // Trace content matches; only timestamps may differ.
        assert_eq!(a.trace.messages(), b.trace.messages());
    }
}

/// A scanner that never finds anything: every rule must fail (not error),
/// proving extraction is a substitutable capability.
struct NullScanner;

impl Scanner for NullScanner {
    fn scan(&self, _document: &Document, _request: &ScanRequest<'_>) -> Vec<Finding> {
        Vec::new()
    }
}

#[test]
fn substitute_scanner_drives_the_verdicts() {
    let document = Document::parse(FULL_REPORT).expect("parse fixture");
    let engine = RuleEngine::with_scanner(Box::new(NullScanner));
    for rule in RuleId::ALL {
        let mut trace = Trace::new();
        let outcome = engine.check_document(rule, &document, &mut trace);
        assert_eq!(outcome.verdict, Verdict::Failed, "{}", rule.key());
    }
}
