//! Rule: three comparable sales are provided and each reflects prior sales
//! history.

use anyhow::Result;

use urar_ingest::Document;
use urar_model::{RuleId, RuleOutcome, Trace, Verdict};

use crate::extract::Scanner;
use crate::extract::sections::{COMPARABLE_SLOTS, comparable_sections};

/// Both tallies must independently reach three: at least three comparable
/// headings, and at least three of those tables showing a prior-history
/// field. A heading without history evidence counts toward the first tally
/// only.
pub fn evaluate(
    document: &Document,
    scanner: &dyn Scanner,
    trace: &mut Trace,
) -> Result<RuleOutcome> {
    let sections = comparable_sections(document, scanner);
    for section in &sections {
        if section.has_history {
            trace.info(format!(
                "Comparable Sale #{}: prior sales history found.",
                section.slot
            ));
        } else {
            trace.info(format!(
                "Comparable Sale #{}: prior sales history NOT found.",
                section.slot
            ));
        }
    }

    let comparables_found = sections.len();
    let with_history = sections
        .iter()
        .filter(|section| section.has_history)
        .count();

    let verdict = if comparables_found >= COMPARABLE_SLOTS && with_history >= COMPARABLE_SLOTS {
        trace.info(
            "Validation passed: three comparable sales were provided and each reflects \
             the prior sales history.",
        );
        Verdict::Success
    } else if comparables_found >= COMPARABLE_SLOTS {
        trace.info(
            "Validation failed: three comparable sales provided, but not all have prior \
             sales history fields.",
        );
        Verdict::Failed
    } else {
        trace.info("Validation failed: less than three comparable sales found.");
        Verdict::Failed
    };

    Ok(RuleOutcome::new(RuleId::ComparableSalesHistory, verdict))
}
