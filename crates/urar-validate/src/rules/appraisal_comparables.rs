//! Rule: the appraisal states how many comparable properties are currently
//! listed and how many have sold in the subject neighborhood.

use anyhow::Result;

use urar_ingest::Document;
use urar_model::{ComparableCounts, RuleId, RuleOutcome, Trace, Verdict};

use crate::extract::Scanner;
use crate::extract::counts::comparable_counts;

/// Both counts must be present; any non-negative integer passes, including
/// zero. The extracted counts ride along with the verdict.
pub fn evaluate(
    document: &Document,
    scanner: &dyn Scanner,
    trace: &mut Trace,
) -> Result<RuleOutcome> {
    let facts = comparable_counts(document, scanner);
    if let Some(listed) = facts.listed {
        trace.info(format!("'Listed' comparable properties found: {listed}"));
    }
    if let Some(sold) = facts.sold {
        trace.info(format!("'Sold' comparable properties found: {sold}"));
    }

    match (facts.listed, facts.sold) {
        (Some(listed), Some(sold)) => {
            trace.info(format!(
                "Validation passed: appraisal indicates listed={listed}, sold={sold} \
                 comparable properties in the neighborhood."
            ));
            Ok(
                RuleOutcome::new(RuleId::AppraisalComparables, Verdict::Success)
                    .with_comparables(ComparableCounts { listed, sold }),
            )
        }
        _ => {
            trace.info(
                "Validation failed: number of comparable properties currently listed \
                 and sold in the neighborhood is NOT indicated.",
            );
            Ok(RuleOutcome::new(
                RuleId::AppraisalComparables,
                Verdict::Failed,
            ))
        }
    }
}
