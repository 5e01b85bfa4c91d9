//! Rule: the appraiser states they researched the subject's sales/transfer
//! history for the three years before the effective date.

use anyhow::Result;

use urar_ingest::Document;
use urar_model::{RuleId, RuleOutcome, Trace, Verdict};

use crate::extract::Scanner;
use crate::extract::dates::appraisal_date;
use crate::extract::narrative::research_narrative;

/// Passes when the research statement appears anywhere in the document
/// text. The effective date and any explanation phrase are extracted and
/// traced for the audit log but do not influence the verdict.
pub fn evaluate(
    document: &Document,
    scanner: &dyn Scanner,
    trace: &mut Trace,
) -> Result<RuleOutcome> {
    match appraisal_date(document, scanner) {
        Some(raw) => trace.info(format!("Effective date of appraisal found: {raw}")),
        None => trace.info("Effective date of appraisal not found."),
    }

    let narrative = research_narrative(document, scanner);
    if let Some(snippet) = &narrative.statement {
        trace.info(format!("Found statement: {snippet}"));
    }
    if let Some(snippet) = &narrative.explanation {
        trace.info(format!("Found explanation: {snippet}"));
    }

    if narrative.statement.is_some() {
        trace.info(
            "Validation passed: appraiser researched transfer/sales history for three \
             years or provided an explanation.",
        );
        Ok(RuleOutcome::new(
            RuleId::SalesHistoryResearch,
            Verdict::Success,
        ))
    } else {
        trace.info(
            "Validation failed: no evidence of three-year sales history research or \
             explanation found.",
        );
        Ok(RuleOutcome::new(
            RuleId::SalesHistoryResearch,
            Verdict::Failed,
        ))
    }
}
