//! Rule: every comparable sale closed within twelve months of the
//! appraisal date.

use anyhow::Result;

use urar_ingest::Document;
use urar_model::{RuleId, RuleOutcome, Trace, Verdict};

use crate::extract::Scanner;
use crate::extract::dates::{appraisal_date, sale_dates};
use crate::normalize::{parse_report_date, within_sale_window};

/// Needs an appraisal date and at least one sale date. Every sale date that
/// parses must land in the 0..=12 whole-month window on or before the
/// appraisal date; one that does not parse counts against the verdict
/// rather than being dropped, since an unreadable date cannot prove
/// recency.
pub fn evaluate(
    document: &Document,
    scanner: &dyn Scanner,
    trace: &mut Trace,
) -> Result<RuleOutcome> {
    let Some(appraisal_raw) = appraisal_date(document, scanner) else {
        trace.info("Appraisal date not found.");
        return Ok(failed());
    };
    trace.info(format!("Appraisal date found: {appraisal_raw}"));

    let appraisal = match parse_report_date(&appraisal_raw) {
        Ok(date) => date,
        Err(_) => {
            trace.info("Appraisal date format not recognized.");
            return Ok(failed());
        }
    };

    let sales = sale_dates(document, scanner);
    if sales.is_empty() {
        trace.info("No comparable sale dates found.");
        return Ok(failed());
    }
    trace.info(format!("Comparable sale dates found: {}", sales.join(", ")));

    let mut all_within_window = true;
    for raw in &sales {
        match parse_report_date(raw) {
            Err(_) => {
                trace.info(format!("Sale date format not recognized: {raw}"));
                all_within_window = false;
            }
            Ok(sale) => {
                if within_sale_window(appraisal, sale) {
                    trace.info(format!(
                        "Sale date {raw} is within 12 months of appraisal date {appraisal_raw}."
                    ));
                } else {
                    trace.info(format!(
                        "Sale date {raw} is NOT within 12 months of appraisal date {appraisal_raw}."
                    ));
                    all_within_window = false;
                }
            }
        }
    }

    if all_within_window {
        trace.info(
            "Validation passed: all comparable sales show a sold date of twelve (12) \
             months or less from the date of the appraisal.",
        );
        Ok(RuleOutcome::new(
            RuleId::ComparableSaleDates,
            Verdict::Success,
        ))
    } else {
        trace.info(
            "Validation failed: not all comparable sales are within 12 months of the \
             appraisal date.",
        );
        Ok(failed())
    }
}

fn failed() -> RuleOutcome {
    RuleOutcome::new(RuleId::ComparableSaleDates, Verdict::Failed)
}
