//! Date normalization for the numeric formats appraisal reports use.
//!
//! Reports write dates as `M/D/YYYY` or `M/D/YY`. Anything else (including
//! three-digit years, which some OCR passes produce) is not guessed at: it
//! fails with [`DateFormatError`] and the caller decides what that means
//! for the rule's verdict.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use thiserror::Error;

static REPORT_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2,4})$").expect("valid date regex"));

/// Comparable sales must close within this many whole calendar months on or
/// before the appraisal date.
pub const SALE_WINDOW_MONTHS: i32 = 12;

/// A date substring that matches neither supported format.
///
/// Recovered locally by callers: the offending date is logged and excluded
/// from further comparison, never escalated to a run-level error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized date format: {value}")]
pub struct DateFormatError {
    pub value: String,
}

/// Parse a report date, trying month/day/4-digit-year first and falling
/// back to month/day/2-digit-year.
///
/// Two-digit years resolve through the usual pivot: 00-68 land in the
/// 2000s, 69-99 in the 1900s.
pub fn parse_report_date(value: &str) -> Result<NaiveDate, DateFormatError> {
    let unrecognized = || DateFormatError {
        value: value.to_string(),
    };
    let captures = REPORT_DATE_REGEX
        .captures(value.trim())
        .ok_or_else(unrecognized)?;
    let month: u32 = captures[1].parse().map_err(|_| unrecognized())?;
    let day: u32 = captures[2].parse().map_err(|_| unrecognized())?;
    let year_raw = &captures[3];
    let year: i32 = match year_raw.len() {
        4 => year_raw.parse().map_err(|_| unrecognized())?,
        2 => {
            let short: i32 = year_raw.parse().map_err(|_| unrecognized())?;
            if short <= 68 { 2000 + short } else { 1900 + short }
        }
        // Three-digit years match the tolerant scan pattern but neither
        // date format, so they are reported as unrecognized.
        _ => return Err(unrecognized()),
    };
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(unrecognized)
}

/// Whole-calendar-month difference between the appraisal date and a sale
/// date. Positive when the sale precedes the appraisal; the day of month is
/// ignored.
pub fn months_between(appraisal: NaiveDate, sale: NaiveDate) -> i32 {
    (appraisal.year() - sale.year()) * 12 + (appraisal.month() as i32 - sale.month() as i32)
}

/// True when the sale closed within the twelve-month window on or before
/// the appraisal date. A sale dated after the appraisal is out of window.
pub fn within_sale_window(appraisal: NaiveDate, sale: NaiveDate) -> bool {
    (0..=SALE_WINDOW_MONTHS).contains(&months_between(appraisal, sale))
}
