//! Tests for the date normalizer and the sale-recency window.

use chrono::NaiveDate;
use proptest::prelude::*;

use urar_validate::{SALE_WINDOW_MONTHS, months_between, parse_report_date, within_sale_window};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

#[test]
fn parses_four_digit_years() {
    assert_eq!(
        parse_report_date("03/15/2024").expect("parse"),
        date(2024, 3, 15)
    );
    assert_eq!(
        parse_report_date("3/5/2024").expect("parse unpadded"),
        date(2024, 3, 5)
    );
}

#[test]
fn parses_two_digit_years_through_the_pivot() {
    assert_eq!(
        parse_report_date("03/15/23").expect("parse"),
        date(2023, 3, 15)
    );
    assert_eq!(
        parse_report_date("03/01/22").expect("parse"),
        date(2022, 3, 1)
    );
    // Pivot edges: 68 lands in the 2000s, 69 in the 1900s.
    assert_eq!(
        parse_report_date("01/01/68").expect("parse"),
        date(2068, 1, 1)
    );
    assert_eq!(
        parse_report_date("01/01/69").expect("parse"),
        date(1969, 1, 1)
    );
}

#[test]
fn rejects_unrecognized_formats() {
    // Three-digit years match the scan pattern but neither date format.
    assert!(parse_report_date("03/15/202").is_err());
    assert!(parse_report_date("2024-03-15").is_err());
    assert!(parse_report_date("March 15, 2024").is_err());
    assert!(parse_report_date("").is_err());
    // Impossible calendar dates are rejected, not clamped.
    assert!(parse_report_date("02/30/2024").is_err());
    assert!(parse_report_date("13/01/2024").is_err());
    assert!(parse_report_date("00/10/2024").is_err());
}

#[test]
fn error_carries_the_offending_value() {
    let error = parse_report_date("99/99/9999").expect_err("invalid date");
    assert_eq!(error.value, "99/99/9999");
}

#[test]
fn month_difference_ignores_day_of_month() {
    let appraisal = date(2024, 3, 15);
    assert_eq!(months_between(appraisal, date(2024, 3, 1)), 0);
    assert_eq!(months_between(appraisal, date(2023, 3, 31)), 12);
    assert_eq!(months_between(appraisal, date(2023, 2, 1)), 13);
    assert_eq!(months_between(appraisal, date(2024, 4, 1)), -1);
}

#[test]
fn window_boundaries() {
    let appraisal = date(2024, 3, 15);
    // Exactly twelve months before is still within the window.
    assert!(within_sale_window(appraisal, date(2023, 3, 15)));
    // Thirteen months before is not.
    assert!(!within_sale_window(appraisal, date(2023, 2, 15)));
    // Same month counts as zero.
    assert!(within_sale_window(appraisal, appraisal));
    // A sale after the appraisal date is out of window.
    assert!(!within_sale_window(appraisal, date(2024, 4, 1)));
}

proptest! {
    /// Any valid month/day/4-digit-year string round-trips exactly.
    #[test]
    fn four_digit_round_trip(year in 1970i32..=2068, month in 1u32..=12, day in 1u32..=28) {
        let raw = format!("{month:02}/{day:02}/{year}");
        let parsed = parse_report_date(&raw).expect("valid date must parse");
        prop_assert_eq!(parsed, date(year, month, day));
    }

    /// Two-digit years always resolve through the pivot.
    #[test]
    fn two_digit_years_resolve(year in 0i32..=99, month in 1u32..=12, day in 1u32..=28) {
        let raw = format!("{month:02}/{day:02}/{year:02}");
        let expected_year = if year <= 68 { 2000 + year } else { 1900 + year };
        let parsed = parse_report_date(&raw).expect("valid date must parse");
        prop_assert_eq!(parsed, date(expected_year, month, day));
    }

    /// A date is always within the window of itself, and the window is
    /// exactly 0..=12 whole months.
    #[test]
    fn window_matches_month_difference(
        year in 1990i32..=2060,
        month in 1u32..=12,
        day in 1u32..=28,
        offset in -24i32..=36,
    ) {
        let appraisal = date(year, month, day);
        let total = (year * 12 + month as i32 - 1) - offset;
        let sale = date(total.div_euclid(12), (total.rem_euclid(12) + 1) as u32, day);
        prop_assert_eq!(months_between(appraisal, sale), offset);
        prop_assert_eq!(
            within_sale_window(appraisal, sale),
            (0..=SALE_WINDOW_MONTHS).contains(&offset)
        );
    }
}
