// Copyright (c) 2025 Pennyplan Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pennyplan::models::{Frequency, RecurrenceRule};
use pennyplan::recur::{RuleError, expand};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn monthly(day: u32) -> RecurrenceRule {
    RecurrenceRule {
        frequency: Frequency::Monthly,
        week_day: None,
        month_day: Some(day),
        year_month: None,
        year_day: None,
        end_date: None,
    }
}

fn weekly(day: &str) -> RecurrenceRule {
    RecurrenceRule {
        frequency: Frequency::Weekly,
        week_day: Some(day.to_string()),
        month_day: None,
        year_month: None,
        year_day: None,
        end_date: None,
    }
}

fn yearly(month: u32, day: u32) -> RecurrenceRule {
    RecurrenceRule {
        frequency: Frequency::Yearly,
        week_day: None,
        month_day: None,
        year_month: Some(month),
        year_day: Some(day),
        end_date: None,
    }
}

#[test]
fn monthly_rent_on_the_first() {
    let rule = monthly(1);
    let dates = expand(&rule, d(2024, 1, 1), d(2024, 1, 1), d(2024, 4, 30)).unwrap();
    assert_eq!(
        dates,
        vec![d(2024, 1, 1), d(2024, 2, 1), d(2024, 3, 1), d(2024, 4, 1)]
    );
}

#[test]
fn monthly_day_31_clamps_to_short_months() {
    let rule = monthly(31);
    let dates = expand(&rule, d(2024, 1, 1), d(2024, 1, 1), d(2024, 4, 30)).unwrap();
    // 2024 is a leap year, so February clamps to the 29th.
    assert_eq!(
        dates,
        vec![d(2024, 1, 31), d(2024, 2, 29), d(2024, 3, 31), d(2024, 4, 30)]
    );
}

#[test]
fn monthly_day_31_clamps_to_feb_28_outside_leap_years() {
    let rule = monthly(31);
    let dates = expand(&rule, d(2023, 1, 1), d(2023, 2, 1), d(2023, 2, 28)).unwrap();
    assert_eq!(dates, vec![d(2023, 2, 28)]);
}

#[test]
fn weekly_emits_only_the_configured_weekday() {
    let rule = weekly("monday");
    // 2024-01-01 is a Monday.
    let dates = expand(&rule, d(2024, 1, 1), d(2024, 1, 1), d(2024, 1, 31)).unwrap();
    assert_eq!(
        dates,
        vec![
            d(2024, 1, 1),
            d(2024, 1, 8),
            d(2024, 1, 15),
            d(2024, 1, 22),
            d(2024, 1, 29)
        ]
    );
}

#[test]
fn weekly_day_name_is_case_insensitive() {
    let rule = weekly(" Friday ");
    let dates = expand(&rule, d(2024, 1, 1), d(2024, 1, 1), d(2024, 1, 14)).unwrap();
    assert_eq!(dates, vec![d(2024, 1, 5), d(2024, 1, 12)]);
}

#[test]
fn yearly_emits_once_per_year() {
    let mut rule = yearly(7, 4);
    rule.end_date = Some(d(2026, 12, 31));
    let dates = expand(&rule, d(2023, 7, 4), d(2023, 1, 1), d(2025, 12, 31)).unwrap();
    assert_eq!(dates, vec![d(2023, 7, 4), d(2024, 7, 4), d(2025, 7, 4)]);
}

#[test]
fn yearly_day_clamps_within_month() {
    let rule = yearly(2, 31);
    let dates = expand(&rule, d(2023, 1, 1), d(2023, 1, 1), d(2023, 12, 31)).unwrap();
    assert_eq!(dates, vec![d(2023, 2, 28)]);
}

#[test]
fn rule_without_end_date_expires_after_365_days() {
    let rule = monthly(1);
    let dates = expand(&rule, d(2024, 1, 1), d(2024, 1, 1), d(2026, 1, 1)).unwrap();
    assert_eq!(dates.len(), 12);
    assert_eq!(*dates.last().unwrap(), d(2024, 12, 1));
}

#[test]
fn explicit_end_date_stops_expansion() {
    let mut rule = monthly(15);
    rule.end_date = Some(d(2024, 3, 1));
    let dates = expand(&rule, d(2024, 1, 1), d(2024, 1, 1), d(2024, 12, 31)).unwrap();
    assert_eq!(dates, vec![d(2024, 1, 15), d(2024, 2, 15)]);
}

#[test]
fn no_occurrence_precedes_the_anchor() {
    let rule = monthly(1);
    let dates = expand(&rule, d(2024, 3, 15), d(2024, 1, 1), d(2024, 6, 30)).unwrap();
    assert_eq!(dates, vec![d(2024, 4, 1), d(2024, 5, 1), d(2024, 6, 1)]);
}

#[test]
fn expansion_is_deterministic() {
    let rule = weekly("wednesday");
    let a = expand(&rule, d(2024, 1, 1), d(2024, 1, 1), d(2024, 3, 31)).unwrap();
    let b = expand(&rule, d(2024, 1, 1), d(2024, 1, 1), d(2024, 3, 31)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn expansion_is_bounded_by_anchor_and_lifetime() {
    let rule = weekly("sunday");
    let anchor = d(2024, 2, 14);
    let dates = expand(&rule, anchor, d(2023, 1, 1), d(2026, 1, 1)).unwrap();
    let cap = d(2025, 2, 13); // anchor + 365 days
    assert!(!dates.is_empty());
    assert!(dates.iter().all(|&dt| dt >= anchor && dt <= cap));
}

#[test]
fn invalid_month_day_is_rejected() {
    let rule = monthly(0);
    let err = expand(&rule, d(2024, 1, 1), d(2024, 1, 1), d(2024, 12, 31)).unwrap_err();
    assert_eq!(err, RuleError::InvalidMonthDay(Some(0)));

    let rule = monthly(32);
    assert!(expand(&rule, d(2024, 1, 1), d(2024, 1, 1), d(2024, 12, 31)).is_err());
}

#[test]
fn weekly_without_week_day_is_rejected() {
    let mut rule = weekly("monday");
    rule.week_day = None;
    let err = expand(&rule, d(2024, 1, 1), d(2024, 1, 1), d(2024, 12, 31)).unwrap_err();
    assert_eq!(err, RuleError::MissingWeekDay);
}

#[test]
fn unknown_week_day_is_rejected() {
    let rule = weekly("someday");
    assert!(matches!(
        expand(&rule, d(2024, 1, 1), d(2024, 1, 1), d(2024, 12, 31)),
        Err(RuleError::InvalidWeekDay(_))
    ));
}

#[test]
fn yearly_month_out_of_range_is_rejected() {
    let rule = yearly(13, 1);
    let err = expand(&rule, d(2024, 1, 1), d(2024, 1, 1), d(2024, 12, 31)).unwrap_err();
    assert_eq!(err, RuleError::InvalidYearMonth(Some(13)));
}

#[test]
fn garbage_rule_fails_even_for_an_empty_range() {
    let rule = monthly(99);
    // Range entirely before the anchor still validates the rule.
    assert!(expand(&rule, d(2024, 6, 1), d(2024, 1, 1), d(2024, 2, 1)).is_err());
}

#[test]
fn empty_range_yields_no_occurrences() {
    let rule = monthly(1);
    let dates = expand(&rule, d(2024, 1, 1), d(2024, 5, 1), d(2024, 4, 1)).unwrap();
    assert!(dates.is_empty());
}
