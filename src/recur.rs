// Copyright (c) 2025 Pennyplan Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Frequency, RecurrenceRule};
use crate::utils::last_day_of_month;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use thiserror::Error;

/// A rule that is active with no explicit end date expires exactly this many
/// days after its anchor.
pub const DEFAULT_RULE_LIFETIME_DAYS: i64 = 365;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("Weekly rule is missing a week day")]
    MissingWeekDay,
    #[error("Invalid week day '{0}'")]
    InvalidWeekDay(String),
    #[error("Monthly rule needs a month day in 1-31, got {0:?}")]
    InvalidMonthDay(Option<u32>),
    #[error("Yearly rule needs a month in 1-12, got {0:?}")]
    InvalidYearMonth(Option<u32>),
    #[error("Yearly rule needs a day in 1-31, got {0:?}")]
    InvalidYearDay(Option<u32>),
}

/// Expands a recurrence rule into the concrete occurrence dates that fall
/// within `[range_start, range_end]`.
///
/// Occurrences never precede the anchor and never pass
/// `min(range_end, end_date or anchor + 365 days)`. A `month_day`/`year_day`
/// longer than the target month clamps to that month's last day. The result
/// is sorted ascending and depends only on the arguments; "today" plays no
/// part.
pub fn expand(
    rule: &RecurrenceRule,
    anchor: NaiveDate,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Result<Vec<NaiveDate>, RuleError> {
    let rule_end = rule
        .end_date
        .unwrap_or(anchor + Duration::days(DEFAULT_RULE_LIFETIME_DAYS));
    let end = range_end.min(rule_end);
    let start = range_start.max(anchor);

    let mut out = Vec::new();
    if start > end {
        // Validate anyway so a garbage rule never silently expands to nothing.
        validate(rule)?;
        return Ok(out);
    }

    match rule.frequency {
        Frequency::Weekly => {
            let target = parse_week_day(rule)?;
            let mut d = start;
            while d.weekday() != target {
                d += Duration::days(1);
            }
            while d <= end {
                out.push(d);
                d += Duration::days(7);
            }
        }
        Frequency::Monthly => {
            let day = month_day(rule)?;
            let (mut year, mut month) = (start.year(), start.month());
            loop {
                let date = clamped_date(year, month, day);
                if date > end {
                    break;
                }
                if date >= start {
                    out.push(date);
                }
                (year, month) = next_month(year, month);
            }
        }
        Frequency::Yearly => {
            let (month, day) = year_anchor(rule)?;
            for year in start.year()..=end.year() {
                let date = clamped_date(year, month, day);
                if date >= start && date <= end {
                    out.push(date);
                }
            }
        }
    }
    Ok(out)
}

fn validate(rule: &RecurrenceRule) -> Result<(), RuleError> {
    match rule.frequency {
        Frequency::Weekly => parse_week_day(rule).map(|_| ()),
        Frequency::Monthly => month_day(rule).map(|_| ()),
        Frequency::Yearly => year_anchor(rule).map(|_| ()),
    }
}

fn parse_week_day(rule: &RecurrenceRule) -> Result<Weekday, RuleError> {
    let raw = rule.week_day.as_deref().ok_or(RuleError::MissingWeekDay)?;
    raw.trim()
        .parse::<Weekday>()
        .map_err(|_| RuleError::InvalidWeekDay(raw.to_string()))
}

fn month_day(rule: &RecurrenceRule) -> Result<u32, RuleError> {
    match rule.month_day {
        Some(d) if (1..=31).contains(&d) => Ok(d),
        other => Err(RuleError::InvalidMonthDay(other)),
    }
}

fn year_anchor(rule: &RecurrenceRule) -> Result<(u32, u32), RuleError> {
    let month = match rule.year_month {
        Some(m) if (1..=12).contains(&m) => m,
        other => return Err(RuleError::InvalidYearMonth(other)),
    };
    let day = match rule.year_day {
        Some(d) if (1..=31).contains(&d) => d,
        other => return Err(RuleError::InvalidYearDay(other)),
    };
    Ok((month, day))
}

/// Day-of-month beyond the month's length clamps to the month's last day, so
/// a 31st-of-month rule lands on Feb 28/29 rather than rolling over.
fn clamped_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| last_day_of_month(year, month))
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}
