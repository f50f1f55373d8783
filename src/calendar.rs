// Copyright (c) 2025 Pennyplan Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Week,
    Month,
}

impl std::str::FromStr for ViewMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(ViewMode::Week),
            "month" => Ok(ViewMode::Month),
            other => Err(anyhow::anyhow!("Invalid mode '{}', expected week|month", other)),
        }
    }
}

/// One cell of a calendar grid. Month grids include leading/trailing days
/// from adjacent months for completeness, flagged `in_current_month = false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub in_current_month: bool,
}

/// The Sunday on or before `date`; weeks render Sunday-first.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Ordered day set for a calendar view anchored at `anchor`.
///
/// Week mode yields exactly 7 days from the Sunday on/before the anchor.
/// Month mode yields whole Sunday-started weeks until the anchor's month is
/// covered.
pub fn days_in_view(mode: ViewMode, anchor: NaiveDate) -> Vec<CalendarDay> {
    match mode {
        ViewMode::Week => {
            let start = start_of_week(anchor);
            (0..7)
                .map(|i| {
                    let date = start + Duration::days(i);
                    CalendarDay {
                        date,
                        in_current_month: date.month() == anchor.month()
                            && date.year() == anchor.year(),
                    }
                })
                .collect()
        }
        ViewMode::Month => {
            let first = anchor.with_day(1).expect("day 1 is always valid");
            let last = crate::utils::last_day_of_month(anchor.year(), anchor.month());
            let mut days = Vec::new();
            let mut cur = start_of_week(first);
            while cur <= last {
                for _ in 0..7 {
                    days.push(CalendarDay {
                        date: cur,
                        in_current_month: cur.month() == anchor.month()
                            && cur.year() == anchor.year(),
                    });
                    cur += Duration::days(1);
                }
            }
            days
        }
    }
}

/// Transactions grouped by calendar day. Dates are day-valued throughout;
/// grouping never consults a clock or timezone.
#[derive(Debug, Clone, Default)]
pub struct DayBuckets {
    buckets: BTreeMap<NaiveDate, Vec<Transaction>>,
}

impl DayBuckets {
    pub fn transactions_for(&self, date: NaiveDate) -> &[Transaction] {
        self.buckets.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Signed total for one day; a day with no transactions nets to zero.
    pub fn net_for_day(&self, date: NaiveDate) -> Decimal {
        self.transactions_for(date)
            .iter()
            .map(|tx| tx.amount)
            .sum()
    }

    pub fn days(&self) -> impl Iterator<Item = (&NaiveDate, &Vec<Transaction>)> {
        self.buckets.iter()
    }
}

/// Groups transactions dated within `[range_start, range_end]` by day. Each
/// day's list keeps input order.
pub fn bucket(
    transactions: &[Transaction],
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> DayBuckets {
    let mut buckets: BTreeMap<NaiveDate, Vec<Transaction>> = BTreeMap::new();
    for tx in transactions {
        if tx.date >= range_start && tx.date <= range_end {
            buckets.entry(tx.date).or_default().push(tx.clone());
        }
    }
    DayBuckets { buckets }
}

/// The next `limit` dated transactions on or after `from`, soonest first.
pub fn upcoming(transactions: &[Transaction], from: NaiveDate, limit: usize) -> Vec<Transaction> {
    let mut list: Vec<Transaction> = transactions
        .iter()
        .filter(|tx| tx.date >= from)
        .cloned()
        .collect();
    list.sort_by(|a, b| a.date.cmp(&b.date));
    list.truncate(limit);
    list
}

/// Short header label for a weekday column, Sunday-first grids.
pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sun",
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
    }
}
