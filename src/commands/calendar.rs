// Copyright (c) 2025 Pennyplan Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api;
use crate::calendar::{self, ViewMode};
use crate::utils::{maybe_print_json, parse_date, pretty_table};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
pub struct DayRow {
    pub date: String,
    pub weekday: String,
    pub in_month: bool,
    pub net: String,
    pub transactions: usize,
}

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mode: ViewMode = sub.get_one::<String>("mode").unwrap().parse()?;
    let anchor = match sub.get_one::<String>("anchor") {
        Some(s) => parse_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };
    let file = sub.get_one::<String>("file").map(String::as_str);

    let days = calendar::days_in_view(mode, anchor);
    let start = days.first().map(|d| d.date).unwrap_or(anchor);
    let end = days.last().map(|d| d.date).unwrap_or(anchor);
    let snapshot = api::load_snapshot(file, start, end)?;
    let buckets = calendar::bucket(&snapshot.transactions, start, end);

    let rows: Vec<DayRow> = days
        .iter()
        .map(|day| DayRow {
            date: day.date.to_string(),
            weekday: calendar::weekday_label(chrono::Datelike::weekday(&day.date)).to_string(),
            in_month: day.in_current_month,
            net: format!("{:.2}", buckets.net_for_day(day.date)),
            transactions: buckets.transactions_for(day.date).len(),
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let table_rows = rows
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.weekday.clone(),
                    if r.in_month { "".into() } else { "*".into() },
                    r.net.clone(),
                    r.transactions.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Day", "Adjacent", "Net", "Txs"], table_rows)
        );
        if matches!(mode, ViewMode::Month) {
            println!("* = day from an adjacent month shown for grid completeness");
        }
    }
    Ok(())
}
