// Copyright (c) 2025 Pennyplan Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Frequency, RecurrenceRule};
use crate::recur;
use crate::utils::{maybe_print_json, parse_date, pretty_table};
use anyhow::Result;
use chrono::Datelike;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("preview", sub)) => preview(sub)?,
        _ => {}
    }
    Ok(())
}

fn parse_frequency(s: &str) -> Result<Frequency> {
    match s.trim().to_lowercase().as_str() {
        "weekly" => Ok(Frequency::Weekly),
        "monthly" => Ok(Frequency::Monthly),
        "yearly" => Ok(Frequency::Yearly),
        other => Err(anyhow::anyhow!(
            "Invalid frequency '{}', expected weekly|monthly|yearly",
            other
        )),
    }
}

fn preview(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let frequency = parse_frequency(sub.get_one::<String>("frequency").unwrap())?;
    let anchor = parse_date(sub.get_one::<String>("anchor").unwrap())?;
    let from = parse_date(sub.get_one::<String>("from").unwrap())?;
    let to = parse_date(sub.get_one::<String>("to").unwrap())?;
    let end_date = sub
        .get_one::<String>("end-date")
        .map(|s| parse_date(s))
        .transpose()?;

    let rule = RecurrenceRule {
        frequency,
        week_day: sub.get_one::<String>("week-day").cloned(),
        month_day: sub.get_one::<u32>("month-day").copied(),
        year_month: sub.get_one::<u32>("year-month").copied(),
        year_day: sub.get_one::<u32>("year-day").copied(),
        end_date,
    };

    let dates = recur::expand(&rule, anchor, from, to)?;
    let iso: Vec<String> = dates.iter().map(|d| d.to_string()).collect();
    if !maybe_print_json(json_flag, jsonl_flag, &iso)? {
        let rows = dates
            .iter()
            .map(|d| vec![d.to_string(), format!("{:?}", d.weekday())])
            .collect();
        println!("{}", pretty_table(&["Date", "Weekday"], rows));
        println!("{} occurrence(s) between {} and {}", dates.len(), from, to);
    }
    Ok(())
}
