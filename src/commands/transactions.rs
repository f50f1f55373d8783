// Copyright (c) 2025 Pennyplan Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api;
use crate::calendar;
use crate::classify::classify;
use crate::models::{CategoryColors, Source, Transaction};
use crate::utils::{maybe_print_json, parse_date, pretty_table};
use anyhow::Result;
use chrono::Duration;
use serde::Serialize;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(sub)?,
        Some(("upcoming", sub)) => upcoming(sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub kind: String,
    pub id: String,
    pub date: String,
    pub label: String,
    pub category: String,
    pub color: String,
    pub amount: String,
    pub source: String,
    pub occurrences: usize,
}

fn source_tag(source: Source) -> &'static str {
    match source {
        Source::PlaidSynced => "plaid",
        Source::DatabaseEntered => "database",
        Source::UserEntered => "user",
    }
}

fn row(kind: String, tx: &Transaction, colors: &CategoryColors, occurrences: usize) -> TransactionRow {
    let category = tx.category.clone().unwrap_or_default();
    TransactionRow {
        kind,
        id: tx.id.clone(),
        date: tx.date.to_string(),
        label: tx.display_label().to_string(),
        color: colors.color_for(&category).to_string(),
        category,
        amount: format!("{:.2}", tx.amount),
        source: source_tag(tx.source).to_string(),
        occurrences,
    }
}

fn list(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let today = chrono::Utc::now().date_naive();
    let from = match sub.get_one::<String>("from") {
        Some(s) => parse_date(s)?,
        None => today - Duration::days(30),
    };
    let to = match sub.get_one::<String>("to") {
        Some(s) => parse_date(s)?,
        None => today,
    };
    let file = sub.get_one::<String>("file").map(String::as_str);

    let snapshot = api::load_snapshot(file, from, to)?;
    let colors = CategoryColors::from_defs(&snapshot.categories);
    let classified = classify(&snapshot.transactions);

    let mut rows = Vec::new();
    for (id, parent) in classified.recurring_parents() {
        let occurrences = classified
            .children_by_parent
            .get(id)
            .map(Vec::len)
            .unwrap_or(0);
        rows.push(row("recurring".into(), parent, &colors, occurrences));
    }
    for tx in &classified.singles {
        rows.push(row("single".into(), tx, &colors, 0));
    }
    for (parent_id, children) in &classified.orphans {
        for tx in children {
            rows.push(row(format!("orphan(parent={})", parent_id), tx, &colors, 0));
        }
    }
    rows.sort_by(|a, b| b.date.cmp(&a.date));

    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let table_rows = rows
            .iter()
            .map(|r| {
                vec![
                    r.kind.clone(),
                    r.id.clone(),
                    r.date.clone(),
                    r.label.clone(),
                    r.category.clone(),
                    r.color.clone(),
                    r.amount.clone(),
                    r.source.clone(),
                    r.occurrences.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Kind", "Id", "Date", "Label", "Category", "Color", "Amount", "Source", "Occurrences"],
                table_rows,
            )
        );
    }
    Ok(())
}

fn upcoming(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let from = match sub.get_one::<String>("from") {
        Some(s) => parse_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };
    let limit = *sub.get_one::<usize>("limit").unwrap_or(&10);
    let file = sub.get_one::<String>("file").map(String::as_str);

    // Same 30-day lookahead window the dashboard's upcoming-bills list uses.
    let snapshot = api::load_snapshot(file, from, from + Duration::days(30))?;
    let colors = CategoryColors::from_defs(&snapshot.categories);
    let list = calendar::upcoming(&snapshot.transactions, from, limit);

    let rows: Vec<TransactionRow> = list
        .iter()
        .map(|tx| row("upcoming".into(), tx, &colors, 0))
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let table_rows = rows
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.label.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.source.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Label", "Category", "Amount", "Source"], table_rows)
        );
    }
    Ok(())
}
