// Copyright (c) 2025 Pennyplan Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{self, Catalogs, ExpenseSummary};
use crate::api::{self, Snapshot};
use crate::draft;
use crate::models::{ContributionFrequency, ProjectionInput};
use crate::projection::{self, Projection};
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, parse_expense, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("calculate", sub)) => calculate(sub)?,
        _ => {}
    }
    Ok(())
}

fn default_input() -> ProjectionInput {
    ProjectionInput {
        savings_goal: Decimal::ZERO,
        timeframe_months: 3,
        contribution_frequency: ContributionFrequency::Weekly,
        start_date: chrono::Utc::now().date_naive(),
        manual_expenses: Vec::new(),
        selected_category_goal_ids: Vec::new(),
        selected_annual_goal_id: None,
        selected_recurring_ids: Vec::new(),
    }
}

fn build_input(sub: &clap::ArgMatches) -> Result<ProjectionInput> {
    let mut input = if sub.get_flag("from-draft") {
        draft::load()?.unwrap_or_else(default_input)
    } else {
        default_input()
    };

    if let Some(goal) = sub.get_one::<String>("goal") {
        input.savings_goal = parse_decimal(goal)?;
    }
    if let Some(months) = sub.get_one::<u32>("months") {
        input.timeframe_months = *months;
    }
    if let Some(freq) = sub.get_one::<String>("frequency") {
        input.contribution_frequency = freq.parse()?;
    }
    if let Some(start) = sub.get_one::<String>("start") {
        input.start_date = parse_date(start)?;
    }
    if let Some(expenses) = sub.get_many::<String>("expense") {
        input.manual_expenses = expenses
            .map(|e| parse_expense(e))
            .collect::<Result<Vec<_>>>()?;
    }
    if let Some(ids) = sub.get_many::<i64>("category-goal") {
        input.selected_category_goal_ids = ids.copied().collect();
    }
    if let Some(id) = sub.get_one::<i64>("annual-goal") {
        input.selected_annual_goal_id = Some(*id);
    }
    if let Some(ids) = sub.get_many::<i64>("recurring") {
        input.selected_recurring_ids = ids.copied().collect();
    }
    Ok(input)
}

#[derive(Serialize)]
struct CalculateOutput<'a> {
    input: &'a ProjectionInput,
    summary: ExpenseSummary,
    projection: Projection,
}

fn calculate(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let input = build_input(sub)?;
    let file = sub.get_one::<String>("file").map(String::as_str);

    // Catalogs are only needed when something was selected from them.
    let has_selections = !input.selected_category_goal_ids.is_empty()
        || input.selected_annual_goal_id.is_some()
        || !input.selected_recurring_ids.is_empty();
    let snapshot = if has_selections || file.is_some() {
        let end = input.start_date
            + chrono::Duration::days(30 * i64::from(input.timeframe_months.max(1)));
        api::load_snapshot(file, input.start_date, end)?
    } else {
        Snapshot::default()
    };

    let catalogs = Catalogs {
        category_goals: &snapshot.category_goals,
        annual_goals: &snapshot.annual_goals,
        recurring: &snapshot.transactions,
    };
    let summary = aggregate::aggregate(&input, &catalogs);
    let result = projection::project(
        input.savings_goal,
        summary.period_total,
        input.timeframe_months,
        input.contribution_frequency,
    );

    if sub.get_flag("save-draft") {
        draft::save(&input)?;
    }

    if !maybe_print_json(
        json_flag,
        jsonl_flag,
        &CalculateOutput {
            input: &input,
            summary,
            projection: result,
        },
    )? {
        print_results(&input, &summary, &result);
    }
    Ok(())
}

fn print_results(input: &ProjectionInput, summary: &ExpenseSummary, result: &Projection) {
    println!(
        "Projection over {} month(s) from {}",
        input.timeframe_months, input.start_date
    );
    println!("Goal: {}", fmt_money(&input.savings_goal));
    println!("Monthly expenses total: {}", fmt_money(&summary.monthly_total));
    println!(
        "Total expenses over period: {}",
        fmt_money(&summary.period_total)
    );
    println!("Net to save (goal - expenses): {}", fmt_money(&result.net_to_save));
    println!(
        "Save {} per interval ({} interval(s), {:?})",
        fmt_money(&result.per_interval),
        result.intervals,
        input.contribution_frequency
    );
    if result.net_to_save < Decimal::ZERO {
        println!(
            "Warning: projected expenses exceed the goal by {}",
            fmt_money(&result.net_to_save.abs())
        );
    }

    let rows = vec![
        vec!["Manual monthly".to_string(), fmt_money(&summary.manual)],
        vec!["Category goals".to_string(), fmt_money(&summary.category)],
        vec!["Recurring (monthly equivalent)".to_string(), fmt_money(&summary.recurring)],
        vec!["Annual goal (period)".to_string(), fmt_money(&summary.annual)],
    ];
    println!("{}", pretty_table(&["Expense source", "Amount"], rows));
}
