// Copyright (c) 2025 Pennyplan Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::classify::normalize_id;
use crate::models::{
    AnnualGoal, CategoryBudgetGoal, Frequency, ProjectionInput, Transaction,
};
use rust_decimal::Decimal;
use serde::Serialize;

/// Read-only goal/transaction catalogs a projection selects from. These are
/// eventually-consistent snapshots: a selected id with no catalog entry
/// contributes zero rather than failing.
#[derive(Debug, Clone, Copy)]
pub struct Catalogs<'a> {
    pub category_goals: &'a [CategoryBudgetGoal],
    pub annual_goals: &'a [AnnualGoal],
    pub recurring: &'a [Transaction],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpenseSummary {
    /// Sum of ad hoc manual monthly expense lines.
    pub manual: Decimal,
    /// Sum of selected category goals' monthly amounts.
    pub category: Decimal,
    /// Selected recurring transactions normalized to a monthly equivalent.
    pub recurring: Decimal,
    /// Selected annual goal prorated over the timeframe. This is already a
    /// period total and must not be scaled by months again.
    pub annual: Decimal,
    /// manual + category + recurring, all monthly-rate components.
    pub monthly_total: Decimal,
    /// monthly_total x timeframe months + annual.
    pub period_total: Decimal,
}

/// Monthly-equivalent magnitude of a recurring transaction: weekly x4,
/// monthly x1, yearly /12, over the absolute amount. A parent without a rule
/// counts as monthly.
pub fn monthly_equivalent(tx: &Transaction) -> Decimal {
    let amount = tx.amount.abs();
    match tx.rule.as_ref().map(|r| r.frequency) {
        Some(Frequency::Weekly) => amount * Decimal::from(4),
        Some(Frequency::Monthly) | None => amount,
        Some(Frequency::Yearly) => amount / Decimal::from(12),
    }
}

/// Combines the four expense sources of a projection into one summary.
/// Purely additive and order-independent over the selections.
pub fn aggregate(input: &ProjectionInput, catalogs: &Catalogs<'_>) -> ExpenseSummary {
    let months = Decimal::from(input.timeframe_months);

    let manual: Decimal = input.manual_expenses.iter().map(|e| e.amount).sum();

    let category: Decimal = input
        .selected_category_goal_ids
        .iter()
        .filter_map(|id| catalogs.category_goals.iter().find(|g| g.id == *id))
        .map(|g| g.monthly_amount)
        .sum();

    let recurring: Decimal = input
        .selected_recurring_ids
        .iter()
        .filter_map(|id| {
            catalogs
                .recurring
                .iter()
                .find(|tx| normalize_id(&tx.id, tx.source) == Some(*id))
        })
        .map(monthly_equivalent)
        .sum();

    let annual = input
        .selected_annual_goal_id
        .and_then(|id| catalogs.annual_goals.iter().find(|g| g.id == id))
        .map(|g| g.amount / Decimal::from(12) * months)
        .unwrap_or(Decimal::ZERO);

    let monthly_total = manual + category + recurring;
    ExpenseSummary {
        manual,
        category,
        recurring,
        annual,
        monthly_total,
        period_total: monthly_total * months + annual,
    }
}
