// Copyright (c) 2025 Pennyplan Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Where a transaction record originated. Plaid-synced records are read-only;
/// database- and user-entered records are editable by the end user. The source
/// also determines how the raw id maps into the numeric id space (user-entered
/// ids carry a `user-` prefix on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    PlaidSynced,
    DatabaseEntered,
    UserEntered,
}

impl Source {
    pub fn is_editable(&self) -> bool {
        !matches!(self, Source::PlaidSynced)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Monthly,
    Yearly,
}

/// Rule definition carried by a recurring parent. Anchor parameters are kept
/// in their wire form; validation happens at expansion time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    /// Weekly rules: day name, e.g. "monday".
    pub week_day: Option<String>,
    /// Monthly rules: 1-31.
    pub month_day: Option<u32>,
    /// Yearly rules: 1-12.
    pub year_month: Option<u32>,
    /// Yearly rules: 1-31.
    pub year_day: Option<u32>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Raw id as issued by the upstream source, e.g. "user-14" or "1048".
    pub id: String,
    pub source: Source,
    /// Signed value; negative = expense, positive = income. The sign is fixed
    /// at entry time and never re-derived.
    pub amount: Decimal,
    pub category: Option<String>,
    pub merchant_name: Option<String>,
    pub date: NaiveDate,
    pub is_recurring: bool,
    /// Present only on a recurring child, referencing the numeric id of its
    /// parent rule definition.
    pub parent_transaction_id: Option<i64>,
    /// Present only on a recurring parent.
    pub rule: Option<RecurrenceRule>,
}

impl Transaction {
    pub fn is_recurring_parent(&self) -> bool {
        self.is_recurring && self.parent_transaction_id.is_none()
    }

    pub fn is_recurring_child(&self) -> bool {
        self.is_recurring && self.parent_transaction_id.is_some()
    }

    pub fn display_label(&self) -> &str {
        self.merchant_name
            .as_deref()
            .or(self.category.as_deref())
            .unwrap_or("(unlabeled)")
    }
}

/// A user-defined monthly spending ceiling for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBudgetGoal {
    pub id: i64,
    pub category_name: String,
    pub monthly_amount: Decimal,
    pub color_hint: Option<String>,
}

/// A yearly target; prorated by 12 when included in a shorter window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualGoal {
    pub id: i64,
    pub name: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDef {
    pub name: String,
    pub color: String,
}

/// An ad hoc monthly expense line entered directly into a projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualExpense {
    pub description: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionFrequency {
    Weekly,
    Biweekly,
    Monthly,
}

impl ContributionFrequency {
    pub fn intervals_per_month(&self) -> u32 {
        match self {
            ContributionFrequency::Weekly => 4,
            ContributionFrequency::Biweekly => 2,
            ContributionFrequency::Monthly => 1,
        }
    }
}

impl std::str::FromStr for ContributionFrequency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(ContributionFrequency::Weekly),
            "biweekly" => Ok(ContributionFrequency::Biweekly),
            "monthly" => Ok(ContributionFrequency::Monthly),
            other => Err(anyhow::anyhow!(
                "Invalid frequency '{}', expected weekly|biweekly|monthly",
                other
            )),
        }
    }
}

/// The full set of inputs for one projection run. Built fresh per calculation
/// and never mutated; recomputation is a re-invocation, not an update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub savings_goal: Decimal,
    pub timeframe_months: u32,
    pub contribution_frequency: ContributionFrequency,
    pub start_date: NaiveDate,
    pub manual_expenses: Vec<ManualExpense>,
    pub selected_category_goal_ids: Vec<i64>,
    pub selected_annual_goal_id: Option<i64>,
    pub selected_recurring_ids: Vec<i64>,
}

/// Fallback when a category has no user-assigned color.
pub const FALLBACK_CATEGORY_COLOR: &str = "#9E9E9E";

/// Category -> color lookup keyed on the trimmed, lowercased name, built once
/// per catalog fetch.
#[derive(Debug, Clone, Default)]
pub struct CategoryColors {
    map: HashMap<String, String>,
}

impl CategoryColors {
    pub fn from_defs(defs: &[CategoryDef]) -> Self {
        let mut map = HashMap::new();
        for def in defs {
            map.insert(def.name.trim().to_lowercase(), def.color.clone());
        }
        CategoryColors { map }
    }

    pub fn color_for(&self, category: &str) -> &str {
        self.map
            .get(&category.trim().to_lowercase())
            .map(String::as_str)
            .unwrap_or(FALLBACK_CATEGORY_COLOR)
    }
}
