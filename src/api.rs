// Copyright (c) 2025 Pennyplan Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{
    AnnualGoal, CategoryBudgetGoal, CategoryDef, Frequency, RecurrenceRule, Source, Transaction,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const UA: &str = concat!(
    "pennyplan/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/pennyplan/pennyplan)"
);

pub const API_URL_ENV: &str = "PENNYPLAN_API_URL";
pub const API_TOKEN_ENV: &str = "PENNYPLAN_API_TOKEN";

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

/// One transaction record as emitted by the backend, shared across the
/// plaid/db/user/recurring response arrays. Recurrence columns are flat on
/// the wire and folded into a `RecurrenceRule` locally.
#[derive(Debug, Clone, Deserialize)]
pub struct WireTransaction {
    pub transaction_id: String,
    pub amount: Decimal,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub merchant_name: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub parent_transaction_id: Option<i64>,
    #[serde(default)]
    pub frequency_type: Option<Frequency>,
    #[serde(default)]
    pub week_day: Option<String>,
    #[serde(default)]
    pub month_day: Option<u32>,
    #[serde(default)]
    pub year_month: Option<u32>,
    #[serde(default)]
    pub year_day: Option<u32>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl WireTransaction {
    pub fn into_transaction(self, source: Source) -> Transaction {
        let rule = self.frequency_type.map(|frequency| RecurrenceRule {
            frequency,
            week_day: self.week_day,
            month_day: self.month_day,
            year_month: self.year_month,
            year_day: self.year_day,
            end_date: self.end_date,
        });
        Transaction {
            id: self.transaction_id,
            source,
            amount: self.amount,
            category: self.category,
            merchant_name: self.merchant_name,
            date: self.date,
            is_recurring: self.is_recurring || rule.is_some(),
            parent_transaction_id: self.parent_transaction_id,
            rule,
        }
    }
}

/// Response body of `GET /user_transactions/?start_date=&end_date=`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionsResponse {
    #[serde(default)]
    pub plaid_transactions: Vec<WireTransaction>,
    #[serde(default)]
    pub db_transactions: Vec<WireTransaction>,
    #[serde(default)]
    pub user_transactions: Vec<WireTransaction>,
    #[serde(default)]
    pub recurring_transactions: Vec<WireTransaction>,
}

impl TransactionsResponse {
    /// Flattens the per-source arrays into one list, tagging each record with
    /// its source so later id normalization knows the prefix scheme.
    pub fn into_transactions(self) -> Vec<Transaction> {
        let mut out = Vec::new();
        out.extend(
            self.plaid_transactions
                .into_iter()
                .map(|t| t.into_transaction(Source::PlaidSynced)),
        );
        out.extend(
            self.db_transactions
                .into_iter()
                .map(|t| t.into_transaction(Source::DatabaseEntered)),
        );
        out.extend(
            self.user_transactions
                .into_iter()
                .map(|t| t.into_transaction(Source::UserEntered)),
        );
        out.extend(
            self.recurring_transactions
                .into_iter()
                .map(|t| t.into_transaction(Source::UserEntered)),
        );
        out
    }
}

#[derive(Debug, Clone, Deserialize)]
struct WireGoal {
    id: i64,
    #[serde(default)]
    goal_name: Option<String>,
    goal_amount: Decimal,
    #[serde(default)]
    category_name: Option<String>,
    #[serde(default)]
    color: Option<String>,
}

/// Everything one view computes over: a transaction window plus the goal and
/// category catalogs, fetched together and treated as an immutable snapshot.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,
    pub category_goals: Vec<CategoryBudgetGoal>,
    pub annual_goals: Vec<AnnualGoal>,
    pub categories: Vec<CategoryDef>,
}

/// On-disk snapshot: the transactions response plus goal/category catalogs in
/// one JSON document, so every command works without a backend.
#[derive(Debug, Clone, Default, Deserialize)]
struct SnapshotFile {
    #[serde(flatten)]
    transactions: TransactionsResponse,
    #[serde(default)]
    category_goals: Vec<WireGoal>,
    #[serde(default)]
    annual_goals: Vec<WireGoal>,
    #[serde(default)]
    categories: Vec<CategoryDef>,
}

fn category_goal(g: WireGoal) -> CategoryBudgetGoal {
    CategoryBudgetGoal {
        id: g.id,
        category_name: g.category_name.or(g.goal_name).unwrap_or_default(),
        monthly_amount: g.goal_amount,
        color_hint: g.color,
    }
}

fn annual_goal(g: WireGoal) -> AnnualGoal {
    AnnualGoal {
        id: g.id,
        name: g.goal_name.or(g.category_name).unwrap_or_default(),
        amount: g.goal_amount,
    }
}

pub fn load_snapshot_file(path: &Path) -> Result<Snapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read snapshot file {}", path.display()))?;
    let file: SnapshotFile = serde_json::from_str(&raw)
        .with_context(|| format!("Parse snapshot file {}", path.display()))?;
    Ok(Snapshot {
        transactions: file.transactions.into_transactions(),
        category_goals: file.category_goals.into_iter().map(category_goal).collect(),
        annual_goals: file.annual_goals.into_iter().map(annual_goal).collect(),
        categories: file.categories,
    })
}

pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn from_env() -> Result<ApiClient> {
        let base_url = std::env::var(API_URL_ENV).with_context(|| {
            format!(
                "No snapshot file given and {} is not set; pass --file or configure the API",
                API_URL_ENV
            )
        })?;
        Ok(ApiClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: std::env::var(API_TOKEN_ENV).ok(),
            client: http_client()?,
        })
    }

    fn get<T: serde::de::DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.get(&url).query(query);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        let resp = req
            .send()
            .with_context(|| format!("GET {}", url))?
            .error_for_status()
            .with_context(|| format!("GET {}", url))?;
        resp.json::<T>().with_context(|| format!("Decode {}", url))
    }

    pub fn fetch_transactions(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Transaction>> {
        let resp: TransactionsResponse = self.get(
            "/user_transactions/",
            &[
                ("start_date", start.to_string()),
                ("end_date", end.to_string()),
            ],
        )?;
        Ok(resp.into_transactions())
    }

    pub fn fetch_category_goals(&self) -> Result<Vec<CategoryBudgetGoal>> {
        let goals: Vec<WireGoal> =
            self.get("/budget-goals/", &[("goal_type", "category".to_string())])?;
        Ok(goals.into_iter().map(category_goal).collect())
    }

    pub fn fetch_annual_goals(&self) -> Result<Vec<AnnualGoal>> {
        let goals: Vec<WireGoal> =
            self.get("/budget-goals/", &[("goal_type", "annual".to_string())])?;
        Ok(goals.into_iter().map(annual_goal).collect())
    }

    pub fn fetch_categories(&self) -> Result<Vec<CategoryDef>> {
        self.get("/user_categories/", &[])
    }

    pub fn fetch_snapshot(&self, start: NaiveDate, end: NaiveDate) -> Result<Snapshot> {
        Ok(Snapshot {
            transactions: self.fetch_transactions(start, end)?,
            category_goals: self.fetch_category_goals()?,
            annual_goals: self.fetch_annual_goals()?,
            categories: self.fetch_categories()?,
        })
    }
}

/// Loads the working snapshot for a command: a local JSON file when `--file`
/// was given, otherwise a fetch from the configured backend.
pub fn load_snapshot(file: Option<&str>, start: NaiveDate, end: NaiveDate) -> Result<Snapshot> {
    match file {
        Some(path) => load_snapshot_file(Path::new(path)),
        None => ApiClient::from_env()?.fetch_snapshot(start, end),
    }
}
