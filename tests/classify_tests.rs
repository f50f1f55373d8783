// Copyright (c) 2025 Pennyplan Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pennyplan::classify::{classify, normalize_id};
use pennyplan::models::{Source, Transaction};
use rust_decimal::Decimal;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn tx(id: &str, source: Source, date: NaiveDate) -> Transaction {
    Transaction {
        id: id.to_string(),
        source,
        amount: Decimal::new(-1200, 2),
        category: Some("Groceries".to_string()),
        merchant_name: Some("Corner Store".to_string()),
        date,
        is_recurring: false,
        parent_transaction_id: None,
        rule: None,
    }
}

fn parent(id: &str, source: Source, date: NaiveDate) -> Transaction {
    let mut t = tx(id, source, date);
    t.is_recurring = true;
    t
}

fn child(id: &str, parent_id: i64, date: NaiveDate) -> Transaction {
    let mut t = tx(id, Source::PlaidSynced, date);
    t.is_recurring = true;
    t.parent_transaction_id = Some(parent_id);
    t
}

#[test]
fn user_prefixed_parent_reconciles_with_numeric_children() {
    let input = vec![
        parent("user-14", Source::UserEntered, d(2024, 1, 1)),
        child("c1", 14, d(2024, 1, 1)),
        child("c2", 14, d(2024, 2, 1)),
    ];
    let result = classify(&input);
    assert_eq!(result.parents.len(), 1);
    assert!(result.parents.contains_key(&14));
    assert_eq!(result.children_by_parent[&14].len(), 2);
    assert!(result.orphans.is_empty());
}

#[test]
fn every_input_transaction_lands_in_exactly_one_bucket() {
    let input = vec![
        tx("a", Source::PlaidSynced, d(2024, 1, 3)),
        parent("7", Source::DatabaseEntered, d(2024, 1, 1)),
        child("c1", 7, d(2024, 1, 5)),
        child("c2", 99, d(2024, 1, 6)),
        tx("b", Source::UserEntered, d(2024, 1, 7)),
    ];
    let result = classify(&input);
    assert_eq!(result.total(), input.len());
}

#[test]
fn duplicate_parent_ids_keep_the_first_seen() {
    let mut first = parent("7", Source::DatabaseEntered, d(2024, 1, 1));
    first.merchant_name = Some("Gym A".to_string());
    let mut second = parent("user-7", Source::UserEntered, d(2024, 2, 1));
    second.merchant_name = Some("Gym B".to_string());

    let result = classify(&[first, second]);
    assert_eq!(result.parents.len(), 1);
    assert_eq!(
        result.parents[&7].merchant_name.as_deref(),
        Some("Gym A")
    );
}

#[test]
fn children_without_a_parent_go_to_the_orphan_bucket() {
    let input = vec![child("c1", 99, d(2024, 1, 5)), child("c2", 99, d(2024, 1, 6))];
    let result = classify(&input);
    assert!(result.parents.is_empty());
    assert_eq!(result.orphans[&99].len(), 2);
}

#[test]
fn children_are_sorted_most_recent_first() {
    let input = vec![
        parent("7", Source::DatabaseEntered, d(2024, 1, 1)),
        child("old", 7, d(2024, 1, 2)),
        child("new", 7, d(2024, 3, 2)),
        child("mid", 7, d(2024, 2, 2)),
    ];
    let result = classify(&input);
    let ids: Vec<&str> = result.children_by_parent[&7]
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["new", "mid", "old"]);
}

#[test]
fn equal_dates_keep_input_order() {
    let input = vec![
        parent("7", Source::DatabaseEntered, d(2024, 1, 1)),
        child("first", 7, d(2024, 2, 1)),
        child("second", 7, d(2024, 2, 1)),
    ];
    let result = classify(&input);
    let ids: Vec<&str> = result.children_by_parent[&7]
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["first", "second"]);
}

#[test]
fn recurring_parent_with_unparseable_id_is_treated_as_standalone() {
    let input = vec![parent("plaid-opaque-xyz", Source::PlaidSynced, d(2024, 1, 1))];
    let result = classify(&input);
    assert!(result.parents.is_empty());
    assert_eq!(result.singles.len(), 1);
}

#[test]
fn parent_without_children_still_appears() {
    let input = vec![parent("user-3", Source::UserEntered, d(2024, 1, 1))];
    let result = classify(&input);
    assert!(result.parents.contains_key(&3));
    assert!(result.children_by_parent.get(&3).is_none());
}

#[test]
fn normalize_id_strips_the_user_prefix_only_for_user_entries() {
    assert_eq!(normalize_id("user-14", Source::UserEntered), Some(14));
    assert_eq!(normalize_id("14", Source::UserEntered), Some(14));
    assert_eq!(normalize_id("14", Source::DatabaseEntered), Some(14));
    assert_eq!(normalize_id("user-14", Source::DatabaseEntered), None);
    assert_eq!(normalize_id("txn_abc123", Source::PlaidSynced), None);
    assert_eq!(normalize_id("user-", Source::UserEntered), None);
}
