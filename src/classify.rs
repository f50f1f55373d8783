// Copyright (c) 2025 Pennyplan Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Source, Transaction};
use std::collections::BTreeMap;

/// Maps a raw upstream id into the shared numeric id space.
///
/// User-entered records arrive with ids like `user-14` while the recurring
/// parent links on children are plain numbers; every map lookup goes through
/// this normalization so the two spaces reconcile in one place.
pub fn normalize_id(raw: &str, source: Source) -> Option<i64> {
    let trimmed = raw.trim();
    let stripped = match source {
        Source::UserEntered => trimmed.strip_prefix("user-").unwrap_or(trimmed),
        Source::DatabaseEntered | Source::PlaidSynced => trimmed,
    };
    stripped.parse::<i64>().ok()
}

/// Result of partitioning a flat, mixed-source transaction list.
///
/// Every input transaction lands in exactly one place: `singles`, a parent
/// slot, a child list, or an orphan list (children whose parent id matched
/// nothing in the input).
#[derive(Debug, Clone, Default)]
pub struct Classified {
    pub singles: Vec<Transaction>,
    pub parents: BTreeMap<i64, Transaction>,
    pub children_by_parent: BTreeMap<i64, Vec<Transaction>>,
    pub orphans: BTreeMap<i64, Vec<Transaction>>,
}

impl Classified {
    pub fn total(&self) -> usize {
        self.singles.len()
            + self.parents.len()
            + self.children_by_parent.values().map(Vec::len).sum::<usize>()
            + self.orphans.values().map(Vec::len).sum::<usize>()
    }

    /// Recurring parents eligible for projection selection, in id order.
    pub fn recurring_parents(&self) -> impl Iterator<Item = (&i64, &Transaction)> {
        self.parents.iter()
    }
}

pub fn classify(transactions: &[Transaction]) -> Classified {
    let mut out = Classified::default();
    let mut children: BTreeMap<i64, Vec<Transaction>> = BTreeMap::new();

    for tx in transactions {
        if tx.is_recurring_child() {
            let parent_id = tx.parent_transaction_id.unwrap_or_default();
            children.entry(parent_id).or_default().push(tx.clone());
        } else if tx.is_recurring_parent() {
            match normalize_id(&tx.id, tx.source) {
                // Duplicate emissions from upstream keep the first instance.
                Some(id) => {
                    out.parents.entry(id).or_insert_with(|| tx.clone());
                }
                // A parent outside the numeric id space can never be
                // referenced by a child; surface it standalone.
                None => out.singles.push(tx.clone()),
            }
        } else {
            out.singles.push(tx.clone());
        }
    }

    for (parent_id, mut list) in children {
        // Descending by date; Vec::sort_by is stable so ties keep input order.
        list.sort_by(|a, b| b.date.cmp(&a.date));
        if out.parents.contains_key(&parent_id) {
            out.children_by_parent.insert(parent_id, list);
        } else {
            out.orphans.insert(parent_id, list);
        }
    }

    out
}
