// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Kind, TransactionRecord};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// One ranked slice of the category breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySlice {
    pub label: String,
    pub total: f64,
}

pub const OTHERS_LABEL: &str = "Others";

/// Accumulate spend per category (Expense and Household records only —
/// income never counts toward the spend breakdown), sort descending, keep
/// the top `limit` and collapse the rest into a synthetic "Others" slice.
/// "Others" is only emitted when its sum is positive.
///
/// First-encountered order is tracked explicitly so ties at the cutoff are
/// deterministic regardless of hash iteration order.
pub fn rank_categories(records: &[&TransactionRecord], limit: usize) -> Vec<CategorySlice> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for r in records {
        if !matches!(r.kind, Kind::Expense | Kind::Household) {
            continue;
        }
        let label = r.category.as_str();
        if !totals.contains_key(label) {
            order.push(label);
        }
        *totals.entry(label).or_insert(0.0) += r.amount;
    }

    let mut slices: Vec<CategorySlice> = order
        .into_iter()
        .map(|label| CategorySlice {
            label: label.to_string(),
            total: totals[label],
        })
        .collect();
    // Stable sort keeps first-encountered order among equal totals.
    slices.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));

    if slices.len() > limit {
        let rest: f64 = slices[limit..].iter().map(|s| s.total).sum();
        slices.truncate(limit);
        if rest > 0.0 {
            slices.push(CategorySlice {
                label: OTHERS_LABEL.to_string(),
                total: rest,
            });
        }
    }
    slices
}
