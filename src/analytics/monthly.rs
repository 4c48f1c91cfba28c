// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Kind, TransactionRecord};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// One calendar month's rollup. `sort_key` (`year * 12 + zero-based month`)
/// drives every chronological ordering; the label is display-only, since
/// "Jan" < "Feb" is false alphabetically.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyBucket {
    pub sort_key: i32,
    pub label: String,
    pub income: f64,
    pub expense: f64,
    pub household: f64,
    pub profit: f64,
    pub transaction_count: usize,
}

impl MonthlyBucket {
    fn new(sort_key: i32, label: String) -> Self {
        MonthlyBucket {
            sort_key,
            label,
            income: 0.0,
            expense: 0.0,
            household: 0.0,
            profit: 0.0,
            transaction_count: 0,
        }
    }
}

/// The four fixed seasons. Declared in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Mar-May Spring, Jun-Aug Summer, Sep-Nov Fall, Dec-Feb Winter.
    pub fn from_month(month: u32) -> Season {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

/// Cross-year seasonal rollup: every matched year's March lands in the same
/// Spring bucket.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonalBucket {
    pub season: Season,
    pub income: f64,
    pub expense: f64,
    pub household: f64,
}

pub fn month_sort_key(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %y").to_string()
}

/// Label for a sort key, used when projecting past the observed range.
pub fn label_for_key(sort_key: i32) -> String {
    NaiveDate::from_ymd_opt(sort_key.div_euclid(12), sort_key.rem_euclid(12) as u32 + 1, 1)
        .map(month_label)
        .unwrap_or_default()
}

/// Single pass over the filtered records: group into monthly buckets keyed
/// chronologically, and independently into the four fixed seasons. `profit`
/// is recomputed on every update so a bucket is internally consistent at any
/// point of the scan. Seasonal buckets always come back as all four, zeros
/// included, in `Season::ALL` order.
pub fn aggregate_buckets(
    records: &[&TransactionRecord],
) -> (Vec<MonthlyBucket>, Vec<SeasonalBucket>) {
    let mut months: BTreeMap<i32, MonthlyBucket> = BTreeMap::new();
    let mut seasons: Vec<SeasonalBucket> = Season::ALL
        .iter()
        .map(|&season| SeasonalBucket {
            season,
            income: 0.0,
            expense: 0.0,
            household: 0.0,
        })
        .collect();

    for r in records {
        let key = month_sort_key(r.date);
        let bucket = months
            .entry(key)
            .or_insert_with(|| MonthlyBucket::new(key, month_label(r.date)));
        match r.kind {
            Kind::Income => bucket.income += r.amount,
            Kind::Expense => bucket.expense += r.amount,
            Kind::Household => bucket.household += r.amount,
        }
        bucket.profit = bucket.income - bucket.expense - bucket.household;
        bucket.transaction_count += 1;

        let seasonal = &mut seasons[Season::from_month(r.date.month()) as usize];
        match r.kind {
            Kind::Income => seasonal.income += r.amount,
            Kind::Expense => seasonal.expense += r.amount,
            Kind::Household => seasonal.household += r.amount,
        }
    }

    (months.into_values().collect(), seasons)
}
