// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether an entry brings money in, spends it on a farm, or spends it on
/// the household. Direction lives here; `amount` is always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Income,
    Expense,
    Household,
}

impl Kind {
    pub fn parse(s: &str) -> Option<Kind> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Kind::Income),
            "expense" => Some(Kind::Expense),
            "household" => Some(Kind::Household),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Income => "income",
            Kind::Expense => "expense",
            Kind::Household => "household",
        }
    }
}

/// Which book an entry belongs to. Household entries always carry
/// `Segment::Household` regardless of kind; anything unrecognized lands in
/// `Other` so it never inflates a farm's numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Arecanut,
    Paddy,
    Household,
    Other,
}

impl Segment {
    pub fn parse(s: &str) -> Segment {
        match s.trim().to_lowercase().as_str() {
            "arecanut" => Segment::Arecanut,
            "paddy" => Segment::Paddy,
            "household" => Segment::Household,
            _ => Segment::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Segment::Arecanut => "arecanut",
            Segment::Paddy => "paddy",
            Segment::Household => "household",
            Segment::Other => "other",
        }
    }
}

/// One canonical ledger entry, produced by the normalizer and never mutated
/// afterwards. Invariants: `amount >= 0`, `quantity >= 0`, `date` is a real
/// calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub kind: Kind,
    pub segment: Segment,
    pub category: String,
    pub notes: String,
    pub amount: f64,
    pub quantity: f64,
}

/// Which slice of the ledger a report looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Overall,
    Arecanut,
    Paddy,
    Household,
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            View::Overall => "overall",
            View::Arecanut => "arecanut",
            View::Paddy => "paddy",
            View::Household => "household",
        }
    }
}

/// Calendar-year restriction for a report. `All` is a no-op filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearFilter {
    All,
    Year(i32),
}
