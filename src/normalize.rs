// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Kind, Segment, TransactionRecord};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A transaction row exactly as it came out of the datastore or an import
/// file: every field a string, nothing validated yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    pub date: String,
    pub kind: String,
    pub segment: String,
    pub category: String,
    pub notes: String,
    pub amount: String,
    pub quantity: String,
}

pub const DEFAULT_CATEGORY: &str = "General";

// Spreadsheet feeds serialize dates as Date(YYYY,M,D) with a zero-based month.
static CTOR_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*,\s*(\d+)\s*,\s*(\d+)").unwrap());

/// Parse a date that may be ISO (`2025-01-15`) or constructor-call style
/// (`Date(2025,0,15)`). Returns `None` for anything else; callers drop the
/// row rather than guess.
pub fn parse_loose_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if s.contains("Date") {
        if let Some(c) = CTOR_DATE.captures(s) {
            let y: i32 = c[1].parse().ok()?;
            let m0: u32 = c[2].parse().ok()?;
            let d: u32 = c[3].parse().ok()?;
            return NaiveDate::from_ymd_opt(y, m0 + 1, d);
        }
    }
    None
}

/// Coerce a monetary or quantity field. Non-numeric, non-finite, and
/// negative inputs all collapse to 0 so they contribute nothing to any sum.
pub fn parse_loose_number(raw: &str) -> f64 {
    let v = raw.trim().parse::<f64>().unwrap_or(0.0);
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

/// Turn one raw row into a canonical record, or drop it.
///
/// Rows without a readable date are excluded entirely — totals and buckets
/// are always computed from the same record set, so a date-less row cannot
/// half-count. Rows with an unrecognized kind are dropped for the same
/// reason: mapping them onto income or expense would silently distort
/// totals. A household kind always forces the household segment.
pub fn normalize_record(raw: &RawRecord) -> Option<TransactionRecord> {
    let date = parse_loose_date(&raw.date)?;
    let kind = Kind::parse(&raw.kind)?;
    let segment = if kind == Kind::Household {
        Segment::Household
    } else {
        Segment::parse(&raw.segment)
    };
    let category = raw.category.trim();
    let category = if category.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        category.to_string()
    };
    Some(TransactionRecord {
        date,
        kind,
        segment,
        category,
        notes: raw.notes.trim().to_string(),
        amount: parse_loose_number(&raw.amount),
        quantity: parse_loose_number(&raw.quantity),
    })
}

/// Normalize a whole batch, silently dropping rows that `normalize_record`
/// rejects. The ledger `doctor` command reports such rows.
pub fn normalize_all(raws: &[RawRecord]) -> Vec<TransactionRecord> {
    raws.iter().filter_map(normalize_record).collect()
}
