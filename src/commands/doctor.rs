// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Kind;
use crate::normalize::parse_loose_date;
use crate::utils::{load_raw_records, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

/// Flag stored rows the normalizer would drop or coerce, so they can be
/// repaired at the source instead of silently vanishing from reports.
pub fn handle(conn: &Connection) -> Result<()> {
    let raws = load_raw_records(conn)?;
    let mut rows = Vec::new();

    for (i, raw) in raws.iter().enumerate() {
        let row_no = i + 1;
        if parse_loose_date(&raw.date).is_none() {
            rows.push(vec![
                "unreadable_date".to_string(),
                format!("row {}: '{}'", row_no, raw.date),
            ]);
        }
        if Kind::parse(&raw.kind).is_none() {
            rows.push(vec![
                "unknown_kind".to_string(),
                format!("row {}: '{}'", row_no, raw.kind),
            ]);
        }
        match raw.amount.trim().parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => {}
            Ok(v) if v < 0.0 => rows.push(vec![
                "negative_amount".to_string(),
                format!("row {}: '{}'", row_no, raw.amount),
            ]),
            _ => rows.push(vec![
                "unparsable_amount".to_string(),
                format!("row {}: '{}'", row_no, raw.amount),
            ]),
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
