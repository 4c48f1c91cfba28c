// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{View, YearFilter};
use crate::normalize::RawRecord;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rusqlite::Connection;

/// Strict ISO date parse for values typed at the CLI. The lenient path
/// (`normalize::parse_loose_date`) is reserved for data read back from the
/// store or import files.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_amount(s: &str) -> Result<f64> {
    let v = s
        .trim()
        .parse::<f64>()
        .with_context(|| format!("Invalid amount '{}'", s))?;
    if !v.is_finite() || v < 0.0 {
        anyhow::bail!("Amount '{}' must be a non-negative number", s);
    }
    Ok(v)
}

pub fn parse_view(s: &str) -> Result<View> {
    match s.trim().to_lowercase().as_str() {
        "overall" => Ok(View::Overall),
        "arecanut" => Ok(View::Arecanut),
        "paddy" => Ok(View::Paddy),
        "household" => Ok(View::Household),
        other => anyhow::bail!(
            "Unknown view '{}' (use overall|arecanut|paddy|household)",
            other
        ),
    }
}

pub fn parse_year_filter(s: &str) -> Result<YearFilter> {
    if s.trim().eq_ignore_ascii_case("all") {
        return Ok(YearFilter::All);
    }
    let year: i32 = s
        .trim()
        .parse()
        .with_context(|| format!("Invalid year '{}', expected a year or 'all'", s))?;
    Ok(YearFilter::Year(year))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

/// Read every stored row back in raw string form, oldest first. CASTs keep
/// the read working even when a row was edited out-of-band with a numeric
/// type — coercion is the normalizer's job, not the query's.
pub fn load_raw_records(conn: &Connection) -> Result<Vec<RawRecord>> {
    let mut stmt = conn.prepare(
        "SELECT CAST(date AS TEXT), CAST(kind AS TEXT), CAST(segment AS TEXT),
                IFNULL(CAST(category AS TEXT), ''), IFNULL(CAST(notes AS TEXT), ''),
                CAST(amount AS TEXT), CAST(quantity AS TEXT)
         FROM transactions ORDER BY date, id",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok(RawRecord {
            date: r.get(0)?,
            kind: r.get(1)?,
            segment: r.get(2)?,
            category: r.get(3)?,
            notes: r.get(4)?,
            amount: r.get(5)?,
            quantity: r.get(6)?,
        })
    })?;
    let mut data = Vec::new();
    for row in rows {
        data.push(row?);
    }
    Ok(data)
}
