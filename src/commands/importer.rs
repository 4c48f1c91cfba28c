// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::normalize::{RawRecord, normalize_record};
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use rusqlite::{Connection, params};

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(conn, sub),
        _ => Ok(()),
    }
}

/// Import a sheet export in column order
/// `date,kind,segment,category,notes,amount,quantity`. Rows the normalizer
/// rejects are skipped and counted — one bad row never aborts the batch.
/// Accepted rows are stored in canonical form (ISO date, lowercased enums).
fn import_transactions(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let tx = conn.transaction()?;
    let mut imported = 0usize;
    let mut skipped = 0usize;

    for result in rdr.records() {
        let rec = result?;
        let field = |i: usize| rec.get(i).unwrap_or("").trim().to_string();
        let raw = RawRecord {
            date: field(0),
            kind: field(1),
            segment: field(2),
            category: field(3),
            notes: field(4),
            amount: field(5),
            quantity: field(6),
        };

        let Some(record) = normalize_record(&raw) else {
            skipped += 1;
            continue;
        };

        tx.execute(
            "INSERT INTO transactions(date, kind, segment, category, notes, amount, quantity) \
             VALUES (?1,?2,?3,?4,?5,?6,?7)",
            params![
                record.date.to_string(),
                record.kind.as_str(),
                record.segment.as_str(),
                record.category,
                record.notes,
                record.amount.to_string(),
                record.quantity.to_string()
            ],
        )?;
        imported += 1;
    }
    tx.commit()?;

    if skipped > 0 {
        println!(
            "Imported {} transactions from {} ({} unreadable rows skipped)",
            imported, path, skipped
        );
    } else {
        println!("Imported {} transactions from {}", imported, path);
    }
    Ok(())
}
