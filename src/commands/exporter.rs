// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        _ => Ok(()),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    if fmt != "csv" && fmt != "json" {
        return Err(anyhow!("Unknown format: {} (use csv|json)", fmt));
    }

    let mut stmt = conn.prepare(
        "SELECT date, kind, segment, IFNULL(category,''), IFNULL(notes,''),
                CAST(amount AS TEXT), CAST(quantity AS TEXT)
         FROM transactions ORDER BY date, id",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, String>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
            r.get::<_, String>(5)?,
            r.get::<_, String>(6)?,
        ))
    })?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "date", "kind", "segment", "category", "notes", "amount", "quantity",
            ])?;
            for row in rows {
                let (date, kind, segment, category, notes, amount, quantity) = row?;
                wtr.write_record([date, kind, segment, category, notes, amount, quantity])?;
            }
            wtr.flush()?;
        }
        _ => {
            let mut items = Vec::new();
            for row in rows {
                let (date, kind, segment, category, notes, amount, quantity) = row?;
                items.push(json!({
                    "date": date, "kind": kind, "segment": segment, "category": category,
                    "notes": notes, "amount": amount, "quantity": quantity
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
