// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Kind, Segment};
use crate::utils::{maybe_print_json, parse_amount, parse_date, pretty_table};
use anyhow::{Result, anyhow};
use rusqlite::{Connection, params};
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => remove(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let kind = Kind::parse(sub.get_one::<String>("kind").unwrap())
        .ok_or_else(|| anyhow!("Unknown kind (use income|expense|household)"))?;
    let segment = if kind == Kind::Household {
        Segment::Household
    } else {
        sub.get_one::<String>("segment")
            .map(|s| Segment::parse(s))
            .unwrap_or(Segment::Other)
    };
    let category = sub.get_one::<String>("category").unwrap().trim().to_string();
    let notes = sub.get_one::<String>("notes").map(|s| s.trim().to_string());

    let quantity = match sub.get_one::<String>("quantity") {
        Some(q) => parse_amount(q)?,
        None => 0.0,
    };
    let rate = match sub.get_one::<String>("rate") {
        Some(r) => parse_amount(r)?,
        None => 0.0,
    };
    // Income entered as quantity at a unit price; the amount is derived.
    let amount = if kind == Kind::Income && quantity > 0.0 && rate > 0.0 {
        quantity * rate
    } else {
        parse_amount(
            sub.get_one::<String>("amount")
                .ok_or_else(|| anyhow!("--amount is required unless --quantity and --rate are given"))?,
        )?
    };
    if amount <= 0.0 {
        return Err(anyhow!("Amount must be greater than zero"));
    }

    conn.execute(
        "INSERT INTO transactions(date, kind, segment, category, notes, amount, quantity)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            date.to_string(),
            kind.as_str(),
            segment.as_str(),
            category,
            notes,
            amount.to_string(),
            quantity.to_string()
        ],
    )?;
    println!(
        "Recorded {} {} of {:.2} on {} ({})",
        segment.as_str(),
        kind.as_str(),
        amount,
        date,
        category
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.kind.clone(),
                    r.segment.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.quantity.clone(),
                    r.notes.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Kind", "Segment", "Category", "Amount", "Qty", "Notes"],
                rows,
            )
        );
    }
    Ok(())
}

fn remove(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let affected = conn.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
    if affected == 0 {
        return Err(anyhow!("Transaction #{} not found", id));
    }
    println!("Removed transaction #{}", id);
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub kind: String,
    pub segment: String,
    pub category: String,
    pub amount: String,
    pub quantity: String,
    pub notes: String,
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let mut sql = String::from(
        "SELECT id, date, kind, segment, IFNULL(category,''), CAST(amount AS TEXT), \
         CAST(quantity AS TEXT), IFNULL(notes,'') FROM transactions WHERE 1=1",
    );
    let mut params_vec: Vec<String> = Vec::new();

    if let Some(year) = sub.get_one::<String>("year") {
        sql.push_str(" AND substr(date,1,4)=?");
        params_vec.push(year.into());
    }
    if let Some(kind) = sub.get_one::<String>("kind") {
        sql.push_str(" AND lower(kind)=?");
        params_vec.push(kind.to_lowercase());
    }
    if let Some(segment) = sub.get_one::<String>("segment") {
        sql.push_str(" AND lower(segment)=?");
        params_vec.push(segment.to_lowercase());
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        sql.push_str(" AND category=?");
        params_vec.push(cat.into());
    }
    sql.push_str(" ORDER BY date DESC, id DESC");
    if let Some(limit) = sub.get_one::<usize>("limit") {
        sql.push_str(" LIMIT ?");
        params_vec.push(limit.to_string());
    }

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = if params_vec.is_empty() {
        stmt.query([])?
    } else {
        let params: Vec<&dyn rusqlite::ToSql> = params_vec
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();
        stmt.query(rusqlite::params_from_iter(params))?
    };

    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        data.push(TransactionRow {
            id: r.get(0)?,
            date: r.get(1)?,
            kind: r.get(2)?,
            segment: r.get(3)?,
            category: r.get(4)?,
            amount: r.get(5)?,
            quantity: r.get(6)?,
            notes: r.get(7)?,
        });
    }
    Ok(data)
}
