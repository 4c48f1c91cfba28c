// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{
    self, DASHBOARD_CATEGORY_LIMIT, DEFAULT_CATEGORY_LIMIT, filter_records,
};
use crate::models::{Kind, Segment, TransactionRecord, View, YearFilter};
use crate::normalize::normalize_all;
use crate::utils::{
    load_raw_records, maybe_print_json, parse_view, parse_year_filter, pretty_table,
};
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("dashboard", sub)) => dashboard(conn, sub)?,
        Some(("monthly", sub)) => monthly(conn, sub)?,
        Some(("seasonal", sub)) => seasonal(conn, sub)?,
        Some(("categories", sub)) => categories(conn, sub)?,
        Some(("forecast", sub)) => forecast(conn, sub)?,
        Some(("yield", sub)) => yields(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn load_records(conn: &Connection) -> Result<Vec<TransactionRecord>> {
    Ok(normalize_all(&load_raw_records(conn)?))
}

fn view_and_year(sub: &clap::ArgMatches) -> Result<(View, YearFilter)> {
    let view = parse_view(sub.get_one::<String>("view").map(String::as_str).unwrap_or("overall"))?;
    let year = parse_year_filter(sub.get_one::<String>("year").map(String::as_str).unwrap_or("all"))?;
    Ok((view, year))
}

fn money(v: f64) -> String {
    format!("{:.2}", v)
}

#[derive(Serialize)]
struct SegmentSummary {
    segment: Segment,
    income: f64,
    expense: f64,
    net: f64,
    margin: f64,
}

fn segment_summaries(records: &[&TransactionRecord]) -> Vec<SegmentSummary> {
    [Segment::Arecanut, Segment::Paddy]
        .into_iter()
        .map(|segment| {
            let mut income = 0.0;
            let mut expense = 0.0;
            for r in records {
                if r.segment != segment {
                    continue;
                }
                match r.kind {
                    Kind::Income => income += r.amount,
                    Kind::Expense => expense += r.amount,
                    Kind::Household => {}
                }
            }
            let net = income - expense;
            let margin = if income > 0.0 { net / income * 100.0 } else { 0.0 };
            SegmentSummary {
                segment,
                income,
                expense,
                net,
                margin,
            }
        })
        .collect()
}

fn dashboard(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let year = parse_year_filter(sub.get_one::<String>("year").map(String::as_str).unwrap_or("all"))?;

    let records = load_records(conn)?;
    let report = analytics::analyze(&records, View::Overall, year, DASHBOARD_CATEGORY_LIMIT);
    let segments = segment_summaries(&filter_records(&records, View::Overall, year));

    if json_flag || jsonl_flag {
        let payload = json!({
            "metrics": report.metrics,
            "segments": segments,
            "categories": report.categories,
        });
        maybe_print_json(json_flag, jsonl_flag, &payload)?;
        return Ok(());
    }

    let m = &report.metrics;
    let metric_rows = vec![
        vec!["Total Income".into(), money(m.total_income)],
        vec!["Total Expense".into(), money(m.total_expense)],
        vec!["Household Spend".into(), money(m.total_household)],
        vec!["Net Profit".into(), money(m.net_profit)],
        vec!["Profit Margin %".into(), money(m.profit_margin)],
        vec!["ROI %".into(), money(m.roi)],
        vec!["Cost Efficiency %".into(), money(m.cost_efficiency)],
        vec!["Yield Ratio".into(), money(m.yield_ratio)],
        vec!["Growth Rate %".into(), money(m.growth_rate)],
        vec![
            "Peak Month".into(),
            m.peak_month.clone().unwrap_or_else(|| "-".into()),
        ],
        vec!["Avg Monthly Income".into(), money(m.avg_monthly_income)],
        vec!["Risk Level".into(), m.risk_level.as_str().into()],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], metric_rows));

    let segment_rows = segments
        .iter()
        .map(|s| {
            vec![
                s.segment.as_str().to_string(),
                money(s.income),
                money(s.expense),
                money(s.net),
                money(s.margin),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Segment", "Income", "Expense", "Net", "Margin %"],
            segment_rows
        )
    );

    let category_rows = report
        .categories
        .iter()
        .map(|c| vec![c.label.clone(), money(c.total)])
        .collect();
    println!("{}", pretty_table(&["Category", "Spent"], category_rows));
    Ok(())
}

fn monthly(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (view, year) = view_and_year(sub)?;

    let records = load_records(conn)?;
    let report = analytics::analyze(&records, view, year, DEFAULT_CATEGORY_LIMIT);

    if !maybe_print_json(json_flag, jsonl_flag, &report.monthly)? {
        let rows = report
            .monthly
            .iter()
            .map(|b| {
                vec![
                    b.label.clone(),
                    money(b.income),
                    money(b.expense),
                    money(b.household),
                    money(b.profit),
                    b.transaction_count.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Month", "Income", "Expense", "Household", "Profit", "Txns"],
                rows
            )
        );
    }
    Ok(())
}

fn seasonal(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (view, year) = view_and_year(sub)?;

    let records = load_records(conn)?;
    let report = analytics::analyze(&records, view, year, DEFAULT_CATEGORY_LIMIT);

    if !maybe_print_json(json_flag, jsonl_flag, &report.seasonal)? {
        let rows = report
            .seasonal
            .iter()
            .map(|b| {
                vec![
                    b.season.as_str().to_string(),
                    money(b.income),
                    money(b.expense),
                    money(b.household),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Season", "Income", "Expense", "Household"], rows)
        );
    }
    Ok(())
}

fn categories(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (view, year) = view_and_year(sub)?;
    let limit = *sub.get_one::<usize>("top").unwrap_or(&DEFAULT_CATEGORY_LIMIT);

    let records = load_records(conn)?;
    let ranked = analytics::rank_categories(&filter_records(&records, view, year), limit);

    if !maybe_print_json(json_flag, jsonl_flag, &ranked)? {
        let rows = ranked
            .iter()
            .map(|c| vec![c.label.clone(), money(c.total)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }
    Ok(())
}

fn forecast(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (view, year) = view_and_year(sub)?;

    let records = load_records(conn)?;
    let report = analytics::analyze(&records, view, year, DEFAULT_CATEGORY_LIMIT);

    if !maybe_print_json(json_flag, jsonl_flag, &report.forecast)? {
        if report.forecast.is_empty() {
            println!("No forecast: no dated income data in this selection");
            return Ok(());
        }
        let rows = report
            .forecast
            .labels
            .iter()
            .zip(&report.forecast.values)
            .map(|(label, value)| vec![label.clone(), money(*value)])
            .collect();
        println!("{}", pretty_table(&["Month", "Projected Income"], rows));
    }
    Ok(())
}

fn yields(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let year = parse_year_filter(sub.get_one::<String>("year").map(String::as_str).unwrap_or("all"))?;

    let records = load_records(conn)?;
    let stats = analytics::yield_summary(&filter_records(&records, View::Overall, year));

    if !maybe_print_json(json_flag, jsonl_flag, &stats)? {
        let rows = stats
            .iter()
            .map(|s| {
                vec![
                    s.segment.as_str().to_string(),
                    format!("{}", s.quantity),
                    money(s.revenue),
                    money(s.avg_rate),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Farm", "Quantity (kg)", "Revenue", "Avg Rate"], rows)
        );
    }
    Ok(())
}
