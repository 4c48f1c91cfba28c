// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use farmledger::analytics::{self, DEFAULT_CATEGORY_LIMIT, Season, filter_records};
use farmledger::models::{Kind, Segment, TransactionRecord, View, YearFilter};
use farmledger::normalize::{RawRecord, normalize_all};

fn rec(date: &str, kind: Kind, segment: Segment, category: &str, amount: f64) -> TransactionRecord {
    TransactionRecord {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        kind,
        segment,
        category: category.into(),
        notes: String::new(),
        amount,
        quantity: 0.0,
    }
}

fn scenario() -> Vec<TransactionRecord> {
    vec![
        rec("2025-01-10", Kind::Income, Segment::Arecanut, "Harvest", 1000.0),
        rec("2025-01-15", Kind::Expense, Segment::Arecanut, "Fertilizer", 300.0),
        rec("2025-02-01", Kind::Household, Segment::Household, "General", 200.0),
    ]
}

#[test]
fn scenario_overall_totals_and_buckets() {
    let report = analytics::analyze(
        &scenario(),
        View::Overall,
        YearFilter::All,
        DEFAULT_CATEGORY_LIMIT,
    );

    let m = &report.metrics;
    assert_eq!(m.total_income, 1000.0);
    assert_eq!(m.total_expense, 300.0);
    assert_eq!(m.total_household, 200.0);
    assert_eq!(m.net_profit, 500.0);

    assert_eq!(report.monthly.len(), 2);
    assert_eq!(report.monthly[0].label, "Jan 25");
    assert_eq!(report.monthly[0].profit, 700.0);
    assert_eq!(report.monthly[1].label, "Feb 25");
    assert_eq!(report.monthly[1].profit, -200.0);

    let labels: Vec<&str> = report.categories.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["Fertilizer", "General"]);
    assert_eq!(report.categories[0].total, 300.0);
    assert_eq!(report.categories[1].total, 200.0);
}

#[test]
fn monthly_buckets_sort_by_calendar_not_label() {
    // Dec 2024 must come before Jan 2025 even though "Dec" > "Jan" as text,
    // and insertion order is deliberately scrambled.
    let records = vec![
        rec("2025-01-05", Kind::Income, Segment::Paddy, "Sale", 50.0),
        rec("2024-12-20", Kind::Income, Segment::Paddy, "Sale", 40.0),
        rec("2025-03-01", Kind::Income, Segment::Paddy, "Sale", 60.0),
    ];
    let report = analytics::analyze(&records, View::Overall, YearFilter::All, 8);
    let labels: Vec<&str> = report.monthly.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["Dec 24", "Jan 25", "Mar 25"]);
    assert!(report.monthly.windows(2).all(|w| w[0].sort_key < w[1].sort_key));
}

#[test]
fn monthly_profits_sum_to_net_profit() {
    let records = vec![
        rec("2025-01-10", Kind::Income, Segment::Arecanut, "Harvest", 812.5),
        rec("2025-01-11", Kind::Expense, Segment::Arecanut, "Labor", 211.25),
        rec("2025-02-02", Kind::Income, Segment::Paddy, "Sale", 97.0),
        rec("2025-02-20", Kind::Household, Segment::Household, "Groceries", 141.75),
        rec("2025-04-01", Kind::Expense, Segment::Paddy, "Seeds", 58.0),
    ];
    let report = analytics::analyze(&records, View::Overall, YearFilter::All, 8);
    let bucket_sum: f64 = report.monthly.iter().map(|b| b.profit).sum();
    assert!((bucket_sum - report.metrics.net_profit).abs() < 1e-9);
}

#[test]
fn seasonal_buckets_cover_all_four_and_cross_years() {
    let records = vec![
        rec("2024-03-10", Kind::Income, Segment::Arecanut, "Harvest", 100.0),
        rec("2025-03-10", Kind::Income, Segment::Arecanut, "Harvest", 50.0),
        rec("2025-07-01", Kind::Expense, Segment::Paddy, "Seeds", 30.0),
        rec("2025-10-01", Kind::Household, Segment::Household, "General", 20.0),
        rec("2025-12-25", Kind::Expense, Segment::Paddy, "Repairs", 10.0),
        rec("2025-02-14", Kind::Expense, Segment::Paddy, "Repairs", 5.0),
    ];
    let report = analytics::analyze(&records, View::Overall, YearFilter::All, 8);

    let seasons: Vec<Season> = report.seasonal.iter().map(|b| b.season).collect();
    assert_eq!(
        seasons,
        vec![Season::Spring, Season::Summer, Season::Fall, Season::Winter]
    );
    // Both Marches land in the one Spring bucket.
    assert_eq!(report.seasonal[0].income, 150.0);
    assert_eq!(report.seasonal[1].expense, 30.0);
    assert_eq!(report.seasonal[2].household, 20.0);
    // Dec and Feb are the same season.
    assert_eq!(report.seasonal[3].expense, 15.0);
}

#[test]
fn household_view_matches_kind_or_segment() {
    let records = vec![
        rec("2025-01-01", Kind::Household, Segment::Household, "Groceries", 10.0),
        rec("2025-01-02", Kind::Expense, Segment::Household, "Repairs", 20.0),
        rec("2025-01-03", Kind::Expense, Segment::Arecanut, "Fertilizer", 30.0),
    ];
    let filtered = filter_records(&records, View::Household, YearFilter::All);
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|r| r.category != "Fertilizer"));
}

#[test]
fn farm_views_match_on_segment_only() {
    let records = vec![
        rec("2025-01-01", Kind::Income, Segment::Arecanut, "Harvest", 10.0),
        rec("2025-01-02", Kind::Expense, Segment::Paddy, "Seeds", 20.0),
        rec("2025-01-03", Kind::Household, Segment::Household, "General", 30.0),
    ];
    let areca = filter_records(&records, View::Arecanut, YearFilter::All);
    assert_eq!(areca.len(), 1);
    assert_eq!(areca[0].category, "Harvest");
    let paddy = filter_records(&records, View::Paddy, YearFilter::All);
    assert_eq!(paddy.len(), 1);
    assert_eq!(paddy[0].category, "Seeds");
}

#[test]
fn year_filter_restricts_records() {
    let records = vec![
        rec("2024-06-01", Kind::Income, Segment::Paddy, "Sale", 100.0),
        rec("2025-06-01", Kind::Income, Segment::Paddy, "Sale", 200.0),
    ];
    let report = analytics::analyze(&records, View::Overall, YearFilter::Year(2025), 8);
    assert_eq!(report.metrics.total_income, 200.0);
    assert_eq!(report.monthly.len(), 1);

    let all = analytics::analyze(&records, View::Overall, YearFilter::All, 8);
    assert_eq!(all.metrics.total_income, 300.0);
}

#[test]
fn empty_selection_yields_empty_report() {
    let report = analytics::analyze(&[], View::Overall, YearFilter::All, 8);
    assert!(report.monthly.is_empty());
    assert_eq!(report.seasonal.len(), 4);
    assert!(report.seasonal.iter().all(|s| s.income == 0.0 && s.expense == 0.0));
    assert!(report.categories.is_empty());
    assert_eq!(report.metrics.total_income, 0.0);
    assert_eq!(report.metrics.net_profit, 0.0);
    assert_eq!(report.metrics.peak_month, None);
    assert!(report.forecast.is_empty());
}

#[test]
fn invalid_date_rows_are_excluded_everywhere() {
    let raws = vec![
        RawRecord {
            date: "2025-01-10".into(),
            kind: "income".into(),
            segment: "arecanut".into(),
            category: "Harvest".into(),
            notes: String::new(),
            amount: "600".into(),
            quantity: "0".into(),
        },
        RawRecord {
            date: "2025-02-10".into(),
            kind: "income".into(),
            segment: "arecanut".into(),
            category: "Harvest".into(),
            notes: String::new(),
            amount: "400".into(),
            quantity: "0".into(),
        },
        RawRecord {
            date: "whenever".into(),
            kind: "income".into(),
            segment: "arecanut".into(),
            category: "Harvest".into(),
            notes: String::new(),
            amount: "9999".into(),
            quantity: "0".into(),
        },
    ];
    let records = normalize_all(&raws);
    let report = analytics::analyze(&records, View::Overall, YearFilter::All, 8);
    // The undated row contributes to nothing: not the totals, not the
    // buckets, not the month count behind the average.
    assert_eq!(report.metrics.total_income, 1000.0);
    assert_eq!(report.monthly.len(), 2);
    assert_eq!(report.metrics.avg_monthly_income, 500.0);
}

#[test]
fn engine_does_not_mutate_input() {
    let records = scenario();
    let before = records.clone();
    let _ = analytics::analyze(&records, View::Overall, YearFilter::All, 8);
    assert_eq!(records, before);
}
