// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::monthly::MonthlyBucket;
use crate::models::{Kind, TransactionRecord};
use serde::Serialize;

/// Presentation-facing classification derived from profit margin.
/// Thresholds are a product decision: margin < 10% is High risk, < 25%
/// Medium, else Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Derived snapshot for one filtered record set. Every ratio short-circuits
/// to 0 on a zero denominator — these values are rendered directly, so
/// NaN/Infinity must never escape.
#[derive(Debug, Clone, Serialize)]
pub struct Metrics {
    pub total_income: f64,
    pub total_expense: f64,
    pub total_household: f64,
    pub net_profit: f64,
    pub profit_margin: f64,
    pub roi: f64,
    pub cost_efficiency: f64,
    pub yield_ratio: f64,
    pub growth_rate: f64,
    pub peak_month: Option<String>,
    pub avg_monthly_income: f64,
    pub risk_level: RiskLevel,
}

fn pct(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Derive the metric set from the filtered records and their monthly
/// buckets. `monthly` must be chronologically sorted (as
/// `aggregate_buckets` returns it) — growth compares the last two entries
/// by sort key, not insertion order.
pub fn compute_metrics(records: &[&TransactionRecord], monthly: &[MonthlyBucket]) -> Metrics {
    let mut total_income = 0.0;
    let mut total_expense = 0.0;
    let mut total_household = 0.0;
    for r in records {
        match r.kind {
            Kind::Income => total_income += r.amount,
            Kind::Expense => total_expense += r.amount,
            Kind::Household => total_household += r.amount,
        }
    }

    let net_profit = total_income - total_expense - total_household;
    let outlay = total_expense + total_household;
    let profit_margin = pct(net_profit, total_income);

    let growth_rate = match monthly {
        [.., previous, current] if previous.income > 0.0 => {
            (current.income - previous.income) / previous.income * 100.0
        }
        _ => 0.0,
    };

    // Strictly-greater comparison keeps the earliest bucket on ties.
    let mut peak: Option<&MonthlyBucket> = None;
    for bucket in monthly {
        if peak.is_none_or(|p| bucket.income > p.income) {
            peak = Some(bucket);
        }
    }

    let risk_level = if profit_margin < 10.0 {
        RiskLevel::High
    } else if profit_margin < 25.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    Metrics {
        total_income,
        total_expense,
        total_household,
        net_profit,
        profit_margin,
        roi: pct(net_profit, outlay),
        cost_efficiency: pct(total_income - total_expense, total_income),
        yield_ratio: ratio(total_income, total_expense),
        growth_rate,
        peak_month: peak.map(|b| b.label.clone()),
        avg_monthly_income: total_income / monthly.len().max(1) as f64,
        risk_level,
    }
}
