// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The analytics engine: filtered aggregation, category ranking, derived
//! metrics, and a linear-trend income forecast over a normalized transaction
//! list. Pure functions only — every call recomputes from scratch, nothing
//! is cached between invocations, and the input is never mutated.

pub mod categories;
pub mod filter;
pub mod forecast;
pub mod metrics;
pub mod monthly;
pub mod yields;

pub use categories::{CategorySlice, OTHERS_LABEL, rank_categories};
pub use filter::filter_records;
pub use forecast::{FORECAST_HORIZON, Forecast, project_income};
pub use metrics::{Metrics, RiskLevel, compute_metrics};
pub use monthly::{MonthlyBucket, Season, SeasonalBucket, aggregate_buckets};
pub use yields::{YieldStat, yield_summary};

use crate::models::{TransactionRecord, View, YearFilter};
use serde::Serialize;

/// Category cutoff for full breakdowns.
pub const DEFAULT_CATEGORY_LIMIT: usize = 8;
/// Category cutoff for the compact dashboard view.
pub const DASHBOARD_CATEGORY_LIMIT: usize = 4;

/// Everything a rendering layer needs for one view/period selection.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsReport {
    pub monthly: Vec<MonthlyBucket>,
    pub seasonal: Vec<SeasonalBucket>,
    pub categories: Vec<CategorySlice>,
    pub metrics: Metrics,
    pub forecast: Forecast,
}

/// Run the full pipeline: filter by view and year, bucket by month and
/// season, rank categories, derive metrics, project income.
///
/// Empty filtered input is not an error: buckets come back empty, metrics
/// zeroed, forecast empty.
pub fn analyze(
    records: &[TransactionRecord],
    view: View,
    year: YearFilter,
    category_limit: usize,
) -> AnalyticsReport {
    let filtered = filter_records(records, view, year);
    let (monthly, seasonal) = aggregate_buckets(&filtered);
    let categories = rank_categories(&filtered, category_limit);
    let metrics = compute_metrics(&filtered, &monthly);
    let forecast = project_income(&monthly);
    AnalyticsReport {
        monthly,
        seasonal,
        categories,
        metrics,
        forecast,
    }
}
