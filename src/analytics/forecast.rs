// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::monthly::{MonthlyBucket, label_for_key};
use serde::Serialize;

/// Months projected past the last observed month.
pub const FORECAST_HORIZON: usize = 3;

/// Projected income for the months following the last observed one.
/// `labels` and `values` are parallel. This is plain linear extrapolation —
/// a trend indicator, not a prediction with any confidence attached.
#[derive(Debug, Clone, Serialize)]
pub struct Forecast {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl Forecast {
    pub fn empty() -> Self {
        Forecast {
            labels: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ordinary least-squares over the monthly income series, x being the
/// zero-based month index. With no data the forecast is empty; with a
/// single point it repeats that value. Projected values are floored at 0 —
/// negative income is not a meaningful prediction here.
pub fn project_income(monthly: &[MonthlyBucket]) -> Forecast {
    let Some(last) = monthly.last() else {
        return Forecast::empty();
    };
    let labels: Vec<String> = (1..=FORECAST_HORIZON as i32)
        .map(|i| label_for_key(last.sort_key + i))
        .collect();

    let incomes: Vec<f64> = monthly.iter().map(|b| b.income).collect();
    let n = incomes.len();
    if n < 2 {
        let value = incomes[0].max(0.0);
        return Forecast {
            labels,
            values: vec![value; FORECAST_HORIZON],
        };
    }

    let nf = n as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for (i, y) in incomes.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    // Cannot be zero for a 0..n-1 index sequence, but guard anyway.
    let denominator = nf * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return Forecast::empty();
    }
    let slope = (nf * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / nf;

    let values = (0..FORECAST_HORIZON)
        .map(|i| (intercept + slope * (nf + i as f64)).max(0.0))
        .collect();
    Forecast { labels, values }
}
