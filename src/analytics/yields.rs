// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Kind, Segment, TransactionRecord};
use serde::Serialize;

/// Physical yield and realized price per farm: total quantity sold, the
/// revenue it brought, and the average rate per unit.
#[derive(Debug, Clone, Serialize)]
pub struct YieldStat {
    pub segment: Segment,
    pub quantity: f64,
    pub revenue: f64,
    pub avg_rate: f64,
}

/// Summarize income records that carry a quantity, per farm segment. Both
/// farms are always reported, zeros included. Income rows without a
/// quantity (lump-sum sales) are left out so the average rate stays a real
/// price.
pub fn yield_summary(records: &[&TransactionRecord]) -> Vec<YieldStat> {
    [Segment::Arecanut, Segment::Paddy]
        .into_iter()
        .map(|segment| {
            let mut quantity = 0.0;
            let mut revenue = 0.0;
            for r in records {
                if r.kind == Kind::Income && r.segment == segment && r.quantity > 0.0 {
                    quantity += r.quantity;
                    revenue += r.amount;
                }
            }
            let avg_rate = if quantity > 0.0 { revenue / quantity } else { 0.0 };
            YieldStat {
                segment,
                quantity,
                revenue,
                avg_rate,
            }
        })
        .collect()
}
