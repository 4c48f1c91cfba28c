// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Kind, Segment, TransactionRecord, View, YearFilter};
use chrono::Datelike;

/// Select the records belonging to a view and year. Returns borrowed
/// references — filtering never copies or mutates the ledger.
pub fn filter_records<'a>(
    records: &'a [TransactionRecord],
    view: View,
    year: YearFilter,
) -> Vec<&'a TransactionRecord> {
    records
        .iter()
        .filter(|r| matches_view(r, view) && matches_year(r, year))
        .collect()
}

fn matches_view(r: &TransactionRecord, view: View) -> bool {
    match view {
        View::Overall => true,
        View::Arecanut => r.segment == Segment::Arecanut,
        View::Paddy => r.segment == Segment::Paddy,
        // A row may be tagged household by either field; honor both.
        View::Household => r.kind == Kind::Household || r.segment == Segment::Household,
    }
}

fn matches_year(r: &TransactionRecord, year: YearFilter) -> bool {
    match year {
        YearFilter::All => true,
        YearFilter::Year(y) => r.date.year() == y,
    }
}
