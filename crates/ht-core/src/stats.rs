//! Statistics aggregation over activity records.
//!
//! # Algorithm Summary
//!
//! 1. Walk the records once, in input order
//! 2. Look up each record's group by its case- and accent-insensitive key
//! 3. A new key opens a row labelled with that record's own casing
//! 4. Sums are accumulated left to right so results are reproducible
//!
//! Rows come out in the order their groups were first seen.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::record::ActivityRecord;
use crate::types::ActivityType;

/// Aggregate for one group of records sharing an activity type.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    /// Label of the first record seen for this group.
    pub activity_type: ActivityType,

    /// Sum of the values of every record in the group.
    pub sum: f64,

    /// Number of records in the group. Always at least 1.
    pub count: usize,
}

impl AggregateRow {
    /// Arithmetic mean of the group's values.
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Mean over all records, which only exists when there is at least one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GrandMean {
    Value(f64),
    NotApplicable,
}

impl GrandMean {
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::NotApplicable => None,
        }
    }
}

/// Result of aggregating a sequence of records.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationResult {
    /// One row per group, in first-seen order.
    pub rows: Vec<AggregateRow>,

    /// Number of records aggregated.
    pub total_records: usize,

    /// Sum of every value regardless of group.
    pub grand_sum: f64,

    /// `grand_sum / total_records`, or not applicable for empty input.
    pub grand_mean: GrandMean,
}

impl AggregationResult {
    /// Number of distinct activity types.
    pub fn distinct_types(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when there was no data to aggregate.
    pub const fn is_empty(&self) -> bool {
        self.total_records == 0
    }
}

/// Named entry point for callers that hold an aggregator component.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsAggregator;

impl StatisticsAggregator {
    pub fn compute(self, records: &[ActivityRecord]) -> AggregationResult {
        compute(records)
    }
}

/// Computes per-type and global aggregates for `records`.
///
/// Empty input yields no rows, zero totals and [`GrandMean::NotApplicable`].
#[allow(clippy::cast_precision_loss)]
pub fn compute(records: &[ActivityRecord]) -> AggregationResult {
    let mut rows: Vec<AggregateRow> = Vec::new();
    let mut row_by_key: HashMap<String, usize> = HashMap::new();
    let mut grand_sum = 0.0;

    for record in records {
        let value = record.value();
        grand_sum += value;

        match row_by_key.entry(record.activity_type().group_key()) {
            Entry::Occupied(slot) => {
                let row = &mut rows[*slot.get()];
                row.sum += value;
                row.count += 1;
            }
            Entry::Vacant(slot) => {
                slot.insert(rows.len());
                rows.push(AggregateRow {
                    activity_type: record.activity_type().clone(),
                    sum: value,
                    count: 1,
                });
            }
        }
    }

    let total_records = records.len();
    let grand_mean = if total_records == 0 {
        GrandMean::NotApplicable
    } else {
        GrandMean::Value(grand_sum / total_records as f64)
    };

    tracing::debug!(records = total_records, groups = rows.len(), "computed statistics");

    AggregationResult {
        rows,
        total_records,
        grand_sum,
        grand_mean,
    }
}
