use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single day's cumulative return (date → value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateValuePoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// O(1) date → cumulative-return lookup, built once from a `ReturnSeries`
/// before projecting drawdown intervals onto it.
pub type ReturnLookup = HashMap<NaiveDate, f64>;

/// Ordered daily cumulative-return series, chronologically ascending,
/// one entry per trading day.
///
/// Source of truth for "what was the cumulative return on day D".
/// Immutable after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    points: Vec<DateValuePoint>,
}

impl ReturnSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series from arbitrary-order points.
    /// Sorts ascending by date; for a duplicated date the last value wins.
    pub fn from_points(mut points: Vec<DateValuePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        points.dedup_by(|next, prev| {
            if next.date == prev.date {
                // later entry wins, mirror map-insert semantics
                prev.value = next.value;
                true
            } else {
                false
            }
        });
        Self { points }
    }

    /// Get the cumulative return on a specific date.
    /// Returns None if the date has no entry. Uses binary search (O(log n)).
    pub fn value_on(&self, date: NaiveDate) -> Option<f64> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|idx| self.points[idx].value)
    }

    /// Build the O(1) date → value lookup used by the projection step.
    #[must_use]
    pub fn lookup(&self) -> ReturnLookup {
        self.points.iter().map(|p| (p.date, p.value)).collect()
    }

    /// The series points in ascending date order.
    #[must_use]
    pub fn points(&self) -> &[DateValuePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Date of the first entry, if any.
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    /// Date of the last entry, if any.
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }
}
