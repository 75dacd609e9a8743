use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A raw, possibly-overlapping drawdown period.
///
/// Invariant: `start_date <= end_date` (enforced at the loader boundary).
/// The merge step never mutates these — it works on its own copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawdownInterval {
    /// First day of the drawdown period
    pub start_date: NaiveDate,

    /// Last day of the drawdown period (inclusive)
    pub end_date: NaiveDate,

    /// The minimum (most negative) return observed within the period
    pub max_drawdown: f64,
}

impl DrawdownInterval {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, max_drawdown: f64) -> Self {
        Self {
            start_date,
            end_date,
            max_drawdown,
        }
    }

    /// Exclusive day count between start and end (`end - start`).
    /// A single-day interval counts as 0 days, matching the display table.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// A maximal, non-overlapping union of one or more overlapping/touching
/// drawdown intervals. Exists only transiently during rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedInterval {
    pub start_date: NaiveDate,

    /// Last day of the merged span (inclusive)
    pub end_date: NaiveDate,
}

impl MergedInterval {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Whether `date` falls within this span (inclusive on both ends).
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Whether another span shares at least one day with this one.
    #[must_use]
    pub fn overlaps(&self, other: &MergedInterval) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }
}

impl From<&DrawdownInterval> for MergedInterval {
    fn from(interval: &DrawdownInterval) -> Self {
        Self {
            start_date: interval.start_date,
            end_date: interval.end_date,
        }
    }
}
