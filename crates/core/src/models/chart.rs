use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::table::DrawdownRow;

/// A single point in the shape the charting widget consumes.
///
/// The core generates these — the frontend just renders them.
/// Serialized as `{"time": "YYYY-MM-DD", "value": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// The date for this point
    pub time: NaiveDate,

    /// Cumulative return at this date
    pub value: f64,
}

impl ChartPoint {
    pub fn new(time: NaiveDate, value: f64) -> Self {
        Self { time, value }
    }
}

/// Chart points for one merged drawdown span, restricted to the dates
/// that actually have a return-series entry. May be empty when no date
/// in the span appears in the series (valid, not an error).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighlightSegment {
    pub points: Vec<ChartPoint>,
}

impl HighlightSegment {
    pub fn new(points: Vec<ChartPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Date of the first point, if any.
    #[must_use]
    pub fn first_time(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.time)
    }

    /// Date of the last point, if any.
    #[must_use]
    pub fn last_time(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.time)
    }
}

/// Everything the dashboard page needs in one payload:
/// the baseline line, the highlight overlays, and the summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    /// The full return series reshaped for the baseline chart line
    pub baseline: Vec<ChartPoint>,

    /// One overlay per merged drawdown span, chronological
    pub highlights: Vec<HighlightSegment>,

    /// Summary rows for the raw (unmerged) drawdown periods
    pub drawdowns: Vec<DrawdownRow>,
}
