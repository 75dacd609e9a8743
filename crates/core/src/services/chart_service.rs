use crate::errors::CoreError;
use crate::models::chart::{ChartPoint, HighlightSegment};
use crate::models::interval::DrawdownInterval;
use crate::models::series::ReturnSeries;
use crate::services::interval_service;

/// Generates chart-ready data sets from the return series and the raw
/// drawdown intervals.
///
/// The core computes all the numbers — the frontend only renders.
/// Chart data includes:
/// - The full series reshaped for the baseline line
/// - One highlight overlay per merged drawdown span
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Reshape the whole return series into baseline chart points.
    #[must_use]
    pub fn baseline(&self, series: &ReturnSeries) -> Vec<ChartPoint> {
        series
            .points()
            .iter()
            .map(|p| ChartPoint::new(p.date, p.value))
            .collect()
    }

    /// Compute the highlight overlays: build the date lookup once,
    /// merge the raw intervals, then project each merged span onto it.
    ///
    /// Fails with `CoreError::InvalidInput` when `intervals` is empty.
    pub fn highlight_segments(
        &self,
        intervals: &[DrawdownInterval],
        series: &ReturnSeries,
    ) -> Result<Vec<HighlightSegment>, CoreError> {
        let lookup = series.lookup();
        let merged = interval_service::merge_intervals(intervals)?;
        Ok(interval_service::project_segments(&merged, &lookup))
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
