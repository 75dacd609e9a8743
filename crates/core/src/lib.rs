pub mod errors;
pub mod loader;
pub mod models;
pub mod services;

use chrono::NaiveDate;
use models::{
    chart::{ChartPoint, DashboardData, HighlightSegment},
    interval::DrawdownInterval,
    series::ReturnSeries,
    table::DrawdownRow,
};
use services::{chart_service::ChartService, table_service::TableService};

use errors::CoreError;

/// Main entry point for the drawdown dashboard core library.
///
/// Holds the two loaded datasets and the services that shape them for
/// rendering. A pure function of its inputs: nothing here touches the
/// network or global state, and no method mutates the datasets, so the
/// caller decides when to rebuild and when to re-render.
#[must_use]
pub struct DrawdownDashboard {
    series: ReturnSeries,
    intervals: Vec<DrawdownInterval>,
    chart_service: ChartService,
    table_service: TableService,
}

impl std::fmt::Debug for DrawdownDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawdownDashboard")
            .field("series_len", &self.series.len())
            .field("intervals", &self.intervals.len())
            .finish()
    }
}

impl DrawdownDashboard {
    /// Build a dashboard from already-parsed datasets.
    pub fn new(series: ReturnSeries, intervals: Vec<DrawdownInterval>) -> Self {
        Self {
            series,
            intervals,
            chart_service: ChartService::new(),
            table_service: TableService::new(),
        }
    }

    /// Build a dashboard from the two raw JSON documents.
    /// Use this for WASM / embedded frontends where the host fetches the files.
    pub fn from_json(returns_json: &str, drawdowns_json: &str) -> Result<Self, CoreError> {
        let series = loader::parse_returns(returns_json)?;
        let intervals = loader::parse_drawdowns(drawdowns_json)?;
        Ok(Self::new(series, intervals))
    }

    /// Build a dashboard from two JSON files on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_files(
        returns_path: &str,
        drawdowns_path: &str,
    ) -> Result<Self, CoreError> {
        let series = loader::load_returns_file(returns_path)?;
        let intervals = loader::load_drawdowns_file(drawdowns_path)?;
        Ok(Self::new(series, intervals))
    }

    // ── Render Data ─────────────────────────────────────────────────

    /// The full return series reshaped for the baseline chart line.
    #[must_use]
    pub fn baseline(&self) -> Vec<ChartPoint> {
        self.chart_service.baseline(&self.series)
    }

    /// Highlight overlays: merged drawdown spans projected onto the series.
    /// Fails with `InvalidInput` when the interval list is empty.
    pub fn highlight_segments(&self) -> Result<Vec<HighlightSegment>, CoreError> {
        self.chart_service
            .highlight_segments(&self.intervals, &self.series)
    }

    /// Summary-table rows for the raw (unmerged) drawdown periods.
    #[must_use]
    pub fn summary_rows(&self) -> Vec<DrawdownRow> {
        self.table_service.summary_rows(&self.intervals)
    }

    /// Everything the page renders, computed in one pass.
    pub fn view(&self) -> Result<DashboardData, CoreError> {
        Ok(DashboardData {
            baseline: self.baseline(),
            highlights: self.highlight_segments()?,
            drawdowns: self.summary_rows(),
        })
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Number of points in the return series.
    #[must_use]
    pub fn series_len(&self) -> usize {
        self.series.len()
    }

    /// Number of raw drawdown intervals.
    #[must_use]
    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    /// Date of the earliest return-series entry, if any.
    #[must_use]
    pub fn earliest_date(&self) -> Option<NaiveDate> {
        self.series.first_date()
    }

    /// Date of the latest return-series entry, if any.
    #[must_use]
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.series.last_date()
    }

    /// Cumulative return on a specific date, if the series has an entry.
    #[must_use]
    pub fn return_on(&self, date: NaiveDate) -> Option<f64> {
        self.series.value_on(date)
    }

    /// The loaded return series.
    #[must_use]
    pub fn series(&self) -> &ReturnSeries {
        &self.series
    }

    /// The loaded raw intervals, in document order.
    #[must_use]
    pub fn intervals(&self) -> &[DrawdownInterval] {
        &self.intervals
    }
}
