use crate::models::interval::DrawdownInterval;
use crate::models::table::DrawdownRow;

/// Builds the drawdown summary table from the raw interval list.
///
/// The table shows the periods exactly as loaded — unmerged, in their
/// original order — so a reader can see every reported drawdown even
/// when the chart collapses overlapping ones into a single overlay.
pub struct TableService;

impl TableService {
    pub fn new() -> Self {
        Self
    }

    /// One display row per raw interval: "START END" period label,
    /// max drawdown rounded to 2 decimal places, exclusive day count.
    #[must_use]
    pub fn summary_rows(&self, intervals: &[DrawdownInterval]) -> Vec<DrawdownRow> {
        intervals
            .iter()
            .map(|interval| DrawdownRow {
                period: format!("{} {}", interval.start_date, interval.end_date),
                max_drawdown: round_to_2dp(interval.max_drawdown),
                days: interval.duration_days(),
            })
            .collect()
    }
}

impl Default for TableService {
    fn default() -> Self {
        Self::new()
    }
}

fn round_to_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
