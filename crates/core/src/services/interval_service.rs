use crate::errors::CoreError;
use crate::models::chart::{ChartPoint, HighlightSegment};
use crate::models::interval::{DrawdownInterval, MergedInterval};
use crate::models::series::ReturnLookup;

/// Merge possibly-overlapping drawdown intervals into maximal disjoint spans.
///
/// Works on its own copies — the caller's slice is never mutated.
/// Comparisons are strictly-after throughout: an interval whose start
/// equals the current maximum end date is contained, not a new span,
/// and an interval whose end equals it does not extend anything.
///
/// Returns the spans sorted ascending by start date, pairwise disjoint.
/// An already-disjoint sorted input comes back unchanged.
pub fn merge_intervals(
    intervals: &[DrawdownInterval],
) -> Result<Vec<MergedInterval>, CoreError> {
    let mut sorted: Vec<MergedInterval> = intervals.iter().map(MergedInterval::from).collect();
    sorted.sort_by_key(|i| i.start_date);

    let mut iter = sorted.into_iter();
    let first = iter.next().ok_or_else(|| {
        CoreError::InvalidInput("cannot merge an empty drawdown interval list".into())
    })?;

    let mut merged = Vec::new();
    let mut max_end = first.end_date;
    merged.push(first);

    for interval in iter {
        if interval.start_date > max_end {
            // Starts past everything merged so far: a new disjoint span
            max_end = interval.end_date;
            merged.push(interval);
        } else if interval.end_date > max_end {
            // Overlaps or touches the last span: extend it
            max_end = interval.end_date;
            if let Some(last) = merged.last_mut() {
                last.end_date = interval.end_date;
            }
        }
        // Otherwise fully contained in the current span: nothing to do
    }

    Ok(merged)
}

/// Project merged spans onto the return lookup, producing one highlight
/// segment per span.
///
/// Walks every calendar day of each span in order and keeps only the
/// days present in the lookup. Missing days are skipped, never
/// zero-filled; a span with no matching days yields an empty segment.
///
/// Pure: no I/O, no side effects, deterministic for the same inputs.
pub fn project_segments(
    merged: &[MergedInterval],
    lookup: &ReturnLookup,
) -> Vec<HighlightSegment> {
    merged
        .iter()
        .map(|span| {
            let points = span
                .start_date
                .iter_days()
                .take_while(|day| *day <= span.end_date)
                .filter_map(|day| lookup.get(&day).map(|&value| ChartPoint::new(day, value)))
                .collect();
            HighlightSegment::new(points)
        })
        .collect()
}
