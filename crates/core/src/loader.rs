//! JSON boundary for the two static dashboard resources.
//!
//! The wire shapes mirror the upstream export exactly: the returns
//! document nests its records under `data.combined`, the drawdown
//! document keeps the exporter's capitalized field names. All
//! validation happens here — the core algorithms assume clean data.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::CoreError;
use crate::models::interval::DrawdownInterval;
use crate::models::series::{DateValuePoint, ReturnSeries};

// ── Wire documents ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ReturnsDocument {
    data: ReturnsData,
}

#[derive(Debug, Deserialize)]
struct ReturnsData {
    combined: Vec<RawReturnRecord>,
}

#[derive(Debug, Deserialize)]
struct RawReturnRecord {
    date: String,
    cumsum: f64,
}

#[derive(Debug, Deserialize)]
struct DrawdownDocument {
    data: Vec<RawDrawdownRecord>,
}

#[derive(Debug, Deserialize)]
struct RawDrawdownRecord {
    #[serde(rename = "Start_Date")]
    start_date: String,

    #[serde(rename = "End_Date")]
    end_date: String,

    #[serde(rename = "Max_Drawdown")]
    max_drawdown: f64,
}

// ── Parsing (works everywhere, including WASM) ──────────────────────

/// Parse and validate a returns document.
///
/// Rejects unparseable dates (`MalformedDate`) and non-finite cumsum
/// values (`MalformedNumber`); structural JSON problems surface as
/// `Deserialization`. The resulting series is sorted ascending.
pub fn parse_returns(json: &str) -> Result<ReturnSeries, CoreError> {
    let doc: ReturnsDocument = serde_json::from_str(json)?;

    let mut points = Vec::with_capacity(doc.data.combined.len());
    for record in doc.data.combined {
        let date = parse_date("date", &record.date)?;
        let value = check_finite("cumsum", record.cumsum)?;
        points.push(DateValuePoint { date, value });
    }

    Ok(ReturnSeries::from_points(points))
}

/// Parse and validate a drawdown-period document.
///
/// Rejects unparseable dates, non-finite drawdown values, and periods
/// that end before they start (`InvalidInput`). The interval order of
/// the document is preserved.
pub fn parse_drawdowns(json: &str) -> Result<Vec<DrawdownInterval>, CoreError> {
    let doc: DrawdownDocument = serde_json::from_str(json)?;

    let mut intervals = Vec::with_capacity(doc.data.len());
    for record in doc.data {
        let start_date = parse_date("Start_Date", &record.start_date)?;
        let end_date = parse_date("End_Date", &record.end_date)?;
        if start_date > end_date {
            return Err(CoreError::InvalidInput(format!(
                "drawdown period starts after it ends: {start_date} > {end_date}"
            )));
        }
        let max_drawdown = check_finite("Max_Drawdown", record.max_drawdown)?;
        intervals.push(DrawdownInterval::new(start_date, end_date, max_drawdown));
    }

    Ok(intervals)
}

// ── File loading (native only, not WASM) ────────────────────────────

/// Load and parse a returns document from a file on disk.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_returns_file(path: &str) -> Result<ReturnSeries, CoreError> {
    let json = std::fs::read_to_string(path)?;
    parse_returns(&json)
}

/// Load and parse a drawdown-period document from a file on disk.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_drawdowns_file(path: &str) -> Result<Vec<DrawdownInterval>, CoreError> {
    let json = std::fs::read_to_string(path)?;
    parse_drawdowns(&json)
}

// ── Field validation ────────────────────────────────────────────────

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| CoreError::MalformedDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn check_finite(field: &str, value: f64) -> Result<f64, CoreError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoreError::MalformedNumber {
            field: field.to_string(),
            value,
        })
    }
}
