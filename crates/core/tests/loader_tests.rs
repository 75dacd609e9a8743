// ═══════════════════════════════════════════════════════════════════
// Loader Tests — JSON boundary parsing, validation, file loading
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use std::io::Write;

use drawdown_dashboard_core::errors::CoreError;
use drawdown_dashboard_core::loader;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

const RETURNS_JSON: &str = r#"{
    "data": {
        "combined": [
            { "date": "2021-01-04", "cumsum": 0.42 },
            { "date": "2021-01-01", "cumsum": 0.00 },
            { "date": "2021-01-05", "cumsum": -0.13 }
        ]
    }
}"#;

const DRAWDOWNS_JSON: &str = r#"{
    "data": [
        { "Start_Date": "2021-01-04", "End_Date": "2021-01-05", "Max_Drawdown": -12.3456 },
        { "Start_Date": "2021-01-01", "End_Date": "2021-01-02", "Max_Drawdown": -3.5 }
    ]
}"#;

// ═══════════════════════════════════════════════════════════════════
//  parse_returns
// ═══════════════════════════════════════════════════════════════════

mod returns {
    use super::*;

    #[test]
    fn parses_and_sorts_the_series() {
        let series = loader::parse_returns(RETURNS_JSON).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.first_date(), Some(d(2021, 1, 1)));
        assert_eq!(series.last_date(), Some(d(2021, 1, 5)));
        assert_eq!(series.value_on(d(2021, 1, 4)), Some(0.42));
    }

    #[test]
    fn empty_combined_list_is_an_empty_series() {
        let series = loader::parse_returns(r#"{"data":{"combined":[]}}"#).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn rejects_unparseable_date() {
        let json = r#"{"data":{"combined":[{"date":"01/04/2021","cumsum":0.1}]}}"#;
        let err = loader::parse_returns(json).unwrap_err();
        assert!(matches!(
            err,
            CoreError::MalformedDate { ref field, .. } if field == "date"
        ));
    }

    #[test]
    fn rejects_overflowing_cumsum_literal() {
        // serde_json refuses literals that do not fit an f64, so these
        // never even reach the finiteness check.
        let json = r#"{"data":{"combined":[{"date":"2021-01-04","cumsum":1e999}]}}"#;
        let err = loader::parse_returns(json).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn rejects_structural_problems() {
        let err = loader::parse_returns(r#"{"data":{}}"#).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));

        let err = loader::parse_returns("not json at all").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  parse_drawdowns
// ═══════════════════════════════════════════════════════════════════

mod drawdowns {
    use super::*;

    #[test]
    fn parses_preserving_document_order() {
        let intervals = loader::parse_drawdowns(DRAWDOWNS_JSON).unwrap();
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].start_date, d(2021, 1, 4));
        assert_eq!(intervals[0].max_drawdown, -12.3456);
        assert_eq!(intervals[1].end_date, d(2021, 1, 2));
    }

    #[test]
    fn accepts_single_day_period() {
        let json = r#"{"data":[{"Start_Date":"2021-03-01","End_Date":"2021-03-01","Max_Drawdown":-1.0}]}"#;
        let intervals = loader::parse_drawdowns(json).unwrap();
        assert_eq!(intervals[0].duration_days(), 0);
    }

    #[test]
    fn rejects_period_ending_before_it_starts() {
        let json = r#"{"data":[{"Start_Date":"2021-01-10","End_Date":"2021-01-01","Max_Drawdown":-1.0}]}"#;
        let err = loader::parse_drawdowns(json).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn rejects_unparseable_end_date() {
        let json = r#"{"data":[{"Start_Date":"2021-01-01","End_Date":"soon","Max_Drawdown":-1.0}]}"#;
        let err = loader::parse_drawdowns(json).unwrap_err();
        assert!(matches!(
            err,
            CoreError::MalformedDate { ref field, .. } if field == "End_Date"
        ));
    }

    #[test]
    fn rejects_overflowing_drawdown_literal() {
        let json = r#"{"data":[{"Start_Date":"2021-01-01","End_Date":"2021-01-02","Max_Drawdown":-1e999}]}"#;
        let err = loader::parse_drawdowns(json).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn rejects_missing_fields() {
        let json = r#"{"data":[{"Start_Date":"2021-01-01"}]}"#;
        let err = loader::parse_drawdowns(json).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn empty_document_parses_to_empty_list() {
        // The loader accepts an empty list; the merge step is where
        // emptiness becomes an error.
        let intervals = loader::parse_drawdowns(r#"{"data":[]}"#).unwrap();
        assert!(intervals.is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  File loading (native)
// ═══════════════════════════════════════════════════════════════════

mod files {
    use super::*;

    #[test]
    fn loads_both_documents_from_disk() {
        let dir = tempfile::tempdir().unwrap();

        let returns_path = dir.path().join("returns.json");
        let mut f = std::fs::File::create(&returns_path).unwrap();
        f.write_all(RETURNS_JSON.as_bytes()).unwrap();

        let drawdowns_path = dir.path().join("ddperiod.json");
        let mut f = std::fs::File::create(&drawdowns_path).unwrap();
        f.write_all(DRAWDOWNS_JSON.as_bytes()).unwrap();

        let series = loader::load_returns_file(returns_path.to_str().unwrap()).unwrap();
        assert_eq!(series.len(), 3);

        let intervals = loader::load_drawdowns_file(drawdowns_path.to_str().unwrap()).unwrap();
        assert_eq!(intervals.len(), 2);
    }

    #[test]
    fn missing_file_is_a_file_io_error() {
        let err = loader::load_returns_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CoreError::FileIO(_)));
    }
}
