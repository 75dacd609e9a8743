use thiserror::Error;

/// Unified error type for the entire drawdown-dashboard-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Core Algorithm ──────────────────────────────────────────────
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ── Data Boundary ───────────────────────────────────────────────
    #[error("Malformed date in field '{field}': '{value}' is not a valid YYYY-MM-DD date")]
    MalformedDate {
        field: String,
        value: String,
    },

    #[error("Malformed number in field '{field}': {value} is not finite")]
    MalformedNumber {
        field: String,
        value: f64,
    },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── File I/O (native only) ──────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
