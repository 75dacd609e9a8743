use serde::{Deserialize, Serialize};

/// One display row of the drawdown summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawdownRow {
    /// Period label, "START END" (both ISO-8601)
    pub period: String,

    /// Max drawdown, rounded to 2 decimal places for display
    pub max_drawdown: f64,

    /// Exclusive day count between start and end dates
    pub days: i64,
}
