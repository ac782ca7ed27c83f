use serde::{Deserialize, Serialize};

/// One currency's value on one feed day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    /// Feed date as served (`DD.MM.YYYY`).
    pub date: String,
    pub char_code: String,
    pub name: String,
    pub value: f64,
}

impl RateRecord {
    pub fn new(
        date: impl Into<String>,
        char_code: impl Into<String>,
        name: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            date: date.into(),
            char_code: char_code.into(),
            name: name.into(),
            value,
        }
    }
}

/// Extremes and mean of a record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateReport {
    pub max: RateRecord,
    pub min: RateRecord,
    pub mean: f64,
    pub count: usize,
}
