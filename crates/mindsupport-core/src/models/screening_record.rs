use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// The outcome of one screening visit, one entry per completed instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningRecord {
    pub id: Uuid,
    pub taken_on: jiff::civil::Date,
    pub entries: Vec<RecordedScore>,
}

impl ScreeningRecord {
    pub fn new(taken_on: jiff::civil::Date, entries: Vec<RecordedScore>) -> Self {
        Self {
            id: Uuid::new_v4(),
            taken_on,
            entries,
        }
    }

    pub fn entry(&self, instrument_id: &str) -> Option<&RecordedScore> {
        self.entries.iter().find(|e| e.instrument_id == instrument_id)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A scored instrument as it is kept and exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordedScore {
    pub instrument_id: String,
    pub instrument_name: String,
    /// Short label used in exports, e.g. "Depression Screening".
    pub heading: String,
    pub score: u32,
    pub max_score: u32,
    pub level: String,
    pub description: String,
}
