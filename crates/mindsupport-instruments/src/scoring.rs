use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// One selectable response to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub label: String,
    pub value: u32,
}

/// A questionnaire item. `id` is the 1-based position within the instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Whether `value` is the point value of one of this question's options.
    pub fn accepts(&self, value: u32) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    pub fn max_value(&self) -> u32 {
        self.options.iter().map(|o| o.value).max().unwrap_or(0)
    }
}

/// The point value chosen for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    pub question_id: u32,
    pub value: u32,
}

impl Answer {
    /// Answers for questions `1..=values.len()` in order.
    pub fn sequence(values: &[u32]) -> Vec<Answer> {
        values
            .iter()
            .zip(1u32..)
            .map(|(&value, question_id)| Answer { question_id, value })
            .collect()
    }
}

/// Display tag for a severity band. Maps onto the frontend's theme tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityColor {
    Success,
    Warning,
    Destructive,
    Muted,
}

/// A closed score interval `[min, max]` and the severity it stands for.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u32,
    pub max: u32,
    pub level: String,
    pub color: SeverityColor,
    pub description: String,
}

impl ScoreRange {
    pub fn contains(&self, score: u32) -> bool {
        score >= self.min && score <= self.max
    }
}

/// A scored instrument. Always derived from answers, never stored alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestResult {
    pub score: u32,
    pub level: String,
    pub color: SeverityColor,
    pub description: String,
}

pub const UNKNOWN_LEVEL: &str = "Unknown";

impl TestResult {
    pub fn from_range(score: u32, range: &ScoreRange) -> Self {
        Self {
            score,
            level: range.level.clone(),
            color: range.color,
            description: range.description.clone(),
        }
    }

    /// Sentinel for a total no configured range covers.
    pub fn unknown(score: u32) -> Self {
        Self {
            score,
            level: UNKNOWN_LEVEL.to_string(),
            color: SeverityColor::Muted,
            description: "Unable to determine severity level.".to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.level == UNKNOWN_LEVEL
    }
}

/// Result of scoring an answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreOutcome {
    Complete(TestResult),
    /// Fewer answers than questions; no partial score is computed.
    Incomplete { answered: usize, expected: usize },
}

impl ScoreOutcome {
    pub fn result(&self) -> Option<&TestResult> {
        match self {
            ScoreOutcome::Complete(result) => Some(result),
            ScoreOutcome::Incomplete { .. } => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, ScoreOutcome::Complete(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub question_id: u32,
    pub value: u32,
    pub message: String,
}
