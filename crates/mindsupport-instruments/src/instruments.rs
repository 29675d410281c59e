pub mod gad7;
pub mod phq9;

use crate::scoring::{AnswerOption, Question, ScoreRange, SeverityColor};

/// Shared stem for both instruments' items.
pub const RECALL_PERIOD: &str =
    "Over the last 2 weeks, how often have you been bothered by the following problem?";

/// The four-point frequency scale both instruments use (0-3).
fn frequency_options() -> Vec<AnswerOption> {
    [
        ("Not at all", 0),
        ("Several days", 1),
        ("More than half the days", 2),
        ("Nearly every day", 3),
    ]
    .into_iter()
    .map(|(label, value)| AnswerOption {
        label: label.to_string(),
        value,
    })
    .collect()
}

fn frequency_questions(prompts: &[&str]) -> Vec<Question> {
    prompts
        .iter()
        .zip(1u32..)
        .map(|(prompt, id)| Question {
            id,
            prompt: prompt.to_string(),
            options: frequency_options(),
        })
        .collect()
}

fn range(min: u32, max: u32, level: &str, color: SeverityColor, description: &str) -> ScoreRange {
    ScoreRange {
        min,
        max,
        level: level.to_string(),
        color,
        description: description.to_string(),
    }
}
