use crate::scoring::{Question, ScoreRange, SeverityColor};
use crate::Instrument;

use super::{frequency_questions, range};

/// PHQ-9: Patient Health Questionnaire, nine items.
/// Each item 0-3, total 0-27. Higher = more severe depressive symptoms.
pub struct Phq9;

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn heading(&self) -> &str {
        "Depression Screening"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            frequency_questions(&[
                "Little interest or pleasure in doing things",
                "Feeling down, depressed, or hopeless",
                "Trouble falling or staying asleep, or sleeping too much",
                "Feeling tired or having little energy",
                "Poor appetite or overeating",
                "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
                "Trouble concentrating on things, such as reading or watching television",
                "Moving or speaking so slowly that other people could have noticed, or being so fidgety or restless that you have been moving around a lot more than usual",
                "Thoughts that you would be better off dead, or of hurting yourself in some way",
            ])
        });
        &QUESTIONS
    }

    fn ranges(&self) -> &[ScoreRange] {
        static RANGES: std::sync::LazyLock<Vec<ScoreRange>> = std::sync::LazyLock::new(|| {
            vec![
                range(
                    0,
                    4,
                    "Minimal",
                    SeverityColor::Success,
                    "Minimal or no depression symptoms. Keep looking after your wellbeing.",
                ),
                range(
                    5,
                    9,
                    "Mild",
                    SeverityColor::Warning,
                    "Mild depression symptoms. Self-care strategies and monitoring are recommended.",
                ),
                range(
                    10,
                    14,
                    "Moderate",
                    SeverityColor::Warning,
                    "Moderate depression symptoms. Consider speaking with a counselor.",
                ),
                range(
                    15,
                    19,
                    "Moderately Severe",
                    SeverityColor::Destructive,
                    "Moderately severe depression symptoms. Professional support is strongly recommended.",
                ),
                range(
                    20,
                    27,
                    "Severe",
                    SeverityColor::Destructive,
                    "Severe depression symptoms. Please reach out to a mental health professional as soon as possible.",
                ),
            ]
        });
        &RANGES
    }
}
