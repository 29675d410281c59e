use crate::scoring::{Question, ScoreRange, SeverityColor};
use crate::Instrument;

use super::{frequency_questions, range};

/// GAD-7: Generalized Anxiety Disorder scale, seven items.
/// Each item 0-3, total 0-21.
pub struct Gad7;

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn heading(&self) -> &str {
        "Anxiety Screening"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            frequency_questions(&[
                "Feeling nervous, anxious, or on edge",
                "Not being able to stop or control worrying",
                "Worrying too much about different things",
                "Trouble relaxing",
                "Being so restless that it is hard to sit still",
                "Becoming easily annoyed or irritable",
                "Feeling afraid, as if something awful might happen",
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
                    "Minimal anxiety symptoms.",
                ),
                range(
                    5,
                    9,
                    "Mild",
                    SeverityColor::Warning,
                    "Mild anxiety symptoms. Relaxation techniques and regular check-ins may help.",
                ),
                range(
                    10,
                    14,
                    "Moderate",
                    SeverityColor::Warning,
                    "Moderate anxiety symptoms. Consider speaking with a counselor.",
                ),
                range(
                    15,
                    21,
                    "Severe",
                    SeverityColor::Destructive,
                    "Severe anxiety symptoms. Please reach out to a mental health professional.",
                ),
            ]
        });
        &RANGES
    }
}
