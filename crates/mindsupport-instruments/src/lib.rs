//! mindsupport-instruments
//!
//! Self-report screening instruments (PHQ-9, GAD-7). Pure data plus the
//! scoring rules that map an answer set onto a severity band. No I/O.

pub mod error;
pub mod instruments;
pub mod report;
pub mod scoring;
pub mod session;

use tracing::{debug, info, warn};

use error::InstrumentError;
use scoring::{Answer, Question, ScoreOutcome, ScoreRange, TestResult, ValidationError};

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "phq9").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str;

    /// What the instrument screens for, as shown in exports
    /// (e.g., "Depression Screening").
    fn heading(&self) -> &str;

    /// The questions, in administration order.
    fn questions(&self) -> &[Question];

    /// Severity bands covering `0..=max_score()`.
    fn ranges(&self) -> &[ScoreRange];

    /// Highest attainable total.
    fn max_score(&self) -> u32 {
        self.questions().iter().map(Question::max_value).sum()
    }

    /// Check each answer against the question at its position.
    ///
    /// Answers past the last question are ignored here; [`Instrument::score`]
    /// rejects them as a whole.
    fn validate_answers(&self, answers: &[Answer]) -> Vec<ValidationError> {
        let questions = self.questions();
        let mut errors = Vec::new();

        for (answer, question) in answers.iter().zip(questions) {
            if answer.question_id != question.id {
                let message = if questions.iter().any(|q| q.id == answer.question_id) {
                    format!(
                        "{}: answer for question {} recorded where question {} was expected",
                        self.name(),
                        answer.question_id,
                        question.id,
                    )
                } else {
                    format!("{}: unknown question {}", self.name(), answer.question_id)
                };
                errors.push(ValidationError {
                    question_id: answer.question_id,
                    value: answer.value,
                    message,
                });
            } else if !question.accepts(answer.value) {
                errors.push(ValidationError {
                    question_id: answer.question_id,
                    value: answer.value,
                    message: format!(
                        "{}: {} is not a valid response to question {} (0-{})",
                        self.name(),
                        answer.value,
                        question.id,
                        question.max_value(),
                    ),
                });
            }
        }
        errors
    }

    /// Map a total onto its severity band, falling back to the
    /// "Unknown" sentinel when no band covers it.
    fn classify(&self, total: u32) -> TestResult {
        match self.ranges().iter().find(|r| r.contains(total)) {
            Some(range) => TestResult::from_range(total, range),
            None => {
                warn!(instrument = self.id(), score = total, "no severity range covers score");
                TestResult::unknown(total)
            }
        }
    }

    /// Score a full answer set.
    ///
    /// An answer set shorter than the question list yields
    /// [`ScoreOutcome::Incomplete`] rather than a partial total.
    fn score(&self, answers: &[Answer]) -> Result<ScoreOutcome, InstrumentError> {
        let expected = self.questions().len();
        if answers.len() > expected {
            return Err(InstrumentError::TooManyAnswers {
                instrument_id: self.id().to_string(),
                expected,
                got: answers.len(),
            });
        }

        if let Some(error) = self.validate_answers(answers).into_iter().next() {
            return Err(error.into());
        }

        if answers.len() < expected {
            debug!(instrument = self.id(), answered = answers.len(), expected, "incomplete answer set");
            return Ok(ScoreOutcome::Incomplete {
                answered: answers.len(),
                expected,
            });
        }

        let total: u32 = answers.iter().map(|a| a.value).sum();
        let result = self.classify(total);
        info!(instrument = self.id(), score = total, level = %result.level, "instrument scored");
        Ok(ScoreOutcome::Complete(result))
    }

    /// Describe every way the severity bands fail to partition
    /// `0..=max_score()`. Empty for a well-formed instrument.
    fn range_errors(&self) -> Vec<String> {
        let mut ranges: Vec<&ScoreRange> = self.ranges().iter().collect();
        ranges.sort_by_key(|r| (r.min, r.max));

        let mut errors = Vec::new();
        let Some(first) = ranges.first() else {
            errors.push(format!("{}: no severity ranges defined", self.name()));
            return errors;
        };
        if first.min != 0 {
            errors.push(format!("{}: scores 0-{} are not covered", self.name(), first.min - 1));
        }

        for range in &ranges {
            if range.min > range.max {
                errors.push(format!(
                    "{}: range '{}' is inverted ({} > {})",
                    self.name(),
                    range.level,
                    range.min,
                    range.max,
                ));
            }
        }

        for pair in ranges.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if next.min <= prev.max {
                errors.push(format!(
                    "{}: ranges '{}' and '{}' overlap at {}",
                    self.name(),
                    prev.level,
                    next.level,
                    next.min,
                ));
            } else if next.min > prev.max + 1 {
                errors.push(format!(
                    "{}: scores {}-{} are not covered",
                    self.name(),
                    prev.max + 1,
                    next.min - 1,
                ));
            }
        }

        let max_score = self.max_score();
        let top = ranges.iter().map(|r| r.max).max().unwrap_or(0);
        if top < max_score {
            errors.push(format!("{}: scores {}-{} are not covered", self.name(), top + 1, max_score));
        } else if top > max_score {
            errors.push(format!(
                "{}: ranges extend to {} beyond the maximum score {}",
                self.name(),
                top,
                max_score,
            ));
        }
        errors
    }
}

/// Return all registered instruments, in the order a complete screening
/// administers them.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Like [`get_instrument`], but an unknown ID is an error.
pub fn require_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
