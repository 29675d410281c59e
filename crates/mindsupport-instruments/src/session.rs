//! Question-by-question administration of one or more instruments.
//!
//! A complete screening runs PHQ-9 then GAD-7; answers are kept per
//! instrument and scored the moment the last question is answered.

use mindsupport_core::models::screening_record::{RecordedScore, ScreeningRecord};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;
use crate::instruments::{gad7::Gad7, phq9::Phq9};
use crate::scoring::{Answer, Question, ScoreOutcome, TestResult, ValidationError};
use crate::{Instrument, require_instrument};

/// A finished instrument within a session.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompletedInstrument {
    pub instrument_id: String,
    pub instrument_name: String,
    pub heading: String,
    pub max_score: u32,
    pub result: TestResult,
}

impl From<&CompletedInstrument> for RecordedScore {
    fn from(done: &CompletedInstrument) -> Self {
        RecordedScore {
            instrument_id: done.instrument_id.clone(),
            instrument_name: done.instrument_name.clone(),
            heading: done.heading.clone(),
            score: done.result.score,
            max_score: done.max_score,
            level: done.result.level.clone(),
            description: done.result.description.clone(),
        }
    }
}

/// Where the session stands, 1-based for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Progress {
    pub question_number: usize,
    pub total: usize,
}

impl Progress {
    /// Fraction of the current instrument already answered.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.question_number - 1) as f64 / self.total as f64
    }
}

/// What happened after recording an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Another question of the same instrument is up.
    NextQuestion,
    /// The instrument was scored and the next one begins.
    NextInstrument(TestResult),
    /// The last instrument was scored.
    Finished(TestResult),
}

pub struct ScreeningSession {
    queue: Vec<Box<dyn Instrument>>,
    current: usize,
    answers: Vec<Answer>,
    results: Vec<CompletedInstrument>,
}

impl ScreeningSession {
    /// PHQ-9 followed by GAD-7.
    pub fn complete() -> Self {
        Self::with_instruments(vec![Box::new(Phq9), Box::new(Gad7)])
    }

    pub fn single(instrument: Box<dyn Instrument>) -> Self {
        Self::with_instruments(vec![instrument])
    }

    pub fn for_id(id: &str) -> Result<Self, InstrumentError> {
        Ok(Self::single(require_instrument(id)?))
    }

    pub fn with_instruments(queue: Vec<Box<dyn Instrument>>) -> Self {
        Self {
            queue,
            current: 0,
            answers: Vec::new(),
            results: Vec::new(),
        }
    }

    pub fn current_instrument(&self) -> Option<&dyn Instrument> {
        self.queue.get(self.current).map(|i| i.as_ref())
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_instrument()?.questions().get(self.answers.len())
    }

    pub fn progress(&self) -> Option<Progress> {
        let instrument = self.current_instrument()?;
        Some(Progress {
            question_number: self.answers.len() + 1,
            total: instrument.questions().len(),
        })
    }

    /// Answers recorded so far for the current instrument.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn results(&self) -> &[CompletedInstrument] {
        &self.results
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.queue.len()
    }

    /// Record the point value chosen for the current question.
    pub fn record(&mut self, value: u32) -> Result<Step, InstrumentError> {
        let instrument = self
            .queue
            .get(self.current)
            .ok_or(InstrumentError::SessionFinished)?;
        let question = instrument
            .questions()
            .get(self.answers.len())
            .ok_or(InstrumentError::SessionFinished)?;

        if !question.accepts(value) {
            return Err(ValidationError {
                question_id: question.id,
                value,
                message: format!(
                    "{}: {} is not a valid response to question {}",
                    instrument.name(),
                    value,
                    question.id,
                ),
            }
            .into());
        }

        self.answers.push(Answer {
            question_id: question.id,
            value,
        });

        let ScoreOutcome::Complete(result) = instrument.score(&self.answers)? else {
            return Ok(Step::NextQuestion);
        };

        self.results.push(CompletedInstrument {
            instrument_id: instrument.id().to_string(),
            instrument_name: instrument.name().to_string(),
            heading: instrument.heading().to_string(),
            max_score: instrument.max_score(),
            result: result.clone(),
        });
        self.answers.clear();
        self.current += 1;

        if self.is_finished() {
            Ok(Step::Finished(result))
        } else {
            Ok(Step::NextInstrument(result))
        }
    }

    /// Step back one question within the current instrument.
    ///
    /// Returns the withdrawn answer's value so it can be preselected.
    /// Does nothing on the first question.
    pub fn back(&mut self) -> Option<u32> {
        self.answers.pop().map(|a| a.value)
    }

    pub fn restart(&mut self) {
        self.current = 0;
        self.answers.clear();
        self.results.clear();
    }

    /// Snapshot of the completed instruments for export or storage.
    pub fn to_record(&self, taken_on: jiff::civil::Date) -> ScreeningRecord {
        ScreeningRecord::new(taken_on, self.results.iter().map(RecordedScore::from).collect())
    }
}
