use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("{instrument_id}: expected {expected} answers, got {got}")]
    TooManyAnswers {
        instrument_id: String,
        expected: usize,
        got: usize,
    },

    #[error("screening session is already finished")]
    SessionFinished,
}
