use mindsupport_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("config error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("transcript error: {0}")]
    Transcript(#[from] CoreError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
