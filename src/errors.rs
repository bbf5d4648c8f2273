use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecorderError {
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Recording session already started")]
    AlreadyRecording,

    #[error("Recording session not started")]
    NotRecording,

    #[error("Unsupported event type: {0}")]
    UnsupportedEvent(String),

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Step sink closed: {0}")]
    SinkClosed(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RecorderError>;
