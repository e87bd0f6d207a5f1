use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("Unknown transform kind: {0}")]
    UnknownKind(String),
    #[error("Invalid configuration for '{kind}' transform: {reason}")]
    InvalidConfig { kind: String, reason: String },
}

pub type Result<T> = std::result::Result<T, TransformError>;
