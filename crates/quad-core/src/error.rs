use thiserror::Error;

/// Top-level error type for the Quad engine.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for QuadError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuadError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Corpus error: {0}")]
    Corpus(String),

    #[error("Search error: {0}")]
    Search(String),

    #[error("Directory error: {0}")]
    Directory(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for QuadError {
    fn from(err: toml::de::Error) -> Self {
        QuadError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for QuadError {
    fn from(err: toml::ser::Error) -> Self {
        QuadError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for QuadError {
    fn from(err: serde_json::Error) -> Self {
        QuadError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Quad operations.
pub type Result<T> = std::result::Result<T, QuadError>;
