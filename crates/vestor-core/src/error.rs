use thiserror::Error;

/// Top-level error type for the Vestor system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and convert into `VestorError` at the composition
/// root so that the `?` operator works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VestorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for VestorError {
    fn from(err: toml::de::Error) -> Self {
        VestorError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for VestorError {
    fn from(err: toml::ser::Error) -> Self {
        VestorError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for VestorError {
    fn from(err: serde_json::Error) -> Self {
        VestorError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Vestor operations.
pub type Result<T> = std::result::Result<T, VestorError>;
