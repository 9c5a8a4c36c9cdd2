use std::io;

use thiserror::Error;

/// Library-wide error type for isoprompt operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Network failure or non-2xx response from the completion service.
    #[error("Completion request failed: {message}")]
    Transport { message: String, status: Option<u16> },

    /// Reply could not be normalized into a structure update.
    #[error("Malformed completion reply: {0}")]
    MalformedResponse(String),

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Model file not found at path.
    #[error("Model file not found: {0}")]
    ModelFileNotFound(String),

    /// Unknown hosted model identifier.
    #[error("Unknown model '{name}'. Available: {available}")]
    ModelNotFound { name: String, available: String },

    /// TOML parsing error in a model file.
    #[error("Model file parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error when saving a model file.
    #[error("Model file serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::MalformedResponse(_)
            | AppError::TomlParse(_)
            | AppError::TomlSerialize(_) => io::ErrorKind::InvalidInput,
            AppError::ModelFileNotFound(_) | AppError::ModelNotFound { .. } => {
                io::ErrorKind::NotFound
            }
            AppError::Transport { .. } | AppError::Clipboard(_) => io::ErrorKind::Other,
        }
    }
}
