use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::template::TemplateError;

/// Library-wide error type for stackgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure without a known path.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// An input file (fragment, template or config) could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The rendered output could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Fragment name is not usable as a template identifier.
    #[error(
        "Invalid fragment name '{0}': must start with a letter or underscore and contain only alphanumerics or underscores"
    )]
    InvalidFragmentName(String),

    /// The same fragment name was configured twice.
    #[error("Duplicate fragment name '{0}'")]
    DuplicateFragment(String),

    /// Template failed to parse or render.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Rendered output is not well-formed JSON.
    #[error("Rendered output for {} is not valid JSON: {details}", .path.display())]
    InvalidJson { path: PathBuf, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ReadFailed { source, .. } | AppError::WriteFailed { source, .. } => {
                source.kind()
            }
            AppError::Configuration(_)
            | AppError::InvalidFragmentName(_)
            | AppError::DuplicateFragment(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::Template(_) | AppError::InvalidJson { .. } => io::ErrorKind::InvalidData,
        }
    }
}
