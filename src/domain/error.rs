use std::io;

use thiserror::Error;

/// Library-wide error type for ezcat operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file (config.txt) not found.
    #[error("Configuration file not found: {0}")]
    ConfigFileMissing(String),

    /// A configuration line lacks the ` = ` separator or a parameter name.
    #[error("Malformed configuration line {line}: expected 'name = value', found '{content}'")]
    MalformedConfigLine { line: usize, content: String },

    /// No repository identity available from flags or environment.
    #[error("Repository not specified. Set GITHUB_REPOSITORY or pass --repository <owner/repository>.")]
    RepositoryMissing,

    /// Repository identity is not of the form `owner/repository`.
    #[error("Invalid repository '{0}': expected 'owner/repository'")]
    InvalidRepository(String),

    /// Parameter name cannot be turned into a search pattern.
    #[error("Invalid parameter name '{name}': {details}")]
    InvalidParameterName { name: String, details: String },

    /// Path resolves outside the repository root.
    #[error("Path escapes repository root: {0}")]
    PathTraversal(String),
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
            | AppError::MalformedConfigLine { .. }
            | AppError::InvalidRepository(_)
            | AppError::InvalidParameterName { .. }
            | AppError::PathTraversal(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigFileMissing(_) | AppError::RepositoryMissing => {
                io::ErrorKind::NotFound
            }
        }
    }
}
