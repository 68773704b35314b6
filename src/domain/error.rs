use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for run-level (fatal) failures.
///
/// Per-item failures inside a batch are [`crate::domain::FailureKind`] and never
/// surface here.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration value is out of range or malformed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// No API key from the environment or the interactive prompt.
    #[error("API key cannot be empty. Set N8N_API_KEY or enter it when prompted.")]
    MissingApiKey,

    /// Operator aborted an interactive prompt.
    #[error("Operation cancelled by user")]
    Cancelled,

    /// Persisted identifier list does not exist yet.
    #[error(
        "Workflow IDs file not found: '{}'. Run 'n8n-deploy deploy' first to create and save the workflow IDs.",
        path.display()
    )]
    WorkflowIdsNotFound { path: PathBuf },

    /// Persisted identifier list is not a JSON array of strings.
    #[error(
        "Failed to parse JSON from '{}': {details}. Ensure the file contains a valid JSON array of workflow IDs.",
        path.display()
    )]
    MalformedPersistedList { path: PathBuf, details: String },

    /// Persisted identifier list could not be written.
    #[error("Failed to save workflow IDs to '{}': {details}", path.display())]
    PersistenceWriteFailure { path: PathBuf, details: String },

    /// HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }
}
