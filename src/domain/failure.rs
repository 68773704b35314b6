//! Per-item failure taxonomy shared by the deploy and activate batches.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ApiError;

/// Why a single file or identifier could not be processed.
///
/// Every variant is terminal for its item and never for the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("File '{}' not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Unexpected error reading '{}': {details}", path.display())]
    ReadError { path: PathBuf, details: String },

    #[error("Failed to parse JSON from '{}': {details}", path.display())]
    MalformedDefinition { path: PathBuf, details: String },

    /// Connection refused, DNS failure, timeout.
    #[error("Request failed: {message}")]
    TransportFailure { message: String },

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// A success status whose body could not be interpreted.
    #[error("Unexpected response (HTTP {status}): {details}")]
    UnexpectedResponse { status: u16, details: String },

    #[error(
        "Workflow with ID '{id}' not found (404). It might have been deleted or the ID is incorrect."
    )]
    NotFound { id: String },

    /// Covers "already active" and any other validation failure; the server does
    /// not say which.
    #[error(
        "Request rejected (HTTP {status}). The workflow might already be active or failed validation. Response: {body}"
    )]
    ClientRejected { status: u16, body: String },
}

impl FailureKind {
    /// Short machine-friendly label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            FailureKind::FileNotFound { .. } => "file_not_found",
            FailureKind::ReadError { .. } => "read_error",
            FailureKind::MalformedDefinition { .. } => "malformed_definition",
            FailureKind::TransportFailure { .. } => "transport_failure",
            FailureKind::HttpError { .. } => "http_error",
            FailureKind::UnexpectedResponse { .. } => "unexpected_response",
            FailureKind::NotFound { .. } => "not_found",
            FailureKind::ClientRejected { .. } => "client_rejected",
        }
    }

    /// Classify an activation error, specializing the statuses the server uses
    /// for unknown identifiers and rejected requests.
    pub fn from_activation_error(id: &str, error: ApiError) -> Self {
        match error {
            ApiError::Http { status: 404, .. } => FailureKind::NotFound { id: id.to_string() },
            ApiError::Http { status: 400, body } => FailureKind::ClientRejected { status: 400, body },
            other => other.into(),
        }
    }
}

impl From<ApiError> for FailureKind {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Transport { message } => FailureKind::TransportFailure { message },
            ApiError::Http { status, body } => FailureKind::HttpError { status, body },
            ApiError::UnexpectedResponse { status, details } => {
                FailureKind::UnexpectedResponse { status, details }
            }
        }
    }
}
