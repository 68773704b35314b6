use thiserror::Error;

/// Failure of a single call against the n8n REST API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, DNS, timeout).
    #[error("{message}")]
    Transport { message: String },

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The server answered with success but the body was not what the API documents.
    #[error("unexpected response (HTTP {status}): {details}")]
    UnexpectedResponse { status: u16, details: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport { .. } => None,
            ApiError::Http { status, .. } | ApiError::UnexpectedResponse { status, .. } => {
                Some(*status)
            }
        }
    }
}
