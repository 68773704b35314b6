use crate::domain::{ApiKey, AppError};

/// Port for obtaining the n8n API key.
pub trait CredentialProvider {
    /// Return a key, `Ok(None)` when this source has none to offer.
    fn api_key(&self) -> Result<Option<ApiKey>, AppError>;
}

/// Try each provider in order and return the first key found.
///
/// Fails with `MissingApiKey` when no provider yields a non-empty key.
pub fn resolve_api_key(providers: &[&dyn CredentialProvider]) -> Result<ApiKey, AppError> {
    for provider in providers {
        if let Some(key) = provider.api_key()? {
            return Ok(key);
        }
    }
    Err(AppError::MissingApiKey)
}
