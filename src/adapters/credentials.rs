//! API key sources: environment, interactive prompt, fixed value.

use std::io::{ErrorKind, IsTerminal};

use dialoguer::{Error as DialoguerError, Password};

use crate::domain::{ApiKey, AppError};
use crate::ports::CredentialProvider;

pub const API_KEY_ENV: &str = "N8N_API_KEY";

/// Reads the key from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvCredentialProvider {
    var: String,
}

impl EnvCredentialProvider {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new(API_KEY_ENV)
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn api_key(&self) -> Result<Option<ApiKey>, AppError> {
        Ok(std::env::var(&self.var).ok().and_then(ApiKey::new))
    }
}

/// Asks the operator for the key with hidden input.
///
/// Yields nothing when stdin is not a terminal. The prompt only disables echo,
/// so on Unix Ctrl-C still delivers SIGINT and ends the process directly.
/// `AppError::Cancelled` covers reads the terminal reports as interrupted.
#[derive(Debug, Clone, Default)]
pub struct PromptCredentialProvider;

impl CredentialProvider for PromptCredentialProvider {
    fn api_key(&self) -> Result<Option<ApiKey>, AppError> {
        if !std::io::stdin().is_terminal() {
            return Ok(None);
        }

        println!("🔑 n8n API key not defined.");
        let input = Password::new()
            .with_prompt("Please enter your API key and press Enter")
            .allow_empty_password(true)
            .interact();

        input.map(ApiKey::new).map_err(prompt_error)
    }
}

fn prompt_error(error: DialoguerError) -> AppError {
    match error {
        DialoguerError::IO(err) if err.kind() == ErrorKind::Interrupted => AppError::Cancelled,
        DialoguerError::IO(err) => AppError::Io(err),
    }
}

/// Supplies a fixed key.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    key: Option<ApiKey>,
}

impl StaticCredentialProvider {
    pub fn new(key: impl AsRef<str>) -> Self {
        Self { key: ApiKey::new(key) }
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn api_key(&self) -> Result<Option<ApiKey>, AppError> {
        Ok(self.key.clone())
    }
}
