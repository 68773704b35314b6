//! Deploy configuration loading.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::{AppError, ConfigOverrides, DeployConfig};

/// Load configuration from an optional TOML file, then apply overrides.
///
/// Without a file the defaults are used. The merged result is validated.
pub fn load_config(
    path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<DeployConfig, AppError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|err| {
                if err.kind() == ErrorKind::NotFound {
                    AppError::config_error(format!("Config file not found: {}", path.display()))
                } else {
                    AppError::Io(err)
                }
            })?;
            parse_config_content(&content)?
        }
        None => DeployConfig::default(),
    };

    config.apply(overrides);
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content. Validation happens in `load_config`
/// once overrides are applied.
fn parse_config_content(content: &str) -> Result<DeployConfig, AppError> {
    Ok(toml::from_str(content)?)
}
