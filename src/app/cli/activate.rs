use crate::app::api;
use crate::domain::{ApiKey, AppError, DeployConfig};

pub(super) fn run_activate(
    config: &DeployConfig,
    api_key: ApiKey,
    strict: bool,
) -> Result<i32, AppError> {
    let summary = api::activate(config, api_key)?;
    Ok(super::exit_code_for(summary.is_clean(), strict))
}
