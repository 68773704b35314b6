use std::path::PathBuf;

use crate::app::api;
use crate::domain::{ApiKey, AppError, DeployConfig};

pub(super) fn run_deploy(
    config: &DeployConfig,
    api_key: ApiKey,
    files: &[PathBuf],
    strict: bool,
) -> Result<i32, AppError> {
    let summary = api::deploy(config, api_key, files)?;
    Ok(super::exit_code_for(summary.is_clean(), strict))
}
