//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::fs;
use std::path::PathBuf;

use crate::adapters::{
    FilesystemWorkflowIdStore, HttpWorkflowClient, RetryPolicy, RetryingWorkflowClient,
};
use crate::app::AppContext;
use crate::app::commands::{activate, deploy};
use crate::domain::{ApiKey, DeployConfig};

pub use crate::domain::{ActivationSummary, AppError, DeploySummary};

type HttpContext = AppContext<RetryingWorkflowClient<HttpWorkflowClient>, FilesystemWorkflowIdStore>;

/// Create an `AppContext` talking to the configured n8n instance.
fn create_context(config: &DeployConfig, api_key: ApiKey) -> Result<HttpContext, AppError> {
    let transport = HttpWorkflowClient::new(api_key, &config.api)?;
    let policy = RetryPolicy::from_config(&config.api);
    let client = RetryingWorkflowClient::new(transport, policy);
    let store = FilesystemWorkflowIdStore::new(config.workflow_ids_path());
    Ok(AppContext::new(client, store))
}

/// Deploy workflow definition files and overwrite the persisted identifier list.
pub fn deploy(
    config: &DeployConfig,
    api_key: ApiKey,
    paths: &[PathBuf],
) -> Result<DeploySummary, AppError> {
    config.validate()?;
    if !config.data_dir.exists() {
        fs::create_dir_all(&config.data_dir)?;
        println!("Created directory: {}", config.data_dir.display());
    }

    let ctx = create_context(config, api_key)?;
    Ok(deploy::execute(&ctx, paths))
}

/// Activate every workflow recorded by the last deploy.
pub fn activate(config: &DeployConfig, api_key: ApiKey) -> Result<ActivationSummary, AppError> {
    config.validate()?;
    let ctx = create_context(config, api_key)?;
    activate::execute(&ctx)
}
