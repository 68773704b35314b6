pub mod deploy_config;
pub mod loader;

pub use deploy_config::{ApiConfig, ConfigOverrides, DeployConfig, WORKFLOW_IDS_FILE};
pub use loader::load_config;
