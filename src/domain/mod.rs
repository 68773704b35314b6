pub mod api_error;
pub mod configuration;
pub mod credentials;
pub mod error;
pub mod failure;
pub mod summary;
pub mod workflow;

pub use api_error::ApiError;
pub use configuration::{
    ApiConfig, ConfigOverrides, DeployConfig, WORKFLOW_IDS_FILE, load_config,
};
pub use credentials::ApiKey;
pub use error::AppError;
pub use failure::FailureKind;
pub use summary::{ActivationSummary, DeploySummary};
pub use workflow::{CreatedWorkflow, DeployOutcome, WorkflowDefinition, WorkflowRecord};
