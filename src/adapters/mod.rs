pub mod credentials;
pub mod workflow_client;
pub mod workflow_id_store_filesystem;

pub use credentials::{EnvCredentialProvider, PromptCredentialProvider, StaticCredentialProvider};
pub use workflow_client::{HttpWorkflowClient, RetryPolicy, RetryingWorkflowClient};
pub use workflow_id_store_filesystem::FilesystemWorkflowIdStore;
