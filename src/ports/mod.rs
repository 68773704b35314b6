mod credential_provider;
mod workflow_client;
mod workflow_id_store;

pub use credential_provider::{CredentialProvider, resolve_api_key};
pub use workflow_client::WorkflowClient;
pub use workflow_id_store::WorkflowIdStore;
