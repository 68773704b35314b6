mod fake_workflow_client;
mod memory_workflow_id_store;

pub use fake_workflow_client::FakeWorkflowClient;
pub use memory_workflow_id_store::MemoryWorkflowIdStore;
