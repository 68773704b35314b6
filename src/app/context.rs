use crate::ports::{WorkflowClient, WorkflowIdStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: WorkflowClient, S: WorkflowIdStore> {
    client: C,
    store: S,
}

impl<C: WorkflowClient, S: WorkflowIdStore> AppContext<C, S> {
    /// Create a new application context.
    pub fn new(client: C, store: S) -> Self {
        Self { client, store }
    }

    /// Get a reference to the n8n API client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Get a reference to the persisted identifier store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
