//! n8n workflow API client port definition.

use crate::domain::{ApiError, CreatedWorkflow, WorkflowDefinition};

/// Port for the n8n workflow endpoints used by deploy and activate.
///
/// Each call is one logical request. Implementations must not invent
/// identifiers: `CreatedWorkflow::id` is whatever the server returned.
pub trait WorkflowClient {
    /// Create a workflow from a definition (`POST /api/v1/workflows`).
    fn create_workflow(&self, definition: &WorkflowDefinition)
    -> Result<CreatedWorkflow, ApiError>;

    /// Activate an existing workflow (`POST /api/v1/workflows/{id}/activate`).
    fn activate_workflow(&self, id: &str) -> Result<(), ApiError>;
}
