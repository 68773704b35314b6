use crate::domain::WorkflowRecord;

/// Result of a deploy batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploySummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub created_without_id: usize,
    /// Identifiers written to the persisted list, in submission order.
    pub ids: Vec<String>,
    pub records: Vec<WorkflowRecord>,
    /// Set when the identifier list could not be written.
    pub persistence_failure: Option<String>,
}

impl DeploySummary {
    pub fn failed(&self) -> usize {
        self.attempted - self.succeeded - self.created_without_id
    }

    /// True when every attempt produced a tracked workflow and the list was saved.
    pub fn is_clean(&self) -> bool {
        self.failed() == 0 && self.created_without_id == 0 && self.persistence_failure.is_none()
    }
}

/// Result of an activation batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivationSummary {
    pub attempted: usize,
    pub succeeded: usize,
}

impl ActivationSummary {
    pub fn failed(&self) -> usize {
        self.attempted - self.succeeded
    }

    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }
}
