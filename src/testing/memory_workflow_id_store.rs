use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::WorkflowIdStore;

/// In-memory identifier list. `None` means nothing was saved yet.
#[derive(Clone, Default)]
pub struct MemoryWorkflowIdStore {
    ids: Arc<Mutex<Option<Vec<String>>>>,
    saves: Arc<Mutex<usize>>,
    fail_writes: bool,
}

impl MemoryWorkflowIdStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids(ids: &[&str]) -> Self {
        let store = Self::new();
        *store.ids.lock().unwrap() = Some(ids.iter().map(|id| id.to_string()).collect());
        store
    }

    pub fn failing_writes() -> Self {
        Self { fail_writes: true, ..Self::default() }
    }

    pub fn saved(&self) -> Option<Vec<String>> {
        self.ids.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

impl WorkflowIdStore for MemoryWorkflowIdStore {
    fn load(&self) -> Result<Vec<String>, AppError> {
        self.ids
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| AppError::WorkflowIdsNotFound { path: PathBuf::from(self.location()) })
    }

    fn save(&self, ids: &[String]) -> Result<(), AppError> {
        if self.fail_writes {
            return Err(AppError::PersistenceWriteFailure {
                path: PathBuf::from(self.location()),
                details: "read-only store".to_string(),
            });
        }
        *self.saves.lock().unwrap() += 1;
        *self.ids.lock().unwrap() = Some(ids.to_vec());
        Ok(())
    }

    fn location(&self) -> String {
        "memory://workflows_ids.json".to_string()
    }
}
