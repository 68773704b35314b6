//! JSON file storage for the deployed workflow identifiers.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::WorkflowIdStore;

/// Stores identifiers as a pretty-printed JSON array of strings.
#[derive(Debug, Clone)]
pub struct FilesystemWorkflowIdStore {
    path: PathBuf,
}

impl FilesystemWorkflowIdStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WorkflowIdStore for FilesystemWorkflowIdStore {
    fn load(&self) -> Result<Vec<String>, AppError> {
        let content = fs::read_to_string(&self.path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => AppError::WorkflowIdsNotFound { path: self.path.clone() },
            _ => AppError::Io(err),
        })?;

        serde_json::from_str::<Vec<String>>(&content).map_err(|e| {
            AppError::MalformedPersistedList { path: self.path.clone(), details: e.to_string() }
        })
    }

    fn save(&self, ids: &[String]) -> Result<(), AppError> {
        let write_failure = |details: String| AppError::PersistenceWriteFailure {
            path: self.path.clone(),
            details,
        };

        // serde_json's pretty printer indents with two spaces.
        let content = serde_json::to_string_pretty(ids).map_err(|e| write_failure(e.to_string()))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| write_failure(e.to_string()))?;
        }
        fs::write(&self.path, content).map_err(|e| write_failure(e.to_string()))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
