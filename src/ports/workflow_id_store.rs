use crate::domain::AppError;

/// Port for the persisted identifier list shared by deploy and activate.
pub trait WorkflowIdStore {
    /// Read the identifier list.
    ///
    /// Fails with `WorkflowIdsNotFound` when nothing was saved yet and with
    /// `MalformedPersistedList` when the content is not a list of strings.
    fn load(&self) -> Result<Vec<String>, AppError>;

    /// Replace the identifier list. Previous content is discarded.
    fn save(&self, ids: &[String]) -> Result<(), AppError>;

    /// Human-readable location for messages.
    fn location(&self) -> String;
}
