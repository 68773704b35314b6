//! Workflow documents and the records produced by deploy attempts.

use std::path::PathBuf;

use serde_json::{Map, Value};

/// A workflow definition as loaded from disk.
///
/// The document is opaque: it is sent to the server verbatim. Only the optional
/// `name` field is read, for progress output.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowDefinition {
    document: Map<String, Value>,
}

impl WorkflowDefinition {
    /// Parse a definition from JSON text. The top level must be an object.
    pub fn parse(content: &str) -> Result<Self, String> {
        let value: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
        match value {
            Value::Object(document) => Ok(Self { document }),
            other => Err(format!("expected a JSON object, found {}", json_type_name(&other))),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.document.get("name").and_then(Value::as_str)
    }

    /// Name for progress lines, falling back to a placeholder.
    pub fn display_name(&self) -> &str {
        self.name().unwrap_or("Unknown Name")
    }

    pub fn as_json(&self) -> &Map<String, Value> {
        &self.document
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// What the server reported for a successful creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedWorkflow {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Successful outcome of one deploy attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    Created { id: String, name: Option<String> },
    /// The server accepted the definition but returned no identifier, so the
    /// remote workflow is untracked.
    CreatedWithoutId { name: Option<String> },
}

impl DeployOutcome {
    pub fn remote_id(&self) -> Option<&str> {
        match self {
            DeployOutcome::Created { id, .. } => Some(id),
            DeployOutcome::CreatedWithoutId { .. } => None,
        }
    }
}

impl From<CreatedWorkflow> for DeployOutcome {
    fn from(created: CreatedWorkflow) -> Self {
        match created.id {
            Some(id) => DeployOutcome::Created { id, name: created.name },
            None => DeployOutcome::CreatedWithoutId { name: created.name },
        }
    }
}

/// One source file and the identifier its deploy attempt produced, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowRecord {
    pub source_path: PathBuf,
    pub remote_id: Option<String>,
}
