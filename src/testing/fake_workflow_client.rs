use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::domain::{ApiError, CreatedWorkflow, WorkflowDefinition};
use crate::ports::WorkflowClient;

/// In-memory stand-in for the n8n API.
///
/// Creations return queued responses first, then sequential ids `wf-1`, `wf-2`, ...
/// Activations succeed unless a failure was registered for the id.
#[derive(Clone, Default)]
pub struct FakeWorkflowClient {
    create_responses: Arc<Mutex<VecDeque<Result<CreatedWorkflow, ApiError>>>>,
    activate_failures: Arc<Mutex<HashMap<String, ApiError>>>,
    created: Arc<Mutex<Vec<WorkflowDefinition>>>,
    activated: Arc<Mutex<Vec<String>>>,
    next_id: Arc<Mutex<usize>>,
}

impl FakeWorkflowClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_create(&self, response: Result<CreatedWorkflow, ApiError>) {
        self.create_responses.lock().unwrap().push_back(response);
    }

    pub fn fail_activation(&self, id: &str, error: ApiError) {
        self.activate_failures.lock().unwrap().insert(id.to_string(), error);
    }

    pub fn created_definitions(&self) -> Vec<WorkflowDefinition> {
        self.created.lock().unwrap().clone()
    }

    pub fn activation_calls(&self) -> Vec<String> {
        self.activated.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.created.lock().unwrap().len() + self.activated.lock().unwrap().len()
    }
}

impl WorkflowClient for FakeWorkflowClient {
    fn create_workflow(
        &self,
        definition: &WorkflowDefinition,
    ) -> Result<CreatedWorkflow, ApiError> {
        self.created.lock().unwrap().push(definition.clone());
        if let Some(response) = self.create_responses.lock().unwrap().pop_front() {
            return response;
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        Ok(CreatedWorkflow {
            id: Some(format!("wf-{}", *next_id)),
            name: definition.name().map(str::to_string),
        })
    }

    fn activate_workflow(&self, id: &str) -> Result<(), ApiError> {
        self.activated.lock().unwrap().push(id.to_string());
        match self.activate_failures.lock().unwrap().get(id) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
