//! n8n workflow API client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::domain::{ApiConfig, ApiError, ApiKey, AppError, CreatedWorkflow, WorkflowDefinition};
use crate::ports::WorkflowClient;

const X_N8N_API_KEY: &str = "X-N8N-API-KEY";
const APPLICATION_JSON: &str = "application/json";
const WORKFLOWS_PATH: [&str; 3] = ["api", "v1", "workflows"];

/// HTTP transport for the n8n public API.
///
/// This client performs a single request per call. Retry behavior is implemented
/// by a dedicated retry wrapper adapter.
#[derive(Clone)]
pub struct HttpWorkflowClient {
    api_key: ApiKey,
    host: Url,
    client: Client,
}

impl std::fmt::Debug for HttpWorkflowClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpWorkflowClient")
            .field("host", &self.host)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpWorkflowClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: ApiKey, config: &ApiConfig) -> Result<Self, AppError> {
        if config.host.cannot_be_a_base() {
            return Err(AppError::config_error(format!("Invalid host URL: {}", config.host)));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self { api_key, host: config.host.clone(), client })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.host.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| ApiError::Transport {
                message: format!("Host URL cannot be used as a base: {}", self.host),
            })?;
            path.pop_if_empty().extend(WORKFLOWS_PATH).extend(segments);
        }
        Ok(url)
    }

    fn post(&self, url: Url, body: Option<&WorkflowDefinition>) -> Result<Response, ApiError> {
        tracing::debug!(url = %url, "POST");
        let request = self
            .client
            .post(url)
            .header(X_N8N_API_KEY, self.api_key.expose())
            .header(ACCEPT, APPLICATION_JSON)
            .header(CONTENT_TYPE, APPLICATION_JSON);
        let request = match body {
            Some(definition) => request.json(definition.as_json()),
            None => request,
        };
        request.send().map_err(transport_error)
    }
}

impl WorkflowClient for HttpWorkflowClient {
    fn create_workflow(
        &self,
        definition: &WorkflowDefinition,
    ) -> Result<CreatedWorkflow, ApiError> {
        let url = self.endpoint(&[])?;
        let response = self.post(url, Some(definition))?;
        let status = response.status();
        let body_text = read_body(response, status)?;
        tracing::debug!(status = status.as_u16(), "create workflow response");

        if !status.is_success() {
            return Err(ApiError::Http { status: status.as_u16(), body: body_text });
        }

        let api_response: CreateResponse =
            serde_json::from_str(&body_text).map_err(|e| ApiError::UnexpectedResponse {
                status: status.as_u16(),
                details: format!("Failed to parse response: {}", e),
            })?;

        Ok(CreatedWorkflow {
            id: api_response.id.and_then(identifier_from_json),
            name: api_response.name.and_then(|name| match name {
                Value::String(name) => Some(name),
                _ => None,
            }),
        })
    }

    fn activate_workflow(&self, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&[id, "activate"])?;
        let response = self.post(url, None)?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), id, "activate workflow response");

        if status.is_success() {
            return Ok(());
        }

        let body_text = response.text().unwrap_or_default();
        Err(ApiError::Http { status: status.as_u16(), body: body_text })
    }
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    name: Option<Value>,
}

/// Accept string identifiers as-is and numeric ones in their decimal form.
fn identifier_from_json(value: Value) -> Option<String> {
    match value {
        Value::String(id) if !id.trim().is_empty() => Some(id),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

fn read_body(response: Response, status: StatusCode) -> Result<String, ApiError> {
    if !status.is_success() {
        return Ok(response.text().unwrap_or_default());
    }
    response.text().map_err(|e| ApiError::UnexpectedResponse {
        status: status.as_u16(),
        details: format!("Failed to read response body: {}", e),
    })
}

fn transport_error(error: reqwest::Error) -> ApiError {
    let message = if error.is_timeout() {
        format!("Request timed out: {}", error)
    } else if error.is_connect() {
        format!("Connection error. Ensure n8n is running and accessible: {}", error)
    } else {
        format!("HTTP request failed: {}", error)
    };
    ApiError::Transport { message }
}
