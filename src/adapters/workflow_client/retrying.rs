//! Retry wrapper for n8n workflow API client operations.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::domain::{ApiConfig, ApiError, CreatedWorkflow, WorkflowDefinition};
use crate::ports::WorkflowClient;

const DEFAULT_MAX_DELAY_MS: u64 = 30_000;
const MAX_LOG_ERROR_CHARS: usize = 512;

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay_ms: u64,
    max_delay_ms: u64,
}

impl RetryPolicy {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            max_attempts: config.max_retries.max(1),
            base_delay_ms: config.retry_delay_ms.max(1),
            max_delay_ms: DEFAULT_MAX_DELAY_MS.max(config.retry_delay_ms),
        }
    }

    fn delay_for_retry(&self, failed_attempt: u32) -> Duration {
        // attempt=1 -> base, attempt=2 -> base*2, attempt=3 -> base*4, capped.
        let exponent = failed_attempt.saturating_sub(1).min(6);
        let multiplier = 1_u64 << exponent;
        let backoff_ms = self.base_delay_ms.saturating_mul(multiplier).min(self.max_delay_ms);
        let jitter_ms = compute_jitter_ms(backoff_ms);
        Duration::from_millis(backoff_ms.saturating_add(jitter_ms).min(self.max_delay_ms))
    }
}

/// Decorator that repeats transient failures of the wrapped client.
///
/// A creation retried after the server already processed it creates a
/// duplicate workflow; policies above one attempt are opt-in.
pub struct RetryingWorkflowClient<C> {
    inner: C,
    policy: RetryPolicy,
}

impl<C: WorkflowClient> RetryingWorkflowClient<C> {
    pub fn new(inner: C, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    fn with_retries<T>(
        &self,
        operation: &str,
        mut call: impl FnMut(&C) -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        let mut attempt = 1;
        loop {
            match call(&self.inner) {
                Ok(value) => return Ok(value),
                Err(error) => {
                    if !is_retryable_error(&error) || attempt >= self.policy.max_attempts {
                        return Err(error);
                    }

                    let delay = self.policy.delay_for_retry(attempt);
                    tracing::warn!(
                        "{} failed (attempt {}/{}): {}. Retrying in {} ms.",
                        operation,
                        attempt,
                        self.policy.max_attempts,
                        format_error_for_log(&error),
                        delay.as_millis()
                    );
                    thread::sleep(delay);
                    attempt += 1;
                }
            }
        }
    }
}

impl<C: WorkflowClient> WorkflowClient for RetryingWorkflowClient<C> {
    fn create_workflow(
        &self,
        definition: &WorkflowDefinition,
    ) -> Result<CreatedWorkflow, ApiError> {
        self.with_retries("create_workflow", |client| client.create_workflow(definition))
    }

    fn activate_workflow(&self, id: &str) -> Result<(), ApiError> {
        self.with_retries("activate_workflow", |client| client.activate_workflow(id))
    }
}

fn is_retryable_error(error: &ApiError) -> bool {
    match error {
        ApiError::Transport { .. } => true,
        ApiError::Http { status, .. } => *status == 429 || *status == 408 || *status >= 500,
        ApiError::UnexpectedResponse { .. } => false,
    }
}

fn compute_jitter_ms(backoff_ms: u64) -> u64 {
    if backoff_ms <= 1 {
        return 0;
    }

    let jitter_cap = backoff_ms / 4; // 25% jitter upper bound
    if jitter_cap == 0 {
        return 0;
    }

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.subsec_nanos() as u64)
        .unwrap_or(0);

    nanos % jitter_cap
}

fn format_error_for_log(error: &ApiError) -> String {
    let (label, message) = match error {
        ApiError::Transport { message } => ("Transport".to_string(), message.as_str()),
        ApiError::Http { status, body } => (format!("Http(status={})", status), body.as_str()),
        ApiError::UnexpectedResponse { status, details } => {
            (format!("UnexpectedResponse(status={})", status), details.as_str())
        }
    };
    format!("{}: {}", label, sanitize_and_truncate_for_log(message))
}

fn sanitize_and_truncate_for_log(input: &str) -> String {
    let mut output = String::new();

    for (count, ch) in input.chars().enumerate() {
        if count >= MAX_LOG_ERROR_CHARS {
            break;
        }
        output.push(if ch.is_control() { ' ' } else { ch });
    }

    let mut compact = output.split_whitespace().collect::<Vec<_>>().join(" ");
    if input.chars().count() > MAX_LOG_ERROR_CHARS {
        compact.push_str(" [truncated]");
    }
    compact.trim().to_string()
}
