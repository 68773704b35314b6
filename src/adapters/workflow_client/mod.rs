mod http;
mod retrying;

pub use http::HttpWorkflowClient;
pub use retrying::{RetryPolicy, RetryingWorkflowClient};
