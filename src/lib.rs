//! n8n-deploy: create n8n workflows from JSON definitions and activate them.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{activate, deploy};
pub use domain::{ActivationSummary, AppError, DeploySummary, FailureKind};
