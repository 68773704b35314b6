//! Deploy command: create one remote workflow per definition file and persist the ids.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::{
    DeployOutcome, DeploySummary, FailureKind, WorkflowDefinition, WorkflowRecord,
};
use crate::ports::{WorkflowClient, WorkflowIdStore};

/// Load a definition file. Fails without touching the network.
pub fn load_definition(path: &Path) -> Result<WorkflowDefinition, FailureKind> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound | ErrorKind::NotADirectory => {
            FailureKind::FileNotFound { path: path.to_path_buf() }
        }
        _ => FailureKind::ReadError { path: path.to_path_buf(), details: err.to_string() },
    })?;

    WorkflowDefinition::parse(&content)
        .map_err(|details| FailureKind::MalformedDefinition { path: path.to_path_buf(), details })
}

/// Create a single remote workflow from a definition file.
///
/// Each successful call creates a new remote workflow, even for a file that
/// was deployed before.
pub fn create_from_file<C: WorkflowClient + ?Sized>(
    client: &C,
    path: &Path,
) -> Result<DeployOutcome, FailureKind> {
    let definition = load_definition(path)?;
    println!("Loading workflow from: '{}'...", path.display());
    println!("Attempting to create workflow '{}'...", definition.display_name());

    let created = client.create_workflow(&definition)?;
    Ok(DeployOutcome::from(created))
}

/// Deploy every file in order, then overwrite the persisted identifier list.
///
/// Individual failures are reported and skipped. The list is written even when
/// nothing succeeded.
pub fn execute<C, S>(ctx: &AppContext<C, S>, paths: &[PathBuf]) -> DeploySummary
where
    C: WorkflowClient,
    S: WorkflowIdStore,
{
    let total = paths.len();
    let mut summary = DeploySummary { attempted: total, ..Default::default() };

    if total == 0 {
        println!("No workflow files provided for deployment.");
    } else {
        println!("Starting deployment of {} workflow(s) to n8n...", total);
    }

    for (index, path) in paths.iter().enumerate() {
        println!("\n--- Processing file {}/{}: {} ---", index + 1, total, path.display());

        let remote_id = match create_from_file(ctx.client(), path) {
            Ok(DeployOutcome::Created { id, name }) => {
                println!(
                    "✅ Workflow '{}' (ID: {}) created successfully.",
                    name.as_deref().unwrap_or("N/A"),
                    id
                );
                summary.succeeded += 1;
                summary.ids.push(id.clone());
                Some(id)
            }
            Ok(DeployOutcome::CreatedWithoutId { name }) => {
                eprintln!(
                    "⚠️  Workflow '{}' from '{}' was created but the server returned no ID. It will not be activated.",
                    name.as_deref().unwrap_or("N/A"),
                    path.display()
                );
                summary.created_without_id += 1;
                None
            }
            Err(failure) => {
                report_failure(path, &failure);
                None
            }
        };

        summary.records.push(WorkflowRecord { source_path: path.clone(), remote_id });
        println!("--- Finished processing {} ---", path.display());
    }

    print_summary(&summary);

    match ctx.store().save(&summary.ids) {
        Ok(()) => {
            println!("Successfully saved deployed workflow IDs to: {}", ctx.store().location());
        }
        Err(err) => {
            eprintln!("❌ ERROR: {}", err);
            summary.persistence_failure = Some(err.to_string());
        }
    }

    summary
}

fn report_failure(path: &Path, failure: &FailureKind) {
    tracing::debug!(kind = failure.label(), path = %path.display(), "deploy attempt failed");
    match failure {
        FailureKind::FileNotFound { .. }
        | FailureKind::ReadError { .. }
        | FailureKind::MalformedDefinition { .. } => {
            eprintln!("❌ ERROR: {}. Skipping.", failure);
        }
        FailureKind::HttpError { status, body } => {
            eprintln!("❌ ERROR: Request failed for '{}': HTTP {}", path.display(), status);
            eprintln!("Response body: {}", body);
        }
        other => {
            eprintln!("❌ ERROR: Request failed for '{}': {}", path.display(), other);
        }
    }
}

fn print_summary(summary: &DeploySummary) {
    println!("\n--- Deployment Summary ---");
    println!("Total files attempted: {}", summary.attempted);
    println!("Workflows created successfully: {}", summary.succeeded);
    if summary.created_without_id > 0 {
        println!("Workflows created without an ID (untracked): {}", summary.created_without_id);
    }
    println!("Workflows failed: {}", summary.failed());
}
