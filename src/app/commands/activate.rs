//! Activate command: enable every workflow recorded by the last deploy.

use crate::app::AppContext;
use crate::domain::{ActivationSummary, AppError, FailureKind};
use crate::ports::{WorkflowClient, WorkflowIdStore};

/// Activate a single workflow. No prior-state check is made.
pub fn activate_one<C: WorkflowClient + ?Sized>(client: &C, id: &str) -> Result<(), FailureKind> {
    println!("Attempting to activate workflow with ID: '{}'...", id);
    client.activate_workflow(id).map_err(|error| FailureKind::from_activation_error(id, error))
}

/// Activate every identifier in the persisted list, continuing past failures.
///
/// A missing or unparseable list is fatal and no request is sent.
pub fn execute<C, S>(ctx: &AppContext<C, S>) -> Result<ActivationSummary, AppError>
where
    C: WorkflowClient,
    S: WorkflowIdStore,
{
    let ids = ctx.store().load()?;
    println!("Successfully loaded workflow IDs from: '{}'.", ctx.store().location());

    if ids.is_empty() {
        println!("No workflow IDs found in the file to activate.");
        return Ok(ActivationSummary::default());
    }

    let total = ids.len();
    let mut summary = ActivationSummary { attempted: total, succeeded: 0 };
    println!("\nStarting activation of {} workflow(s) in n8n...", total);

    for (index, id) in ids.iter().enumerate() {
        println!("\n--- Processing workflow {}/{} (ID: {}) ---", index + 1, total, id);
        match activate_one(ctx.client(), id) {
            Ok(()) => {
                println!("✅ Workflow ID '{}' activated successfully.", id);
                summary.succeeded += 1;
            }
            Err(failure) => {
                tracing::debug!(kind = failure.label(), id = %id, "activation failed");
                eprintln!("❌ ERROR activating workflow ID '{}': {}", id, failure);
            }
        }
        println!("--- Finished processing workflow {} ---", id);
    }

    println!("\n--- Activation Summary ---");
    println!("Total workflows attempted: {}", summary.attempted);
    println!("Workflows activated successfully: {}", summary.succeeded);
    println!("Workflows failed to activate: {}", summary.failed());

    Ok(summary)
}
