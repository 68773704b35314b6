use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "n8n_deploy=warn";

/// Install the stderr diagnostics subscriber, filtered by `RUST_LOG`.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
