//! CLI Adapter.

mod activate;
mod deploy;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use url::Url;

use crate::adapters::{EnvCredentialProvider, PromptCredentialProvider};
use crate::app::logging;
use crate::domain::{ApiKey, AppError, ConfigOverrides, DeployConfig, load_config};
use crate::ports::{CredentialProvider, resolve_api_key};

/// Exit code for a run that finished with failed items under `--strict`.
const PARTIAL_FAILURE_EXIT_CODE: i32 = 2;

#[derive(Parser)]
#[command(name = "n8n-deploy")]
#[command(version)]
#[command(about = "Deploy n8n workflows from JSON files and activate them", long_about = None)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ConnectionArgs {
    /// URL of the n8n instance (e.g. http://my-n8n.com:1234)
    #[arg(long, global = true, env = "N8N_HOST")]
    host: Option<Url>,
    /// Directory holding workflows_ids.json
    #[arg(long, global = true, env = "N8N_DATA_DIR")]
    data_dir: Option<PathBuf>,
    /// TOML configuration file
    #[arg(long, global = true, env = "N8N_DEPLOY_CONFIG")]
    config: Option<PathBuf>,
    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,
    /// Maximum attempts per request for transient failures
    #[arg(long, global = true)]
    retries: Option<u32>,
    /// Never prompt for the API key; fail when N8N_API_KEY is unset
    #[arg(long, global = true)]
    no_prompt: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create workflows from JSON definition files and save their IDs
    #[clap(visible_alias = "d")]
    Deploy {
        /// Workflow definition files, deployed in the given order
        files: Vec<PathBuf>,
        /// Exit with status 2 when any file fails
        #[arg(long)]
        strict: bool,
    },
    /// Activate every workflow saved by the last deploy
    #[clap(visible_alias = "a")]
    Activate {
        /// Exit with status 2 when any activation fails
        #[arg(long)]
        strict: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    logging::init();
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Deploy { files, strict } => prepare(&cli.connection)
            .and_then(|(config, key)| deploy::run_deploy(&config, key, &files, strict)),
        Commands::Activate { strict } => prepare(&cli.connection)
            .and_then(|(config, key)| activate::run_activate(&config, key, strict)),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(AppError::Cancelled) => {
            println!("\n🚫 Operation cancelled by user.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Resolve configuration and credentials before any remote call.
fn prepare(args: &ConnectionArgs) -> Result<(DeployConfig, ApiKey), AppError> {
    let overrides = ConfigOverrides {
        host: args.host.clone(),
        data_dir: args.data_dir.clone(),
        timeout_secs: args.timeout,
        max_retries: args.retries,
    };
    let config = load_config(args.config.as_deref(), overrides)?;
    println!("✅ Connecting to n8n instance at: {}", config.api.host);

    let env = EnvCredentialProvider::default();
    let prompt = PromptCredentialProvider;
    let mut providers: Vec<&dyn CredentialProvider> = vec![&env];
    if !args.no_prompt {
        providers.push(&prompt);
    }
    let api_key = resolve_api_key(&providers)?;

    Ok((config, api_key))
}

fn exit_code_for(clean: bool, strict: bool) -> i32 {
    if strict && !clean { PARTIAL_FAILURE_EXIT_CODE } else { 0 }
}
