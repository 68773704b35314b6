//! Shared testing utilities for n8n-deploy CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEST_API_KEY: &str = "test-api-key";

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Data directory passed to every invocation.
    pub fn data_dir(&self) -> PathBuf {
        self.work_dir.join("data")
    }

    /// Path of the persisted identifier list.
    pub fn ids_path(&self) -> PathBuf {
        self.data_dir().join("workflows_ids.json")
    }

    /// Build a command pointed at `host` with an API key in the environment.
    pub fn cli(&self, host: &str) -> Command {
        let mut cmd = self.bare_cli(host);
        cmd.env("N8N_API_KEY", TEST_API_KEY);
        cmd
    }

    /// Build a command without any API key.
    pub fn bare_cli(&self, host: &str) -> Command {
        let mut cmd = Command::cargo_bin("n8n-deploy").expect("Failed to locate n8n-deploy binary");
        cmd.current_dir(&self.work_dir)
            .env_remove("N8N_API_KEY")
            .env_remove("N8N_DATA_DIR")
            .env_remove("N8N_DEPLOY_CONFIG")
            .env_remove("RUST_LOG")
            .env("N8N_HOST", host)
            .arg("--data-dir")
            .arg(self.data_dir())
            .arg("--no-prompt");
        cmd
    }

    /// Write a workflow definition file into the work directory.
    pub fn write_workflow(&self, file: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(file);
        fs::write(&path, content).expect("Failed to write workflow file");
        path
    }

    /// Write the persisted identifier list directly.
    pub fn write_ids(&self, content: &str) {
        fs::create_dir_all(self.data_dir()).expect("Failed to create data dir");
        fs::write(self.ids_path(), content).expect("Failed to write ids file");
    }

    /// Read the persisted identifier list.
    pub fn read_ids(&self) -> Vec<String> {
        let content = fs::read_to_string(self.ids_path()).expect("Failed to read ids file");
        serde_json::from_str(&content).expect("ids file is not a JSON string array")
    }

    /// Root of the temporary tree.
    pub fn root(&self) -> &Path {
        self.root.path()
    }
}
