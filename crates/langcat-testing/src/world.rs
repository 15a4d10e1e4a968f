//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::{SAMPLE_CATALOG_JSON, write_catalog};

/// Isolated scratch directory holding a catalog file.
///
/// Commands built from a world point `--data` at its catalog and `--config`
/// at a file that does not exist, so the user's own settings never leak in.
///
/// # Example
/// ```no_run
/// use langcat_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["list", "java"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_file: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// World with the sample catalog at `<tmp>/data.json`
    pub fn new() -> Self {
        Self::with_catalog_json(SAMPLE_CATALOG_JSON)
    }

    pub fn with_catalog_json(json: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_file = temp_dir.path().join("data.json");
        write_catalog(&data_file, json).expect("Failed to write catalog");

        Self {
            temp_dir,
            data_file,
            env_vars: HashMap::new(),
        }
    }

    /// World whose `--data` points at a file that was never written
    pub fn without_catalog() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_file = temp_dir.path().join("missing.json");

        Self {
            temp_dir,
            data_file,
            env_vars: HashMap::new(),
        }
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn config_file(&self) -> PathBuf {
        self.temp_dir.path().join("config.toml")
    }

    /// Write `config.toml` into the world; commands already point at it
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.config_file(), toml).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this world's data, config and env vars.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data")
            .arg(&self.data_file)
            .arg("--config")
            .arg(self.config_file());

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("LANGCAT_DATA")
            .env_remove("LANGCAT_CONFIG")
            .env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// A `langcat` command configured for this world, ready for more args
    #[allow(deprecated)]
    pub fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("langcat")
            .map_err(|e| anyhow::anyhow!("Failed to find langcat binary: {}", e))?;
        self.configure_command(&mut cmd);
        Ok(cmd)
    }

    /// Execute `langcat` with `args` and capture its output.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let output = self.command()?.args(args).output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Captured output of one CLI run
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }
}
