//! TestWorld pattern for declarative integration test setup.
//!
//! Every world owns a temp directory holding the item sources and the config
//! file the CLI is pointed at, so a developer's own config never leaks into a
//! test run.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::{SampleFiles, RESERVATIONS, ROOMS};

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use roomsift_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample_rooms();
/// let result = world.run(&["rooms", "rooms.json", "--tipo", "suite"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
    samples: SampleFiles,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config").join("config.toml");

        Self {
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
            samples: SampleFiles::new(),
        }
    }

    /// Get the temp directory root. Commands run from here.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Copy the sample room catalogue to `rooms.json`.
    pub fn with_sample_rooms(self) -> Self {
        self.samples
            .copy_to(ROOMS, &self.root().join(ROOMS))
            .expect("Failed to copy rooms sample");
        self
    }

    /// Copy the sample reservations to `reservations.json`.
    pub fn with_sample_reservations(self) -> Self {
        self.samples
            .copy_to(RESERVATIONS, &self.root().join(RESERVATIONS))
            .expect("Failed to copy reservations sample");
        self
    }

    /// Write an arbitrary file relative to the root.
    pub fn with_file(self, name: &str, content: &str) -> Self {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directory");
        }
        std::fs::write(path, content).expect("Failed to write file");
        self
    }

    /// Write the config file the CLI will load.
    pub fn with_config(self, toml: &str) -> Self {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(&self.config_path);
        cmd.current_dir(self.root());
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("ROOMSIFT_CONFIG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the `roomsift` binary with `args` and capture its output.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("roomsift")
            .map_err(|e| anyhow::anyhow!("Failed to find roomsift binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Like [`run`](Self::run) with `--format json`, parsing stdout.
    pub fn run_json(&self, args: &[&str]) -> Result<serde_json::Value> {
        let mut full_args = args.to_vec();
        full_args.extend(["--format", "json"]);
        let result = self.run(&full_args)?;
        if !result.success() {
            anyhow::bail!("roomsift {:?} failed: {}", args, result.stderr());
        }
        result.json()
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
