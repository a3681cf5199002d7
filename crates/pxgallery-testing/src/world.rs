//! TestWorld pattern for declarative integration test setup.
//!
//! Every world is a fresh temp directory laid out the way a user's gallery
//! folder would be:
//!
//! ```text
//! <root>/
//!   pxgallery.toml   (only after `with_config`)
//!   photos/
//! ```
//!
//! The CLI runs with `<root>` as its working directory and
//! `--config <root>/pxgallery.toml`, so relative paths in the config resolve
//! inside the world.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use pxgallery_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new().with_photos(&fixtures::morning_shoot());
///
/// let result = world.run(&["sessions"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    photos_dir: PathBuf,
    env_vars: HashMap<String, String>,
    seed: u8,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with an empty `photos/`.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let photos_dir = temp_dir.path().join("photos");
        std::fs::create_dir_all(&photos_dir).expect("Failed to create photos dir");

        Self {
            temp_dir,
            photos_dir,
            env_vars: HashMap::new(),
            seed: 0,
        }
    }

    /// Create an environment without a photos directory.
    pub fn empty() -> Self {
        let world = Self::new();
        std::fs::remove_dir(&world.photos_dir).expect("Failed to remove photos dir");
        world
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn photos_dir(&self) -> &Path {
        &self.photos_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("pxgallery.toml")
    }

    /// Resolve a path relative to the world root.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root().join(relative)
    }

    /// Add a small real JPEG to `photos/`.
    pub fn with_photo(mut self, name: &str) -> Self {
        self.seed = self.seed.wrapping_add(1);
        fixtures::write_jpeg(&self.photos_dir.join(name), 64, 48, self.seed)
            .expect("Failed to write photo");
        self
    }

    pub fn with_photos<S: AsRef<str>>(self, names: &[S]) -> Self {
        names
            .iter()
            .fold(self, |world, name| world.with_photo(name.as_ref()))
    }

    /// Add a file with arbitrary content to `photos/`.
    pub fn with_file(self, name: &str, content: &[u8]) -> Self {
        std::fs::write(self.photos_dir.join(name), content).expect("Failed to write file");
        self
    }

    /// Write `pxgallery.toml` at the world root.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.config_path(), toml).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this world's config path, cwd and env.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(self.config_path());
        cmd.current_dir(self.root());

        // The caller's RUST_LOG would otherwise leak into stderr assertions.
        cmd.env_remove("RUST_LOG");
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the CLI with the given arguments and capture its output.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("pxgallery")
            .map_err(|e| anyhow::anyhow!("Failed to find pxgallery binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
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
