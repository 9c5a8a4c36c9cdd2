//! Shared testing utilities for isoprompt CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Path to the isolated working directory.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `isoprompt` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("isoprompt").expect("Failed to locate isoprompt binary");
        cmd.current_dir(self.work_dir());
        // Keep the environment key out of the picture for deterministic runs.
        cmd.env_remove("OPENROUTER_API_KEY");
        cmd
    }

    /// Write a file into the working directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }
}
