//! Common test helpers for integration tests.
//!
//! Provides an isolated temporary workspace for file scanning tests. Each
//! workspace lives in its own temp directory and is cleaned up on drop.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

/// Isolated workspace directory for scan tests.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestWorkspace {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file under the workspace root, creating parent directories
    /// as needed. Returns the absolute path.
    pub fn write_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn remove_file(&self, relative: &str) -> Result<()> {
        fs::remove_file(self.temp_dir.path().join(relative))?;
        Ok(())
    }
}
