//! Global context for dissolve-build operations.
//!
//! Provides centralized access to the working directory and the
//! configuration file locations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::util::config::{self, Config};

/// Global context shared by all commands.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Global config file, if a home directory is known
    global_config: Option<PathBuf>,
}

impl GlobalContext {
    /// Create a context for the current working directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Self::with_cwd(cwd)
    }

    /// Create a context with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Result<Self> {
        Ok(GlobalContext {
            cwd,
            global_config: config::global_config_path(),
        })
    }

    /// Use a different global config file (or none).
    pub fn with_global_config(mut self, path: Option<PathBuf>) -> Self {
        self.global_config = path;
        self
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the global config path.
    pub fn global_config_path(&self) -> Option<&Path> {
        self.global_config.as_deref()
    }

    /// Get the project config path.
    pub fn project_config_path(&self) -> PathBuf {
        config::project_config_path(&self.cwd)
    }

    /// Load the merged global and project configuration.
    pub fn load_config(&self) -> Result<Config> {
        config::load_config(self.global_config_path(), &self.project_config_path())
    }

    /// Resolve a possibly relative path against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}
