//! Implementation of `dissolve-build normalize-paths`.
//!
//! Rewrites backslash path separators in a generated build-variable file
//! to forward slashes. The file for each build mode is produced by an
//! earlier build step; when that step did not run the file is absent and
//! there is nothing to do.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::{BuildMode, NormalizeError};
use crate::util::fs;

/// Default generated file for debug builds.
pub const DEFAULT_DEBUG_TARGET: &str = "build/debug/conanbuildinfo.cmake";

/// Default generated file for release builds.
pub const DEFAULT_RELEASE_TARGET: &str = "build/release/conanbuildinfo.cmake";

/// The generated file to normalize for each build mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeTargets {
    pub debug: PathBuf,
    pub release: PathBuf,
}

impl Default for NormalizeTargets {
    fn default() -> Self {
        NormalizeTargets {
            debug: PathBuf::from(DEFAULT_DEBUG_TARGET),
            release: PathBuf::from(DEFAULT_RELEASE_TARGET),
        }
    }
}

impl NormalizeTargets {
    /// Get the file for a build mode.
    pub fn path_for(&self, mode: BuildMode) -> &Path {
        match mode {
            BuildMode::Debug => &self.debug,
            BuildMode::Release => &self.release,
        }
    }

    /// Resolve relative targets against a base directory.
    pub fn relative_to(mut self, base: &Path) -> Self {
        if self.debug.is_relative() {
            self.debug = base.join(&self.debug);
        }
        if self.release.is_relative() {
            self.release = base.join(&self.release);
        }
        self
    }
}

/// Result of normalizing one build mode's file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeOutcome {
    /// The file was rewritten.
    Normalized {
        path: PathBuf,
        /// Number of separators replaced
        replaced: usize,
    },
    /// The file does not exist, so nothing was written.
    Missing { path: PathBuf },
}

/// Parse the build mode from the command's positional arguments.
///
/// Exactly one argument is accepted. This happens before any file is
/// looked at, so a bad argument never touches the filesystem.
pub fn parse_mode<S: AsRef<str>>(args: &[S]) -> Result<BuildMode, NormalizeError> {
    match args {
        [] => Err(NormalizeError::MissingBuildMode),
        [arg] => arg.as_ref().parse(),
        _ => Err(NormalizeError::ExtraArguments {
            given: args.iter().map(|a| a.as_ref().to_string()).collect(),
        }),
    }
}

/// Normalize the generated file for `mode`.
pub fn normalize_paths(mode: BuildMode, targets: &NormalizeTargets) -> Result<NormalizeOutcome> {
    let path = targets.path_for(mode);
    tracing::debug!("normalizing {} file {}", mode, path.display());
    normalize_file(path)
}

/// Replace every backslash in `path` with a forward slash, in place.
pub fn normalize_file(path: &Path) -> Result<NormalizeOutcome> {
    let Some(bytes) = fs::read_if_exists(path)? else {
        return Ok(NormalizeOutcome::Missing {
            path: path.to_path_buf(),
        });
    };

    let text = String::from_utf8(bytes).map_err(|_| NormalizeError::NotUtf8 {
        path: path.to_path_buf(),
    })?;

    let (normalized, replaced) = normalize_separators(&text);
    fs::write_string(path, &normalized)?;

    tracing::debug!("replaced {} separators in {}", replaced, path.display());

    Ok(NormalizeOutcome::Normalized {
        path: path.to_path_buf(),
        replaced,
    })
}

/// Replace backslashes with forward slashes, returning the count replaced.
pub fn normalize_separators(text: &str) -> (String, usize) {
    let replaced = text.matches('\\').count();
    (text.replace('\\', "/"), replaced)
}
