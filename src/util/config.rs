//! Configuration file support for dissolve-build.
//!
//! Two configuration file locations are supported:
//! - Global: `~/.dissolve-build/config.toml` - User-wide defaults
//! - Project: `.dissolve-build/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config. Command-line flags
//! take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::BuildOptions;
use crate::ops::NormalizeTargets;

/// Name of the per-user and per-project configuration directory.
pub const CONFIG_DIR_NAME: &str = ".dissolve-build";

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// dissolve-build configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generated files rewritten by `normalize-paths`
    pub normalize: NormalizeConfig,

    /// Default build options for `requirements`
    pub options: BuildOptions,

    /// Recipe location and generator
    pub recipe: RecipeConfig,
}

/// Per-mode generated file paths.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// File rewritten for debug builds
    pub debug: Option<PathBuf>,

    /// File rewritten for release builds
    pub release: Option<PathBuf>,
}

/// Recipe settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeConfig {
    /// Directory containing the package list
    pub dir: Option<PathBuf>,

    /// Package list file name
    pub package_list: Option<String>,

    /// Generator written to emitted conanfiles
    pub generator: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration, treating a missing file as defaults.
    pub fn load_if_exists(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.normalize.debug.is_some() {
            self.normalize.debug = other.normalize.debug;
        }
        if other.normalize.release.is_some() {
            self.normalize.release = other.normalize.release;
        }

        self.options.enable(other.options);

        if other.recipe.dir.is_some() {
            self.recipe.dir = other.recipe.dir;
        }
        if other.recipe.package_list.is_some() {
            self.recipe.package_list = other.recipe.package_list;
        }
        if other.recipe.generator.is_some() {
            self.recipe.generator = other.recipe.generator;
        }
    }

    /// The configured normalize targets, falling back to the defaults.
    pub fn normalize_targets(&self) -> NormalizeTargets {
        let defaults = NormalizeTargets::default();
        NormalizeTargets {
            debug: self.normalize.debug.clone().unwrap_or(defaults.debug),
            release: self.normalize.release.clone().unwrap_or(defaults.release),
        }
    }

    /// The configured default build options.
    pub fn build_options(&self) -> BuildOptions {
        self.options
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.dissolve-build/config.toml)
/// 2. Global config (~/.dissolve-build/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Result<Config> {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_if_exists(global_path)?);
    }

    config.merge(Config::load_if_exists(project_path)?);

    Ok(config)
}

/// Get the global config directory (~/.dissolve-build).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(CONFIG_DIR_NAME))
}

/// Get the global config path (~/.dissolve-build/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Get the project config path (.dissolve-build/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.normalize_targets(), NormalizeTargets::default());
        assert_eq!(config.build_options(), BuildOptions::default());
        assert!(config.recipe.dir.is_none());
    }

    #[test]
    fn test_config_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[normalize]
debug = "out/Debug/vars.cmake"

[options]
gui = true

[recipe]
dir = "ci"
generator = "cmake"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        let targets = config.normalize_targets();
        assert_eq!(targets.debug, PathBuf::from("out/Debug/vars.cmake"));
        assert_eq!(targets.release, NormalizeTargets::default().release);
        assert!(config.build_options().gui);
        assert!(!config.build_options().tests);
        assert_eq!(config.recipe.dir, Some(PathBuf::from("ci")));
        assert_eq!(config.recipe.generator.as_deref(), Some("cmake"));
    }

    #[test]
    fn test_config_load_rejects_bad_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[options]\ngui = \"yes\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to parse config file"));
    }

    #[test]
    fn test_config_merge() {
        let mut base = Config::default();
        base.normalize.debug = Some(PathBuf::from("global/debug.cmake"));
        base.normalize.release = Some(PathBuf::from("global/release.cmake"));
        base.options.tests = true;

        let mut project = Config::default();
        project.normalize.debug = Some(PathBuf::from("project/debug.cmake"));
        project.options.gui = true;
        project.recipe.package_list = Some("deps.json".into());

        base.merge(project);
        assert_eq!(base.normalize.debug, Some(PathBuf::from("project/debug.cmake")));
        assert_eq!(base.normalize.release, Some(PathBuf::from("global/release.cmake")));
        assert!(base.options.gui);
        assert!(base.options.tests);
        assert_eq!(base.recipe.package_list.as_deref(), Some("deps.json"));
    }

    #[test]
    fn test_load_config_precedence() {
        let tmp = TempDir::new().unwrap();
        let global = tmp.path().join("global.toml");
        let project = tmp.path().join("project.toml");
        std::fs::write(&global, "[recipe]\ngenerator = \"cmake\"\ndir = \"g\"\n").unwrap();
        std::fs::write(&project, "[recipe]\ndir = \"p\"\n").unwrap();

        let config = load_config(Some(&global), &project).unwrap();
        assert_eq!(config.recipe.dir, Some(PathBuf::from("p")));
        assert_eq!(config.recipe.generator.as_deref(), Some("cmake"));
    }

    #[test]
    fn test_load_config_missing_files() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(None, &tmp.path().join("absent.toml")).unwrap();
        assert!(config.recipe.generator.is_none());
    }
}
