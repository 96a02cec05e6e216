//! Implementation of `dissolve-build requirements`.
//!
//! The declarator reads the package list that sits next to the recipe and
//! registers every package whose library groups intersect the active
//! configuration. With the `all` option on, every package is registered.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::{
    BuildOptions, ConfigurationSet, DeclareError, HostSettings, PackageDescriptor, PackageHost,
    Recipe, RequirementSet,
};
use crate::util::fs;

/// Default name of the package list file.
pub const PACKAGE_LIST_NAME: &str = "package-list.json";

/// Default generator written to emitted conanfiles.
pub const DEFAULT_GENERATOR: &str = "CMakeDeps";

/// Declares Dissolve's third-party dependencies with a package host.
#[derive(Debug, Clone)]
pub struct DependencyDeclarator {
    /// Directory the recipe lives in; the package list is resolved against it
    recipe_dir: PathBuf,

    /// Package list file name, relative to `recipe_dir`
    package_list: String,

    /// Boolean options from the host
    options: BuildOptions,

    /// Opaque host settings
    settings: HostSettings,

    /// Generator mode requested by the host
    generator: String,
}

impl DependencyDeclarator {
    /// Create a declarator for the recipe in `recipe_dir`.
    pub fn new(recipe_dir: impl Into<PathBuf>, options: BuildOptions) -> Self {
        DependencyDeclarator {
            recipe_dir: recipe_dir.into(),
            package_list: PACKAGE_LIST_NAME.to_string(),
            options,
            settings: HostSettings::default(),
            generator: DEFAULT_GENERATOR.to_string(),
        }
    }

    /// Use a different package list file name.
    pub fn with_package_list(mut self, filename: impl Into<String>) -> Self {
        self.package_list = filename.into();
        self
    }

    /// Attach host settings.
    pub fn with_settings(mut self, settings: HostSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set the generator mode.
    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = generator.into();
        self
    }

    pub fn options(&self) -> BuildOptions {
        self.options
    }

    pub fn settings(&self) -> &HostSettings {
        &self.settings
    }

    pub fn generator(&self) -> &str {
        &self.generator
    }

    pub fn recipe_dir(&self) -> &Path {
        &self.recipe_dir
    }

    /// Load the package list.
    pub fn packages(&self) -> Result<Vec<PackageDescriptor>> {
        self.packages_from(&self.package_list)
    }

    /// Load a package list with the given file name from the recipe directory.
    pub fn packages_from(&self, filename: &str) -> Result<Vec<PackageDescriptor>> {
        load_package_list(&self.recipe_dir.join(filename))
    }

    /// Run the declaration pass against a fresh [`RequirementSet`].
    ///
    /// Nothing is returned when the pass fails, so callers never see a
    /// partial requirement list.
    pub fn declare(&self) -> Result<RequirementSet> {
        let mut requirements = RequirementSet::new();
        self.requirements(&mut requirements)?;
        Ok(requirements)
    }
}

impl Recipe for DependencyDeclarator {
    fn configuration(&self) -> ConfigurationSet {
        self.options.configuration()
    }

    fn requirements(&self, host: &mut dyn PackageHost) -> Result<()> {
        let configuration = self.configuration();
        let packages = self.packages()?;

        tracing::debug!(
            "declaring from {} packages (configuration: {}, settings: {})",
            packages.len(),
            configuration,
            self.settings
        );

        let mut declared = 0;
        for (index, package) in packages.iter().enumerate() {
            if !package.is_identified() {
                return Err(DeclareError::InvalidDescriptor { index }.into());
            }

            if configuration.selects(&package.libs) {
                let reference = package.reference();
                tracing::debug!("requires {}", reference);
                host.requires(&reference);
                declared += 1;
            } else {
                tracing::debug!("skipping {} (not in configuration)", package.reference());
            }
        }

        tracing::info!("declared {} of {} packages", declared, packages.len());
        Ok(())
    }
}

/// Read and parse a package list file.
pub fn load_package_list(path: &Path) -> Result<Vec<PackageDescriptor>> {
    if !path.exists() {
        return Err(DeclareError::ManifestMissing {
            path: path.to_path_buf(),
        }
        .into());
    }

    let contents = fs::read_to_string(path)?;
    let packages = serde_json::from_str(&contents).map_err(|e| DeclareError::ManifestParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(packages)
}
