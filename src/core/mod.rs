//! Core data structures.
//!
//! - Build modes for the path normalizer
//! - Build options and configuration sets
//! - Package descriptors
//! - The recipe/host contract for declaring requirements

pub mod build_mode;
pub mod configuration;
pub mod errors;
pub mod package;
pub mod recipe;

pub use build_mode::BuildMode;
pub use configuration::{BuildOptions, ConfigurationSet};
pub use errors::{DeclareError, NormalizeError};
pub use package::{to_conan_name, PackageDescriptor};
pub use recipe::{HostSettings, PackageHost, Recipe, RequirementSet};
