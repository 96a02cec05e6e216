//! dissolve-build - build-support tooling for Dissolve
//!
//! This crate provides the two helpers the Dissolve build invokes:
//! normalizing path separators in generated build-variable files, and
//! declaring third-party package requirements from the package list.

pub mod core;
pub mod ops;
pub mod util;

pub use core::{
    build_mode::BuildMode,
    configuration::{BuildOptions, ConfigurationSet},
    package::PackageDescriptor,
    recipe::{PackageHost, Recipe, RequirementSet},
};

pub use ops::{DependencyDeclarator, NormalizeTargets};
pub use util::context::GlobalContext;
