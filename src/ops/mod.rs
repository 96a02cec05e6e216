//! High-level operations.
//!
//! This module contains the implementation of the `dissolve-build` commands.

pub mod conanfile;
pub mod declare;
pub mod normalize_paths;

pub use conanfile::{render_conanfile, write_conanfile};
pub use declare::{load_package_list, DependencyDeclarator, PACKAGE_LIST_NAME};
pub use normalize_paths::{
    normalize_file, normalize_paths, parse_mode, NormalizeOutcome, NormalizeTargets,
};
