//! Build options and the configuration set derived from them.
//!
//! The configuration set is the vocabulary a package descriptor's `libs`
//! are matched against. It always contains [`BASE`]; [`GUI`], [`TESTS`]
//! and [`ALL`] are present exactly when the matching option is enabled.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag present in every configuration.
pub const BASE: &str = "base";

/// Tag for GUI dependencies.
pub const GUI: &str = "gui";

/// Tag for test dependencies.
pub const TESTS: &str = "tests";

/// Tag that selects every package regardless of its `libs`.
pub const ALL: &str = "all";

/// Boolean build options supplied by the package-manager host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    pub gui: bool,
    pub tests: bool,
    pub all: bool,
}

impl BuildOptions {
    /// Enable options from `other` on top of these ones.
    ///
    /// Options can only be switched on by a later layer, never off.
    pub fn enable(&mut self, other: BuildOptions) {
        self.gui |= other.gui;
        self.tests |= other.tests;
        self.all |= other.all;
    }

    /// Compute the active configuration set.
    pub fn configuration(&self) -> ConfigurationSet {
        let mut tags = BTreeSet::new();
        tags.insert(BASE.to_string());
        if self.gui {
            tags.insert(GUI.to_string());
        }
        if self.tests {
            tags.insert(TESTS.to_string());
        }
        if self.all {
            tags.insert(ALL.to_string());
        }
        ConfigurationSet { tags }
    }
}

/// The active set of library-group tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfigurationSet {
    tags: BTreeSet<String>,
}

impl ConfigurationSet {
    /// Check whether a tag is active.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Check whether the `all` override is active.
    pub fn selects_all(&self) -> bool {
        self.contains(ALL)
    }

    /// Check whether a package with the given library tags is selected.
    ///
    /// A package is selected when `all` is active or when any of its tags
    /// is in the configuration.
    pub fn selects<'a, I>(&self, libs: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        self.selects_all() || libs.into_iter().any(|lib| self.tags.contains(lib))
    }

    /// Iterate over the active tags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl fmt::Display for ConfigurationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<&str> = self.iter().collect();
        write!(f, "{}", tags.join(", "))
    }
}
