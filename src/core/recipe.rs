//! The contract between a dependency recipe and its package-manager host.
//!
//! The host owns settings and options and asks the recipe for its
//! requirements; the recipe answers by calling [`PackageHost::requires`]
//! once per dependency.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use serde::Serialize;

use crate::core::configuration::ConfigurationSet;
use crate::core::errors::DeclareError;

/// Something that accepts requirement declarations.
pub trait PackageHost {
    /// Register a requirement reference (`name/version`).
    fn requires(&mut self, reference: &str);
}

/// A recipe invoked by a package-manager host.
pub trait Recipe {
    /// The active configuration set, derived from the recipe's options.
    fn configuration(&self) -> ConfigurationSet;

    /// Declare every required package with `host`.
    fn requirements(&self, host: &mut dyn PackageHost) -> Result<()>;
}

/// Host implementation that collects requirements in declaration order.
///
/// A reference declared twice is kept once and logged as a warning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequirementSet {
    references: Vec<String>,
}

impl RequirementSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.references.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    pub fn contains(&self, reference: &str) -> bool {
        self.references.iter().any(|r| r == reference)
    }
}

impl PackageHost for RequirementSet {
    fn requires(&mut self, reference: &str) {
        if self.contains(reference) {
            tracing::warn!("{} declared more than once; keeping the first", reference);
            return;
        }
        self.references.push(reference.to_string());
    }
}

/// Host settings. The recipe carries them but never interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HostSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compiler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,
}

impl HostSettings {
    /// Parse settings from `key=value` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, DeclareError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut settings = HostSettings::default();
        for pair in pairs {
            let setting: Setting = pair.as_ref().parse()?;
            settings.set(&setting.key, setting.value)?;
        }
        Ok(settings)
    }

    /// Set a single setting by key.
    pub fn set(&mut self, key: &str, value: String) -> Result<(), DeclareError> {
        let slot = match key {
            "os" => &mut self.os,
            "compiler" => &mut self.compiler,
            "build_type" => &mut self.build_type,
            "arch" => &mut self.arch,
            _ => {
                return Err(DeclareError::UnknownSetting {
                    key: key.to_string(),
                })
            }
        };
        *slot = Some(value);
        Ok(())
    }
}

impl fmt::Display for HostSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("os", &self.os),
            ("compiler", &self.compiler),
            ("build_type", &self.build_type),
            ("arch", &self.arch),
        ];
        let set: Vec<String> = fields
            .iter()
            .filter_map(|&(k, v)| v.as_ref().map(|v| format!("{}={}", k, v)))
            .collect();
        if set.is_empty() {
            f.write_str("(none)")
        } else {
            f.write_str(&set.join(" "))
        }
    }
}

/// A `key=value` setting from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub key: String,
    pub value: String,
}

impl FromStr for Setting {
    type Err = DeclareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => Ok(Setting {
                key: key.trim().to_string(),
                value: value.trim().to_string(),
            }),
            _ => Err(DeclareError::MalformedSetting { raw: s.to_string() }),
        }
    }
}
