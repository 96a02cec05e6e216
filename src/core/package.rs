//! Package descriptors read from the package list.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

/// A dependency named in the package list, with the library groups it
/// belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDescriptor {
    /// Package name
    #[serde(default, deserialize_with = "empty_if_null")]
    pub name: String,

    /// Package version
    #[serde(default, deserialize_with = "empty_if_null")]
    pub version: String,

    /// Library-group tags (e.g. `base`, `gui`, `tests`)
    #[serde(default)]
    pub libs: BTreeSet<String>,
}

impl PackageDescriptor {
    /// Create a new descriptor.
    pub fn new<I, S>(name: impl Into<String>, version: impl Into<String>, libs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PackageDescriptor {
            name: name.into(),
            version: version.into(),
            libs: libs.into_iter().map(Into::into).collect(),
        }
    }

    /// Check that the descriptor identifies a package.
    ///
    /// Only a descriptor with both `name` and `version` empty is rejected;
    /// a descriptor with just one of them set is accepted.
    pub fn is_identified(&self) -> bool {
        !self.name.is_empty() || !self.version.is_empty()
    }

    /// The requirement reference for this descriptor.
    pub fn reference(&self) -> String {
        to_conan_name(&self.name, &self.version)
    }
}

/// Format a package reference as `name/version`.
pub fn to_conan_name(name: &str, version: &str) -> String {
    format!("{}/{}", name, version)
}

fn empty_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_conan_name() {
        assert_eq!(to_conan_name("fmt", "8.1.1"), "fmt/8.1.1");
        assert_eq!(to_conan_name("", ""), "/");
    }

    #[test]
    fn test_parse_descriptor() {
        let json = r#"{"name": "pugixml", "version": "1.11", "libs": ["base", "gui"]}"#;
        let desc: PackageDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(desc.name, "pugixml");
        assert_eq!(desc.version, "1.11");
        assert!(desc.libs.contains("gui"));
        assert_eq!(desc.reference(), "pugixml/1.11");
    }

    #[test]
    fn test_missing_and_null_fields_are_empty() {
        let desc: PackageDescriptor = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert!(desc.name.is_empty());
        assert!(desc.version.is_empty());
        assert!(desc.libs.is_empty());
        assert!(!desc.is_identified());
    }

    #[test]
    fn test_identified_needs_only_one_field() {
        assert!(PackageDescriptor::new("a", "1.0", ["base"]).is_identified());
        assert!(PackageDescriptor::new("a", "", ["base"]).is_identified());
        assert!(PackageDescriptor::new("", "1.0", ["base"]).is_identified());
        assert!(!PackageDescriptor::new("", "", ["base"]).is_identified());
    }
}
