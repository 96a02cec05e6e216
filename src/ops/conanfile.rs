//! Emission of a `conanfile.txt` from declared requirements.

use std::path::Path;

use anyhow::Result;

use crate::core::RequirementSet;
use crate::util::fs;

/// Render a `conanfile.txt` with `[requires]` and `[generators]` sections.
pub fn render_conanfile(requirements: &RequirementSet, generator: &str) -> String {
    let mut out = String::from("[requires]\n");
    for reference in requirements.iter() {
        out.push_str(reference);
        out.push('\n');
    }
    out.push_str("\n[generators]\n");
    out.push_str(generator);
    out.push('\n');
    out
}

/// Write a `conanfile.txt`, creating parent directories as needed.
pub fn write_conanfile(path: &Path, requirements: &RequirementSet, generator: &str) -> Result<()> {
    fs::write_string(path, &render_conanfile(requirements, generator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PackageHost;
    use tempfile::TempDir;

    #[test]
    fn test_render_conanfile() {
        let mut reqs = RequirementSet::new();
        reqs.requires("fmt/8.1.1");
        reqs.requires("pugixml/1.11");

        assert_eq!(
            render_conanfile(&reqs, "CMakeDeps"),
            "[requires]\nfmt/8.1.1\npugixml/1.11\n\n[generators]\nCMakeDeps\n"
        );
    }

    #[test]
    fn test_render_empty_requires() {
        let out = render_conanfile(&RequirementSet::new(), "cmake");
        assert_eq!(out, "[requires]\n\n[generators]\ncmake\n");
    }

    #[test]
    fn test_write_conanfile_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("build").join("conanfile.txt");
        let mut reqs = RequirementSet::new();
        reqs.requires("a/1.0");

        write_conanfile(&path, &reqs, "CMakeDeps").unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("a/1.0\n"));
    }
}
