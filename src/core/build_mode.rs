//! Build mode selection for generated build-variable files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::NormalizeError;

/// Target configuration of the compiled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    /// Get the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Debug => "debug",
            BuildMode::Release => "release",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildMode {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(BuildMode::Debug),
            "release" => Ok(BuildMode::Release),
            _ => Err(NormalizeError::InvalidBuildMode {
                given: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("debug".parse::<BuildMode>().unwrap(), BuildMode::Debug);
        assert_eq!("Debug".parse::<BuildMode>().unwrap(), BuildMode::Debug);
        assert_eq!("RELEASE".parse::<BuildMode>().unwrap(), BuildMode::Release);
        assert_eq!("rElEaSe".parse::<BuildMode>().unwrap(), BuildMode::Release);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for bad in ["", "dbg", "relwithdebinfo", " debug", "debug ", "release1"] {
            let err = bad.parse::<BuildMode>().unwrap_err();
            assert!(matches!(err, NormalizeError::InvalidBuildMode { .. }), "{bad:?}");
        }
    }

    #[test]
    fn test_display_roundtrips_name() {
        for mode in [BuildMode::Debug, BuildMode::Release] {
            assert_eq!(mode.to_string().parse::<BuildMode>().unwrap(), mode);
        }
    }
}
