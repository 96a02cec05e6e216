//! Error types for path normalization and dependency declaration.

use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error while normalizing a generated build-variable file.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum NormalizeError {
    #[error("invalid build mode `{given}`; expected `debug` or `release`")]
    #[diagnostic(code(dissolve_build::normalize::invalid_mode))]
    InvalidBuildMode { given: String },

    #[error("no build mode given; expected `debug` or `release`")]
    #[diagnostic(code(dissolve_build::normalize::missing_mode))]
    MissingBuildMode,

    #[error("expected a single build mode, got `{}`", given.join(" "))]
    #[diagnostic(code(dissolve_build::normalize::extra_arguments))]
    ExtraArguments { given: Vec<String> },

    #[error("`{}` is not valid UTF-8 text", path.display())]
    #[diagnostic(code(dissolve_build::normalize::encoding))]
    NotUtf8 { path: PathBuf },
}

impl NormalizeError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            NormalizeError::InvalidBuildMode { .. }
            | NormalizeError::MissingBuildMode
            | NormalizeError::ExtraArguments { .. } => {
                Diagnostic::error(self.to_string()).with_suggestion(suggestions::BUILD_MODE)
            }
            NormalizeError::NotUtf8 { path } => Diagnostic::error(self.to_string())
                .with_location(path)
                .with_context("generated build-variable files are expected to be UTF-8"),
        }
    }
}

/// Error while declaring package requirements.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum DeclareError {
    #[error("package list not found: {}", path.display())]
    #[diagnostic(
        code(dissolve_build::declare::manifest_missing),
        help("the dependency list cannot be determined without it")
    )]
    ManifestMissing { path: PathBuf },

    #[error("failed to parse package list {}: {message}", path.display())]
    #[diagnostic(code(dissolve_build::declare::manifest_parse))]
    ManifestParse { path: PathBuf, message: String },

    #[error("package entry #{index} has neither a name nor a version")]
    #[diagnostic(
        code(dissolve_build::declare::invalid_descriptor),
        help("every entry needs a non-empty `name` and `version`")
    )]
    InvalidDescriptor { index: usize },

    #[error("unknown setting `{key}`")]
    #[diagnostic(code(dissolve_build::declare::unknown_setting))]
    UnknownSetting { key: String },

    #[error("malformed setting `{raw}`; expected `key=value`")]
    #[diagnostic(code(dissolve_build::declare::malformed_setting))]
    MalformedSetting { raw: String },
}

impl DeclareError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            DeclareError::ManifestMissing { path } => Diagnostic::error(self.to_string())
                .with_location(path)
                .with_suggestion(suggestions::PACKAGE_LIST),
            DeclareError::ManifestParse { path, .. } => Diagnostic::error(self.to_string())
                .with_location(path)
                .with_context(
                    "expected a JSON array of {\"name\", \"version\", \"libs\"} objects",
                ),
            DeclareError::InvalidDescriptor { index } => Diagnostic::error(self.to_string())
                .with_context(format!("entries before #{} were not declared", index))
                .with_suggestion("Fill in the `name` and `version` fields of the entry"),
            DeclareError::UnknownSetting { .. } => Diagnostic::error(self.to_string())
                .with_suggestion(suggestions::SETTINGS),
            DeclareError::MalformedSetting { .. } => Diagnostic::error(self.to_string())
                .with_suggestion(suggestions::SETTINGS),
        }
    }
}
