//! User-friendly diagnostic messages.
//!
//! Every error shown to a user carries the root cause, any context that
//! locates it, and a suggested fix where one exists.

use std::fmt;
use std::path::PathBuf;

/// Common suggestion messages for consistent error handling.
pub mod suggestions {
    /// Suggestion when the build mode argument is wrong.
    pub const BUILD_MODE: &str = "Run `dissolve-build normalize-paths debug` or `... release`";

    /// Suggestion when the package list is missing.
    pub const PACKAGE_LIST: &str =
        "Pass `--recipe-dir` pointing at the directory containing package-list.json";

    /// Suggestion when a host setting is rejected.
    pub const SETTINGS: &str =
        "Use `-s key=value` with one of `os`, `compiler`, `build_type`, `arch`";
}

/// An error diagnostic with optional suggestions.
///
/// Warnings go through `tracing::warn!` instead.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
    /// Related location (file path)
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }

    /// Add context to the diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Add a suggestion for fixing the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add a file location.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        let prefix = if color { "\x1b[1;31merror\x1b[0m" } else { "error" };
        output.push_str(&format!("{}: {}\n", prefix, self.message));

        if let Some(ref path) = self.location {
            output.push_str(&format!("  --> {}\n", path.display()));
        }

        for ctx in &self.context {
            output.push_str(&format!("  = {}\n", ctx));
        }

        if !self.suggestions.is_empty() {
            output.push('\n');
            let help_prefix = if color {
                "\x1b[1;32mhelp\x1b[0m"
            } else {
                "help"
            };
            output.push_str(&format!("{}: consider:\n", help_prefix));
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_formatting() {
        let diag = Diagnostic::error("package list not found: recipe/package-list.json")
            .with_location("recipe/package-list.json")
            .with_context("the recipe directory was /tmp/recipe")
            .with_suggestion("Pass `--recipe-dir`")
            .with_suggestion("Create the file");

        let output = diag.format(false);
        assert!(output.starts_with("error: package list not found"));
        assert!(output.contains("  --> recipe/package-list.json"));
        assert!(output.contains("  = the recipe directory"));
        assert!(output.contains("help: consider:"));
        assert!(output.contains("  2. Create the file"));
    }

    #[test]
    fn test_diagnostic_without_suggestions() {
        let output = Diagnostic::error("config ignored").format(false);
        assert_eq!(output, "error: config ignored\n");
    }

    #[test]
    fn test_colored_prefix() {
        let output = Diagnostic::error("boom").format(true);
        assert!(output.starts_with("\x1b[1;31merror\x1b[0m: boom"));
    }
}
