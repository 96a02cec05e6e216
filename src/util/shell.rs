//! Centralized shell output.
//!
//! Status messages go to stderr as a right-aligned, optionally colored
//! status word followed by the message. Command results (requirement
//! lists, configuration tags, JSON documents) go to stdout so they can be
//! piped.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

use crate::util::diagnostic::{self, Diagnostic};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// --quiet: errors only
    Quiet,
    /// Default: status messages
    #[default]
    Normal,
    /// --verbose: status messages plus debug logging
    Verbose,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Detect TTY and use colors if available.
    #[default]
    Auto,
    /// Always use ANSI colors.
    Always,
    /// Never use ANSI colors.
    Never,
}

impl std::str::FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(format!(
                "invalid color choice '{}'; expected 'auto', 'always', or 'never'",
                s
            )),
        }
    }
}

/// Status types for output messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    // Success statuses (green)
    Normalized,
    Declared,
    Created,

    // Info statuses (blue)
    Info,
}

impl Status {
    /// Get the display text for this status.
    fn as_str(&self) -> &'static str {
        match self {
            Status::Normalized => "Normalized",
            Status::Declared => "Declared",
            Status::Created => "Created",
            Status::Info => "Info",
        }
    }

    /// Get the ANSI color code for this status.
    fn color_code(&self) -> &'static str {
        match self {
            Status::Normalized | Status::Declared | Status::Created => "\x1b[1;32m",
            Status::Info => "\x1b[1;34m",
        }
    }
}

/// Width status words are right-aligned to.
const STATUS_WIDTH: usize = 12;

/// Central shell for all CLI output.
#[derive(Debug)]
pub struct Shell {
    verbosity: Verbosity,
    use_color: bool,
}

impl Shell {
    /// Create a new shell.
    pub fn new(verbosity: Verbosity, color: ColorChoice) -> Self {
        let use_color = match color {
            ColorChoice::Auto => io::stderr().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };

        Shell {
            verbosity,
            use_color,
        }
    }

    /// Create a shell from CLI flags. Quiet wins over verbose.
    pub fn from_flags(quiet: bool, verbose: bool, color: ColorChoice) -> Self {
        let verbosity = if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };
        Shell::new(verbosity, color)
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Print a status message.
    ///
    /// Format: `{status:>12} {message}`
    ///
    /// Nothing is printed in quiet mode.
    pub fn status(&self, status: Status, msg: impl Display) {
        if self.is_quiet() {
            return;
        }
        eprintln!("{} {}", self.format_status(status), msg);
    }

    /// Print an info message.
    pub fn note(&self, msg: impl Display) {
        self.status(Status::Info, msg);
    }

    /// Print a diagnostic. Diagnostics are errors, so quiet mode keeps them.
    pub fn diagnostic(&self, diag: &Diagnostic) {
        diagnostic::emit(diag, self.use_color);
    }

    /// Print a line of command output to stdout.
    pub fn out(&self, line: impl Display) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", line);
    }

    /// Format a status prefix with optional color.
    fn format_status(&self, status: Status) -> String {
        let text = status.as_str();
        if self.use_color {
            format!(
                "{}{:>width$}\x1b[0m",
                status.color_code(),
                text,
                width = STATUS_WIDTH
            )
        } else {
            format!("{:>width$}", text, width = STATUS_WIDTH)
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Shell::new(Verbosity::Normal, ColorChoice::Auto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_choice_parse() {
        assert_eq!("auto".parse::<ColorChoice>().unwrap(), ColorChoice::Auto);
        assert_eq!("ALWAYS".parse::<ColorChoice>().unwrap(), ColorChoice::Always);
        assert_eq!("never".parse::<ColorChoice>().unwrap(), ColorChoice::Never);
        assert!("invalid".parse::<ColorChoice>().is_err());
    }

    #[test]
    fn test_status_formatting() {
        let shell = Shell::new(Verbosity::Normal, ColorChoice::Never);

        let formatted = shell.format_status(Status::Declared);
        assert_eq!(formatted.trim(), "Declared");
        assert_eq!(formatted.len(), STATUS_WIDTH);
    }

    #[test]
    fn test_colored_status() {
        let shell = Shell::new(Verbosity::Normal, ColorChoice::Always);
        let formatted = shell.format_status(Status::Declared);
        assert!(formatted.starts_with("\x1b[1;32m"));
        assert!(formatted.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_from_flags() {
        let shell = Shell::from_flags(false, false, ColorChoice::Never);
        assert_eq!(shell.verbosity(), Verbosity::Normal);

        let shell = Shell::from_flags(true, false, ColorChoice::Never);
        assert!(shell.is_quiet());

        let shell = Shell::from_flags(false, true, ColorChoice::Never);
        assert_eq!(shell.verbosity(), Verbosity::Verbose);

        let shell = Shell::from_flags(true, true, ColorChoice::Never);
        assert!(shell.is_quiet());
    }
}
