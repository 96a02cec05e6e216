//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use dissolve_build::util::ColorChoice;
use dissolve_build::BuildOptions;

/// Build-support tooling for Dissolve
#[derive(Parser)]
#[command(name = "dissolve-build")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite backslashes to forward slashes in a generated build file
    NormalizePaths(NormalizePathsArgs),

    /// Declare the package requirements for a configuration
    Requirements(RequirementsArgs),

    /// Show the active configuration tags
    Configuration(ConfigurationArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct NormalizePathsArgs {
    /// Build mode: debug or release (case-insensitive)
    #[arg(value_name = "MODE", num_args = 0.., allow_hyphen_values = true)]
    pub mode: Vec<String>,
}

/// Boolean build options shared by the recipe commands.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OptionArgs {
    /// Include GUI dependencies
    #[arg(long)]
    pub gui: bool,

    /// Include test dependencies
    #[arg(long)]
    pub tests: bool,

    /// Include every dependency in the package list
    #[arg(long)]
    pub all: bool,
}

impl OptionArgs {
    pub fn to_build_options(self) -> BuildOptions {
        BuildOptions {
            gui: self.gui,
            tests: self.tests,
            all: self.all,
        }
    }
}

#[derive(Args)]
pub struct RequirementsArgs {
    #[command(flatten)]
    pub options: OptionArgs,

    /// Directory containing the package list (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub recipe_dir: Option<PathBuf>,

    /// Package list file name inside the recipe directory
    #[arg(long, value_name = "FILE")]
    pub package_list: Option<String>,

    /// Host setting as key=value (os, compiler, build_type, arch)
    #[arg(short = 's', long = "setting", value_name = "KEY=VALUE")]
    pub settings: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write a conanfile.txt with the declared requirements
    #[arg(long, value_name = "PATH")]
    pub emit_conanfile: Option<PathBuf>,

    /// Generator listed in the emitted conanfile
    #[arg(long)]
    pub generator: Option<String>,
}

#[derive(Args)]
pub struct ConfigurationArgs {
    #[command(flatten)]
    pub options: OptionArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
