//! dissolve-build CLI - build-support tooling for Dissolve

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use dissolve_build::core::{DeclareError, NormalizeError};
use dissolve_build::util::{Diagnostic, Shell, Verbosity};

/// Options every command receives.
pub struct GlobalOptions {
    pub shell: Shell,
}

fn main() {
    let cli = Cli::parse();
    let global_opts = GlobalOptions {
        shell: Shell::from_flags(cli.quiet, cli.verbose, cli.color),
    };

    init_logging(&global_opts.shell);

    if let Err(e) = run(cli.command, &global_opts) {
        report(&e, &global_opts.shell);
        std::process::exit(1);
    }
}

fn init_logging(shell: &Shell) {
    let default_filter = match shell.verbosity() {
        Verbosity::Quiet => "dissolve_build=error",
        Verbosity::Normal => "dissolve_build=info",
        Verbosity::Verbose => "dissolve_build=debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(shell.use_color())
        .with_target(false)
        .without_time()
        .init();
}

fn run(command: Commands, global_opts: &GlobalOptions) -> Result<()> {
    match command {
        Commands::NormalizePaths(args) => commands::normalize_paths::execute(args, global_opts),
        Commands::Requirements(args) => commands::requirements::execute(args, global_opts),
        Commands::Configuration(args) => commands::configuration::execute(args, global_opts),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Print an error, using the richer diagnostic when one is available.
fn report(e: &anyhow::Error, shell: &Shell) {
    let diag = if let Some(err) = e.downcast_ref::<NormalizeError>() {
        err.to_diagnostic()
    } else if let Some(err) = e.downcast_ref::<DeclareError>() {
        err.to_diagnostic()
    } else {
        Diagnostic::error(format!("{:#}", e))
    };
    shell.diagnostic(&diag);
}
