//! `dissolve-build normalize-paths` command

use anyhow::Result;

use crate::cli::NormalizePathsArgs;
use crate::GlobalOptions;
use dissolve_build::ops::normalize_paths::{normalize_paths, parse_mode, NormalizeOutcome};
use dissolve_build::util::{GlobalContext, Status};

pub fn execute(args: NormalizePathsArgs, global_opts: &GlobalOptions) -> Result<()> {
    let shell = &global_opts.shell;

    // The mode is checked before anything is read from disk.
    let mode = parse_mode(&args.mode)?;

    let ctx = GlobalContext::new()?;
    let config = super::load_config(&ctx);
    let targets = config.normalize_targets().relative_to(ctx.cwd());

    match normalize_paths(mode, &targets)? {
        NormalizeOutcome::Normalized { path, replaced } => {
            shell.status(
                Status::Normalized,
                format!(
                    "{} ({} separator{} rewritten)",
                    path.display(),
                    replaced,
                    if replaced == 1 { "" } else { "s" }
                ),
            );
        }
        NormalizeOutcome::Missing { path } => {
            shell.note(format!(
                "{} does not exist; nothing to normalize for the {} build",
                path.display(),
                mode
            ));
        }
    }

    Ok(())
}
