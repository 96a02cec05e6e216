//! `dissolve-build configuration` command

use anyhow::Result;

use crate::cli::{ConfigurationArgs, OutputFormat};
use crate::GlobalOptions;
use dissolve_build::util::GlobalContext;

pub fn execute(args: ConfigurationArgs, global_opts: &GlobalOptions) -> Result<()> {
    let shell = &global_opts.shell;
    let ctx = GlobalContext::new()?;
    let config = super::load_config(&ctx);

    let mut options = config.build_options();
    options.enable(args.options.to_build_options());
    let configuration = options.configuration();

    match args.format {
        OutputFormat::Text => {
            for tag in configuration.iter() {
                shell.out(tag);
            }
        }
        OutputFormat::Json => shell.out(serde_json::to_string(&configuration)?),
    }

    Ok(())
}
