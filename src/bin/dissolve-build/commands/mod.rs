//! Command implementations

pub mod completions;
pub mod configuration;
pub mod normalize_paths;
pub mod requirements;

use dissolve_build::util::{Config, GlobalContext};

/// Load the merged configuration, falling back to defaults with a warning.
pub fn load_config(ctx: &GlobalContext) -> Config {
    ctx.load_config().unwrap_or_else(|e| {
        tracing::warn!("{:#}; using default configuration", e);
        Config::default()
    })
}
