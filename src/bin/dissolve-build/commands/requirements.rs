//! `dissolve-build requirements` command

use anyhow::Result;
use serde::Serialize;

use crate::cli::{OutputFormat, RequirementsArgs};
use crate::GlobalOptions;
use dissolve_build::core::{
    BuildOptions, ConfigurationSet, HostSettings, Recipe, RequirementSet,
};
use dissolve_build::ops::{write_conanfile, DependencyDeclarator};
use dissolve_build::util::{Config, GlobalContext, Status};

/// JSON document printed with `--format json`.
#[derive(Serialize)]
struct RequirementsReport<'a> {
    settings: &'a HostSettings,
    options: BuildOptions,
    configuration: ConfigurationSet,
    generator: &'a str,
    requires: &'a RequirementSet,
}

pub fn execute(args: RequirementsArgs, global_opts: &GlobalOptions) -> Result<()> {
    let shell = &global_opts.shell;
    let ctx = GlobalContext::new()?;
    let config = super::load_config(&ctx);

    let settings = HostSettings::from_pairs(&args.settings)?;
    let declarator = declarator(&ctx, &config, &args).with_settings(settings);

    let requirements = declarator.declare()?;

    match args.format {
        OutputFormat::Text => {
            for reference in requirements.iter() {
                shell.out(reference);
            }
        }
        OutputFormat::Json => {
            let report = RequirementsReport {
                settings: declarator.settings(),
                options: declarator.options(),
                configuration: declarator.configuration(),
                generator: declarator.generator(),
                requires: &requirements,
            };
            shell.out(serde_json::to_string_pretty(&report)?);
        }
    }

    if let Some(path) = &args.emit_conanfile {
        let path = ctx.resolve(path);
        write_conanfile(&path, &requirements, declarator.generator())?;
        shell.status(Status::Created, path.display());
    }

    shell.status(
        Status::Declared,
        format!(
            "{} requirement{} for configuration [{}]",
            requirements.len(),
            if requirements.len() == 1 { "" } else { "s" },
            declarator.configuration()
        ),
    );

    Ok(())
}

/// Build the declarator from config defaults overridden by flags.
fn declarator(ctx: &GlobalContext, config: &Config, args: &RequirementsArgs) -> DependencyDeclarator {
    let mut options = config.build_options();
    options.enable(args.options.to_build_options());

    let recipe_dir = args
        .recipe_dir
        .as_ref()
        .or(config.recipe.dir.as_ref())
        .map(|dir| ctx.resolve(dir))
        .unwrap_or_else(|| ctx.cwd().to_path_buf());

    let mut declarator = DependencyDeclarator::new(recipe_dir, options);

    if let Some(name) = args.package_list.as_ref().or(config.recipe.package_list.as_ref()) {
        declarator = declarator.with_package_list(name.clone());
    }
    if let Some(generator) = args.generator.as_ref().or(config.recipe.generator.as_ref()) {
        declarator = declarator.with_generator(generator.clone());
    }

    declarator
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::{Path, PathBuf};

    fn parse_args(args: &[&str]) -> RequirementsArgs {
        #[derive(Parser)]
        struct TestCli {
            #[command(flatten)]
            requirements: RequirementsArgs,
        }
        TestCli::parse_from(args).requirements
    }

    fn ctx() -> GlobalContext {
        GlobalContext::with_cwd(PathBuf::from("/work"))
            .unwrap()
            .with_global_config(None)
    }

    #[test]
    fn test_requirements_args_defaults() {
        let args = parse_args(&["test"]);
        assert!(!args.options.gui);
        assert!(!args.options.tests);
        assert!(!args.options.all);
        assert!(args.recipe_dir.is_none());
        assert!(args.settings.is_empty());
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_requirements_args_flags() {
        let args = parse_args(&[
            "test", "--gui", "--all", "-s", "os=Linux", "--setting", "arch=x86_64", "--format",
            "json",
        ]);
        assert!(args.options.gui);
        assert!(args.options.all);
        assert_eq!(args.settings, vec!["os=Linux", "arch=x86_64"]);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_declarator_defaults_to_cwd() {
        let args = parse_args(&["test"]);
        let declarator = declarator(&ctx(), &Config::default(), &args);
        assert_eq!(declarator.recipe_dir(), Path::new("/work"));
        assert_eq!(declarator.options(), BuildOptions::default());
        assert_eq!(declarator.generator(), "CMakeDeps");
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.recipe.dir = Some(PathBuf::from("ci"));
        config.recipe.generator = Some("cmake".into());
        config.options.tests = true;

        let args = parse_args(&["test", "--gui", "--recipe-dir", "/elsewhere"]);
        let declarator = declarator(&ctx(), &config, &args);

        assert_eq!(declarator.recipe_dir(), Path::new("/elsewhere"));
        assert_eq!(declarator.generator(), "cmake");
        assert!(declarator.options().gui);
        assert!(declarator.options().tests);
    }

    #[test]
    fn test_config_recipe_dir_is_relative_to_cwd() {
        let mut config = Config::default();
        config.recipe.dir = Some(PathBuf::from("ci"));

        let declarator = declarator(&ctx(), &config, &parse_args(&["test"]));
        assert_eq!(declarator.recipe_dir(), Path::new("/work/ci"));
    }
}
