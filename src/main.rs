//! Quire - list-page pagination for static sites.

use anyhow::{Result, bail};
use clap::Parser;
use quire::{
    build::build_pages,
    cli::{Cli, Commands},
    config::SiteConfig,
    counts,
    logger::log_error,
    plan::plan_pages,
};
use std::{path::Path, process::ExitCode};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let args = cli.counts();
    let counts = counts::collect(args.file.as_deref(), args.pairs.iter().cloned())?;

    match &cli.command {
        Commands::Plan { json, .. } => plan_pages(&config, &counts, *json).map(|_| ()),
        Commands::Build { clean, .. } => build_pages(&config, &counts, *clean).map(|_| ()),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    if !config_path.exists() {
        bail!("Config file not found: {}", config_path.display());
    }

    let mut config = SiteConfig::from_path(&config_path)?;
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
