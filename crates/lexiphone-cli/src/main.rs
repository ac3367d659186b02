use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use lexiphone_config::Config;
use lexiphone_core::{CmuDictLoader, PronouncingDictionary};
use tracing_subscriber::EnvFilter;

mod args;
mod commands;

use self::args::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::discover(cli.config.as_deref(), Path::new("."))?;
    let config = apply_overrides(config, &cli);
    let format = config.output.format;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Lookup { words } => {
            let dict = load_dictionary(&config)?;
            commands::cmd_lookup(&dict, words, format, &mut out)?;
        }
        Commands::Stats => {
            let dict = load_dictionary(&config)?;
            commands::cmd_stats(&dict, format, &mut out)?;
        }
        Commands::Symbols => commands::cmd_symbols(format, &mut out)?,
        Commands::Check { phonemes } => commands::cmd_check(phonemes, format, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Command-line flags win over the config file
fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(path) = &cli.dict {
        config.dictionary.path = Some(path.clone());
    }
    if cli.strict {
        config.dictionary.keep_ambiguous = false;
    }
    if let Some(encoding) = cli.encoding {
        config.dictionary.encoding = encoding;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    config
}

fn load_dictionary(config: &Config) -> Result<PronouncingDictionary> {
    let path = config
        .dictionary
        .path
        .as_deref()
        .context("no dictionary file given; pass --dict or set dictionary.path in the config")?;

    CmuDictLoader::load_from_file(path, config.dictionary.load_options())
        .with_context(|| format!("failed to load dictionary {}", path.display()))
}
