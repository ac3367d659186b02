use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lexiphone_config::OutputFormat;
use lexiphone_core::TextEncoding;

#[derive(Parser)]
#[command(name = "lexiphone")]
#[command(about = "Look up words in a pronouncing dictionary")]
#[command(version)]
pub struct Cli {
    /// JSON config file [default: ./config.json when present]
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Dictionary file, overrides the config
    #[arg(short, long, global = true)]
    pub dict: Option<PathBuf>,

    /// Drop words that have more than one pronunciation
    #[arg(long, global = true)]
    pub strict: bool,

    /// Dictionary text encoding (latin1, utf8)
    #[arg(short, long, global = true)]
    pub encoding: Option<TextEncoding>,

    /// Output format (plain, json)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the pronunciations of each word
    Lookup {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Show dictionary and parse statistics
    Stats,

    /// List the phoneme inventory
    Symbols,

    /// Validate a space-separated phoneme string
    Check { phonemes: String },
}
