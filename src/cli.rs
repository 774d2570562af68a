//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::counts;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quire list-page paginator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: quire.toml)
    #[arg(short = 'C', long, default_value = "quire.toml")]
    pub config: PathBuf,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Collection counts shared by every command
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CountArgs {
    /// JSON or TOML file mapping collection names to item counts
    #[arg(long = "counts")]
    pub file: Option<PathBuf>,

    /// Item count for one collection, e.g. `--count posts=25` (repeatable, overrides the file)
    #[arg(short = 'n', long = "count", value_name = "NAME=COUNT", value_parser = counts::parse_pair)]
    pub pairs: Vec<(String, usize)>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the list pages that would be created
    Plan {
        #[command(flatten)]
        counts: CountArgs,

        /// Print one JSON descriptor per line
        #[arg(long)]
        json: bool,
    },

    /// Write one page descriptor file per list page into the output directory
    Build {
        #[command(flatten)]
        counts: CountArgs,

        /// Remove the output directory before writing
        #[arg(long)]
        clean: bool,
    },
}

impl Cli {
    pub const fn counts(&self) -> &CountArgs {
        match &self.command {
            Commands::Plan { counts, .. } | Commands::Build { counts, .. } => counts,
        }
    }
}
