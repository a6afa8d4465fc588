use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::render::ColorMode;

/// diary — move journal entries in and out of plain-text documents
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Read the format configuration from this file instead of the default locations.
    #[arg(long, global = true, env = "DIARY_CONFIG")]
    pub config: Option<PathBuf>,
    /// Override one format option for this run (e.g. `--set tagSeparator=;`). Repeatable.
    #[arg(long = "set", value_name = "KEY=VALUE", global = true)]
    pub overrides: Vec<String>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, global = true, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// More logging (`-v` info, `-vv` debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render stored entries (a JSON array) as a text document.
    Export {
        /// JSON file with the stored entries.
        entries: PathBuf,
        /// Write the document here instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Only export entries whose `diary` field matches.
        #[arg(long)]
        diary: Option<String>,
    },
    /// Read a text document and report which entries already exist.
    Import {
        /// The text document to read.
        file: PathBuf,
        /// JSON file with the entries that are already stored.
        #[arg(long)]
        existing: Option<PathBuf>,
        /// Leave entries flagged as duplicates out of the output.
        #[arg(long)]
        skip_duplicates: bool,
        /// Number continuation entries by position instead of trusting their header.
        #[arg(long)]
        sequential_index: bool,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the resolved format configuration.
    Config,
}
