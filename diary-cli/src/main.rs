mod cli;
mod cli_modes;
mod config;
mod render;
mod store;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use cli_modes::{ImportArgs, config_mode, export_mode, import_mode};
use config::Config;
use render::Renderer;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("diary: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?.with_overrides(&cli.overrides)?;
    let renderer = Renderer::new(cli.color.use_color());

    match cli.command {
        Command::Export {
            entries,
            output,
            diary,
        } => export_mode(
            &entries,
            output.as_deref(),
            diary.as_deref(),
            &config,
            &renderer,
        ),
        Command::Import {
            file,
            existing,
            skip_duplicates,
            sequential_index,
            json,
        } => {
            let args = ImportArgs {
                file,
                existing,
                skip_duplicates,
                sequential_index,
                json,
            };
            import_mode(&args, &config, &renderer)
        }
        Command::Config => config_mode(&config, &renderer),
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
