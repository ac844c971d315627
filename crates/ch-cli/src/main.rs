use std::path::Path;

use anyhow::{Context, Result};
use ch_cli::commands::{export, report};
use ch_cli::{Cli, Commands, Config, JsonFileSource, fetch_window};
use ch_core::{EventSource, RawEvent, ReportOptions};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Load config and build pipeline options from it.
fn load_options(config_path: Option<&Path>) -> Result<(Config, ReportOptions)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let options = config.report_options()?;
    Ok((config, options))
}

/// Fetch raw events for the requested window.
fn fetch_events(
    input: &Path,
    start: Option<&str>,
    end: Option<&str>,
    options: &ReportOptions,
) -> Result<Vec<RawEvent>> {
    let (start, end) = fetch_window(start, end, options.timezone)?;
    let events = JsonFileSource::new(input)
        .fetch_events(start, end)
        .context("failed to fetch events")?;
    tracing::debug!(count = events.len(), "fetched events");
    Ok(events)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match &cli.command {
        Some(Commands::Report {
            input,
            start,
            end,
            json,
        }) => {
            let (_config, options) = load_options(cli.config.as_deref())?;
            let events = fetch_events(input, start.as_deref(), end.as_deref(), &options)?;
            report::run(&events, &options, *json)?;
        }
        Some(Commands::Export {
            input,
            start,
            end,
            output,
            format,
        }) => {
            let (config, options) = load_options(cli.config.as_deref())?;
            let events = fetch_events(input, start.as_deref(), end.as_deref(), &options)?;
            export::run(&events, &options, &config, output, *format)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
