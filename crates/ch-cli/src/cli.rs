//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Calendar hours reporter.
///
/// Reads project-coded calendar events (titles starting with `#CODE`),
/// aggregates hours per code, and renders a two-sheet report.
#[derive(Debug, Parser)]
#[command(name = "ch", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the hours report to stdout.
    Report {
        /// Path to the JSON events file.
        #[arg(long)]
        input: PathBuf,

        /// Only include events starting at or after this instant
        /// (RFC 3339, or a plain date interpreted in the report timezone).
        #[arg(long)]
        start: Option<String>,

        /// Only include events starting before this instant.
        #[arg(long)]
        end: Option<String>,

        /// Output as JSON instead of tables.
        #[arg(long)]
        json: bool,
    },

    /// Write the report as a spreadsheet file.
    Export {
        /// Path to the JSON events file.
        #[arg(long)]
        input: PathBuf,

        /// Only include events starting at or after this instant.
        #[arg(long)]
        start: Option<String>,

        /// Only include events starting before this instant.
        #[arg(long)]
        end: Option<String>,

        /// Output path. For CSV this is a prefix; `<prefix>-detail.csv` and
        /// `<prefix>-totals.csv` are written next to each other.
        #[arg(long)]
        output: PathBuf,

        /// Spreadsheet format.
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,
    },
}

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Single workbook with a detail sheet and a totals sheet.
    Xlsx,
    /// Two CSV files, one per sheet.
    Csv,
}
