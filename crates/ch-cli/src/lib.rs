//! Calendar hours report CLI library.
//!
//! This crate provides the CLI interface around the `ch-core` pipeline.

mod cli;
mod config;
mod source;

pub mod commands;

pub use cli::{Cli, Commands, ExportFormat};
pub use config::Config;
pub use source::{JsonFileSource, SourceError, fetch_window, parse_instant};
