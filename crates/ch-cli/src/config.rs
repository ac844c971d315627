//! Configuration loading and management.

use std::path::{Path, PathBuf};

use anyhow::Context;
use ch_core::{CodeExtractor, DEFAULT_CODE_PATTERN, ReportOptions};
use chrono_tz::Tz;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// IANA timezone for dates and times in the report. Defaults to the
    /// host timezone when unset.
    pub timezone: Option<String>,

    /// Regex the project code is extracted with; group 1 is the code.
    pub code_pattern: String,

    /// Name of the detail sheet in exported workbooks.
    pub detail_sheet: String,

    /// Name of the totals sheet in exported workbooks.
    pub totals_sheet: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: None,
            code_pattern: DEFAULT_CODE_PATTERN.to_string(),
            detail_sheet: "Detail".to_string(),
            totals_sheet: "Totals".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (CH_*)
        figment = figment.merge(Env::prefixed("CH_"));

        figment.extract()
    }

    /// Resolves the report timezone: the configured zone, or the host zone.
    pub fn resolve_timezone(&self) -> anyhow::Result<Tz> {
        let name = match &self.timezone {
            Some(name) => name.clone(),
            None => iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string()),
        };
        name.parse()
            .map_err(|_| anyhow::anyhow!("unknown timezone: {name}"))
    }

    /// Builds the pipeline options from this configuration.
    pub fn report_options(&self) -> anyhow::Result<ReportOptions> {
        let extractor = CodeExtractor::new(&self.code_pattern)
            .context("invalid code_pattern in configuration")?;
        Ok(ReportOptions {
            timezone: self.resolve_timezone()?,
            extractor,
        })
    }
}

/// Returns the platform-specific config directory for ch.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ch"))
}
