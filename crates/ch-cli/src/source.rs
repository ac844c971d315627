//! JSON file event source.
//!
//! Stands in for the external calendar store: a JSON array of raw events on
//! disk, windowed by start instant at fetch time.

use std::path::PathBuf;

use ch_core::{EventSource, RawEvent};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use thiserror::Error;

/// Errors fetching events from a JSON file.
///
/// Any of these is fatal for the invocation; there is no retry and no
/// partial processing.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read events file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse events file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads raw events from a JSON array file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EventSource for JsonFileSource {
    type Error = SourceError;

    fn fetch_events(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<RawEvent>, SourceError> {
        let data = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;

        let events: Vec<RawEvent> =
            serde_json::from_str(&data).map_err(|source| SourceError::Parse {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(count = events.len(), path = %self.path.display(), "loaded events");

        Ok(events
            .into_iter()
            .filter(|event| event.start >= start && event.start < end)
            .collect())
    }
}

/// Parses a window bound: RFC 3339, or a plain `YYYY-MM-DD` interpreted as
/// midnight in the report timezone.
pub fn parse_instant(s: &str, timezone: Tz) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = s.parse::<NaiveDate>() {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .and_then(|dt| dt.and_local_timezone(timezone).earliest());
        if let Some(dt) = midnight {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    anyhow::bail!("invalid instant: {s}. Use RFC 3339 (2025-03-03T09:00:00Z) or a date (2025-03-03)")
}

/// Resolves optional CLI window bounds into a concrete fetch window.
pub fn fetch_window(
    start: Option<&str>,
    end: Option<&str>,
    timezone: Tz,
) -> anyhow::Result<(DateTime<Utc>, DateTime<Utc>)> {
    let start = match start {
        Some(s) => parse_instant(s, timezone)?,
        None => DateTime::<Utc>::MIN_UTC,
    };
    let end = match end {
        Some(s) => parse_instant(s, timezone)?,
        None => DateTime::<Utc>::MAX_UTC,
    };
    Ok((start, end))
}
