//! Duration computation and hour rounding.

use chrono::{DateTime, Utc};

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Rounds an hour count to 2 decimal places.
///
/// Scales by 100, rounds half away from zero to the nearest integer, scales
/// back. This is the single rounding convention for the whole pipeline: it
/// applies per row and again at every aggregation step.
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// Converts a start/end instant pair into a rounded hour count.
#[allow(clippy::cast_precision_loss)]
pub fn duration_hours(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    round_hours((end - start).num_milliseconds() as f64 / MS_PER_HOUR)
}
