//! Raw calendar events and the source seam.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A raw calendar event as supplied by the calendar collaborator.
///
/// The pipeline treats this record as read-only input: recurring events are
/// expected to already be resolved into discrete start/end instants upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvent {
    /// The event title, verbatim from the calendar.
    pub title: String,
    /// When the event starts.
    pub start: DateTime<Utc>,
    /// When the event ends.
    pub end: DateTime<Utc>,
    /// Whether this is an all-day event. All-day events have no usable
    /// duration and are excluded from reports.
    #[serde(default)]
    pub all_day: bool,
}

/// A supplier of raw events for a reporting window.
///
/// This trait is the boundary to the external calendar store. The core never
/// fetches anything itself; implementations live with the caller (e.g., a
/// JSON file reader in the CLI, or a calendar API client).
pub trait EventSource {
    /// The error type for a failed fetch. Fetch failures are fatal for the
    /// invocation; the pipeline does not retry or partially process.
    type Error;

    /// Returns events whose start instant falls within `[start, end)`.
    fn fetch_events(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<RawEvent>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn event_deserializes_without_all_day_flag() {
        let json = r##"{
            "title": "#TEST1 Morning standup",
            "start": "2025-03-03T09:00:00Z",
            "end": "2025-03-03T09:30:00Z"
        }"##;
        let event: RawEvent = serde_json::from_str(json).unwrap();
        assert!(!event.all_day);
        assert_eq!(event.start, Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap());
    }

    #[test]
    fn event_serialization_roundtrip() {
        let event = RawEvent {
            title: "#TEST1 Planning".to_string(),
            start: Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 3, 3, 10, 30, 0).unwrap(),
            all_day: false,
        };

        let json = serde_json::to_string(&event).unwrap();
        let parsed: RawEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.title, event.title);
        assert_eq!(parsed.start, event.start);
        assert_eq!(parsed.end, event.end);
    }
}
