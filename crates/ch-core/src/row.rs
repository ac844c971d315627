//! Report row construction and ordering.

use chrono_tz::Tz;
use serde::Serialize;

use crate::code::CodeExtractor;
use crate::duration::duration_hours;
use crate::event::RawEvent;
use crate::types::ProjectCode;

/// One line item of the detail table, derived from a qualifying event.
///
/// Dates and times are pre-formatted strings in the configured timezone so
/// the renderer downstream never needs timezone logic, and so ordering is a
/// plain ordinal string comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// Calendar date of the start instant, `YYYY-MM-DD`.
    pub date: String,
    /// Project code from the title.
    pub code: ProjectCode,
    /// Original event title, unmodified.
    pub title: String,
    /// Start time of day, `HH:mm`.
    pub start_time: String,
    /// End time of day, `HH:mm`.
    pub end_time: String,
    /// Event duration in hours, rounded to 2 decimals. Always positive.
    pub hours: f64,
}

/// Normalizes an event into a report row.
///
/// Returns `None` only for titles the extractor cannot produce a code from;
/// events that passed [`crate::filter::qualifies`] always yield a row.
pub fn build_row(event: &RawEvent, timezone: Tz, extractor: &CodeExtractor) -> Option<ReportRow> {
    let code = ProjectCode::new(extractor.extract(&event.title)?).ok()?;

    let start = event.start.with_timezone(&timezone);
    let end = event.end.with_timezone(&timezone);

    Some(ReportRow {
        date: start.format("%Y-%m-%d").to_string(),
        code,
        title: event.title.clone(),
        start_time: start.format("%H:%M").to_string(),
        end_time: end.format("%H:%M").to_string(),
        hours: duration_hours(event.start, event.end),
    })
}

/// Orders rows by (code, date, start time), all ascending ordinal string
/// comparisons.
///
/// Codes group a project's work together, dates order it chronologically,
/// and start times order same-day entries. The sort is stable, so rows equal
/// on all three keys keep their input order.
pub fn sort_rows(rows: &mut [ReportRow]) {
    rows.sort_by(|a, b| {
        a.code
            .as_str()
            .cmp(b.code.as_str())
            .then_with(|| a.date.cmp(&b.date))
            .then_with(|| a.start_time.cmp(&b.start_time))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_row(code: &str, date: &str, start_time: &str) -> ReportRow {
        ReportRow {
            date: date.to_string(),
            code: ProjectCode::new(code).unwrap(),
            title: format!("#{code} work"),
            start_time: start_time.to_string(),
            end_time: "17:00".to_string(),
            hours: 1.0,
        }
    }

    fn keys(rows: &[ReportRow]) -> Vec<(&str, &str, &str)> {
        rows.iter()
            .map(|r| (r.code.as_str(), r.date.as_str(), r.start_time.as_str()))
            .collect()
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "rounded values are exact doubles")]
    fn builds_row_in_configured_timezone() {
        let event = RawEvent {
            title: "#TEST1 Afternoon review".to_string(),
            start: Utc.with_ymd_and_hms(2025, 3, 3, 14, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 3, 3, 15, 30, 0).unwrap(),
            all_day: false,
        };

        let row = build_row(&event, chrono_tz::Europe::Berlin, &CodeExtractor::default()).unwrap();

        assert_eq!(row.date, "2025-03-03");
        assert_eq!(row.code.as_str(), "TEST1");
        assert_eq!(row.title, "#TEST1 Afternoon review");
        // Berlin is UTC+1 in March (before DST)
        assert_eq!(row.start_time, "15:00");
        assert_eq!(row.end_time, "16:30");
        assert_eq!(row.hours, 1.5);
    }

    #[test]
    fn date_rolls_over_across_timezone_boundary() {
        let event = RawEvent {
            title: "#LATE night work".to_string(),
            start: Utc.with_ymd_and_hms(2025, 3, 3, 23, 30, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 3, 4, 0, 30, 0).unwrap(),
            all_day: false,
        };

        let row = build_row(&event, chrono_tz::Europe::Berlin, &CodeExtractor::default()).unwrap();

        // 23:30 UTC is 00:30 next day in Berlin
        assert_eq!(row.date, "2025-03-04");
        assert_eq!(row.start_time, "00:30");
    }

    #[test]
    fn uncoded_title_builds_no_row() {
        let event = RawEvent {
            title: "lunch".to_string(),
            start: Utc.with_ymd_and_hms(2025, 3, 3, 12, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 3, 3, 13, 0, 0).unwrap(),
            all_day: false,
        };

        assert!(build_row(&event, chrono_tz::UTC, &CodeExtractor::default()).is_none());
    }

    #[test]
    fn sorts_by_code_first() {
        let mut rows = vec![
            make_row("B", "2025-03-03", "09:00"),
            make_row("A", "2025-03-03", "09:00"),
            make_row("B", "2025-03-03", "08:00"),
        ];
        sort_rows(&mut rows);
        assert_eq!(
            keys(&rows),
            vec![
                ("A", "2025-03-03", "09:00"),
                ("B", "2025-03-03", "08:00"),
                ("B", "2025-03-03", "09:00"),
            ]
        );
    }

    #[test]
    fn sorts_by_date_within_code() {
        let mut rows = vec![
            make_row("A", "2025-03-04", "08:00"),
            make_row("A", "2025-03-03", "15:00"),
        ];
        sort_rows(&mut rows);
        assert_eq!(
            keys(&rows),
            vec![("A", "2025-03-03", "15:00"), ("A", "2025-03-04", "08:00")]
        );
    }

    #[test]
    fn sorts_by_start_time_within_day() {
        let mut rows = vec![
            make_row("A", "2025-03-03", "14:00"),
            make_row("A", "2025-03-03", "09:00"),
            make_row("A", "2025-03-03", "11:30"),
        ];
        sort_rows(&mut rows);
        assert_eq!(
            keys(&rows),
            vec![
                ("A", "2025-03-03", "09:00"),
                ("A", "2025-03-03", "11:30"),
                ("A", "2025-03-03", "14:00"),
            ]
        );
    }

    #[test]
    fn fully_equal_keys_keep_input_order() {
        let mut first = make_row("A", "2025-03-03", "09:00");
        first.title = "#A first".to_string();
        let mut second = make_row("A", "2025-03-03", "09:00");
        second.title = "#A second".to_string();

        let mut rows = vec![first, second];
        sort_rows(&mut rows);

        assert_eq!(rows[0].title, "#A first");
        assert_eq!(rows[1].title, "#A second");
    }
}
