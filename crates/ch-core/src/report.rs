//! Pipeline entry point: events in, two report tables out.

use chrono_tz::Tz;

use crate::aggregate::{TotalsRow, aggregate};
use crate::code::CodeExtractor;
use crate::event::RawEvent;
use crate::filter::qualifies;
use crate::row::{ReportRow, build_row, sort_rows};

/// Column headers of the detail table.
pub const DETAIL_HEADER: [&str; 6] = ["Date", "Code", "Title", "Start", "End", "Hours"];

/// Column headers of the totals table.
pub const TOTALS_HEADER: [&str; 2] = ["Code", "Total Hours"];

/// Injected configuration for a report invocation.
///
/// The timezone and code pattern apply process-wide for the invocation; the
/// pipeline keeps no state of its own between calls.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Timezone used to render dates and times of day.
    pub timezone: Tz,
    /// Title pattern the code is extracted with.
    pub extractor: CodeExtractor,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::UTC,
            extractor: CodeExtractor::default(),
        }
    }
}

/// The assembled report: ordered detail rows plus totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Detail rows, ordered by (code, date, start time).
    pub rows: Vec<ReportRow>,
    /// Per-code totals in ascending code order, grand total last.
    pub totals: Vec<TotalsRow>,
}

impl Report {
    /// Sorts the given rows and aggregates them into a full report.
    pub fn from_rows(mut rows: Vec<ReportRow>) -> Self {
        sort_rows(&mut rows);
        let totals = aggregate(&rows);
        Self { rows, totals }
    }
}

/// Filters and normalizes raw events into unsorted report rows.
///
/// Exposed separately from [`build_report`] so callers can short-circuit on
/// zero qualifying events before sorting and aggregation run.
pub fn qualifying_rows(events: &[RawEvent], options: &ReportOptions) -> Vec<ReportRow> {
    events
        .iter()
        .filter(|event| qualifies(event, &options.extractor))
        .filter_map(|event| build_row(event, options.timezone, &options.extractor))
        .collect()
}

/// Runs the full pipeline: filter, normalize, sort, aggregate.
///
/// Pure over its inputs; invoking it twice on the same event list yields
/// identical reports.
pub fn build_report(events: &[RawEvent], options: &ReportOptions) -> Report {
    Report::from_rows(qualifying_rows(events, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::GRAND_TOTAL_LABEL;
    use chrono::{DateTime, TimeZone, Utc};

    fn timed(title: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> RawEvent {
        RawEvent {
            title: title.to_string(),
            start,
            end,
            all_day: false,
        }
    }

    fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, hour, minute, 0).unwrap()
    }

    fn scenario_events() -> Vec<RawEvent> {
        vec![
            timed("#TEST2 Client call", at(4, 13, 0), at(4, 15, 0)),
            timed("#TEST1 Morning standup", at(3, 9, 0), at(3, 9, 30)),
            timed("#TEST1 Afternoon review", at(3, 14, 0), at(3, 15, 0)),
            RawEvent {
                title: "#IGNORE".to_string(),
                start: at(3, 0, 0),
                end: at(4, 0, 0),
                all_day: true,
            },
            timed("#ZERO x", at(3, 11, 0), at(3, 11, 0)),
        ]
    }

    #[test]
    #[allow(clippy::float_cmp, reason = "rounded values are exact doubles")]
    fn end_to_end_scenario() {
        let report = build_report(&scenario_events(), &ReportOptions::default());

        // The all-day and zero-duration events are filtered out
        assert_eq!(report.rows.len(), 3);

        let titles: Vec<&str> = report.rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "#TEST1 Morning standup",
                "#TEST1 Afternoon review",
                "#TEST2 Client call",
            ]
        );

        let totals: Vec<(&str, f64)> = report
            .totals
            .iter()
            .map(|t| (t.code.as_str(), t.hours))
            .collect();
        assert_eq!(
            totals,
            vec![("TEST1", 1.5), ("TEST2", 2.0), (GRAND_TOTAL_LABEL, 3.5)]
        );
    }

    #[test]
    fn pipeline_is_idempotent() {
        let events = scenario_events();
        let options = ReportOptions::default();

        let first = build_report(&events, &options);
        let second = build_report(&events, &options);

        assert_eq!(first, second);
    }

    #[test]
    fn no_qualifying_events_yields_no_rows() {
        let events = vec![timed("no code here", at(3, 9, 0), at(3, 10, 0))];

        let rows = qualifying_rows(&events, &ReportOptions::default());

        assert!(rows.is_empty());
    }

    #[test]
    fn headers_match_the_rendered_columns() {
        assert_eq!(
            DETAIL_HEADER,
            ["Date", "Code", "Title", "Start", "End", "Hours"]
        );
        assert_eq!(TOTALS_HEADER, ["Code", "Total Hours"]);
    }
}
