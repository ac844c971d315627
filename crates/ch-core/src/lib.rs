//! Core domain logic for the calendar hours tracker.
//!
//! This crate contains the event-to-report pipeline:
//! - Code extraction: pulling project codes out of event titles
//! - Filtering: admission rules for raw calendar events
//! - Row building: normalizing events into report rows
//! - Aggregation: per-code totals with a grand total
//!
//! The pipeline is pure and synchronous: all inputs are passed in, all
//! outputs are returned, and nothing is shared between invocations.

mod aggregate;
mod duration;
mod filter;
mod row;

pub mod code;
pub mod event;
pub mod report;
pub mod types;

pub use aggregate::{GRAND_TOTAL_LABEL, TotalsRow, aggregate};
pub use code::{CodeExtractor, DEFAULT_CODE_PATTERN, PatternError};
pub use duration::{duration_hours, round_hours};
pub use event::{EventSource, RawEvent};
pub use filter::qualifies;
pub use report::{
    DETAIL_HEADER, Report, ReportOptions, TOTALS_HEADER, build_report, qualifying_rows,
};
pub use row::{ReportRow, build_row, sort_rows};
pub use types::{ProjectCode, ValidationError};
