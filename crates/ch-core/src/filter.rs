//! Admission rules for raw events.

use crate::code::CodeExtractor;
use crate::event::RawEvent;

/// Decides whether a raw event qualifies for reporting.
///
/// An event qualifies iff its title carries a project code, it is not an
/// all-day event, and its duration is strictly positive. Filtering is total:
/// rejections are logged at debug level and never produce an error.
pub fn qualifies(event: &RawEvent, extractor: &CodeExtractor) -> bool {
    if extractor.extract(&event.title).is_none() {
        tracing::debug!(title = %event.title, "skipping event without project code");
        return false;
    }

    if event.all_day {
        tracing::debug!(title = %event.title, "skipping all-day event");
        return false;
    }

    if event.end <= event.start {
        tracing::debug!(title = %event.title, "skipping event with non-positive duration");
        return false;
    }

    true
}
