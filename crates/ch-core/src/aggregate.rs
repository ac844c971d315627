//! Per-code hour totals.

use std::collections::HashMap;

use serde::Serialize;

use crate::duration::round_hours;
use crate::row::ReportRow;

/// Label of the final totals row.
pub const GRAND_TOTAL_LABEL: &str = "GRAND TOTAL";

/// One aggregate line of the totals table.
///
/// `code` is either a project code or [`GRAND_TOTAL_LABEL`], which is always
/// the last row emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalsRow {
    pub code: String,
    pub hours: f64,
}

/// Groups rows by code and produces per-code totals plus a grand total.
///
/// Per-code totals sum the already-rounded row hours and round the sum again;
/// collapsing this into a single rounding step would change emitted totals
/// for inputs with many small fractional entries. The grand total runs
/// its own accumulator over the row hours, independent of the per-group
/// sums, and is rounded once at the end.
///
/// Group keys are sorted lexicographically before emission; output order
/// never depends on map iteration order. An empty input yields no group rows
/// and a 0.00 grand total (callers short-circuit before that point, see the
/// CLI report command).
pub fn aggregate(rows: &[ReportRow]) -> Vec<TotalsRow> {
    let mut by_code: HashMap<&str, f64> = HashMap::new();
    let mut grand_total = 0.0;

    for row in rows {
        *by_code.entry(row.code.as_str()).or_insert(0.0) += row.hours;
        grand_total += row.hours;
    }

    let mut codes: Vec<&str> = by_code.keys().copied().collect();
    codes.sort_unstable();

    let mut totals: Vec<TotalsRow> = codes
        .into_iter()
        .map(|code| TotalsRow {
            code: code.to_string(),
            hours: round_hours(by_code[code]),
        })
        .collect();

    totals.push(TotalsRow {
        code: GRAND_TOTAL_LABEL.to_string(),
        hours: round_hours(grand_total),
    });

    totals
}
