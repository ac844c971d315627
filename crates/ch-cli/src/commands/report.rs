//! Report command: render the detail and totals tables to stdout.

use std::fmt::Write;

use anyhow::Result;
use ch_core::{
    DETAIL_HEADER, RawEvent, Report, ReportOptions, ReportRow, TOTALS_HEADER, TotalsRow,
    qualifying_rows,
};
use chrono::Utc;
use serde::Serialize;

/// JSON report structure.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub generated_at: String,
    pub timezone: String,
    pub rows: Vec<ReportRow>,
    pub totals: Vec<TotalsRow>,
}

/// Formats the detail table with padded columns.
fn format_detail(rows: &[ReportRow]) -> String {
    let code_w = rows
        .iter()
        .map(|r| r.code.as_str().len())
        .chain([DETAIL_HEADER[1].len()])
        .max()
        .unwrap_or(0);
    let title_w = rows
        .iter()
        .map(|r| r.title.len())
        .chain([DETAIL_HEADER[2].len()])
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    writeln!(
        output,
        "{:<10}  {:<code_w$}  {:<title_w$}  {:<5}  {:<5}  {:>6}",
        DETAIL_HEADER[0],
        DETAIL_HEADER[1],
        DETAIL_HEADER[2],
        DETAIL_HEADER[3],
        DETAIL_HEADER[4],
        DETAIL_HEADER[5],
    )
    .unwrap();

    for row in rows {
        writeln!(
            output,
            "{:<10}  {:<code_w$}  {:<title_w$}  {:<5}  {:<5}  {:>6.2}",
            row.date,
            row.code.as_str(),
            row.title,
            row.start_time,
            row.end_time,
            row.hours,
        )
        .unwrap();
    }

    output
}

/// Formats the totals table, grand total last.
fn format_totals(totals: &[TotalsRow]) -> String {
    let code_w = totals
        .iter()
        .map(|t| t.code.len())
        .chain([TOTALS_HEADER[0].len()])
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    writeln!(
        output,
        "{:<code_w$}  {:>11}",
        TOTALS_HEADER[0], TOTALS_HEADER[1]
    )
    .unwrap();

    for total in totals {
        writeln!(output, "{:<code_w$}  {:>11.2}", total.code, total.hours).unwrap();
    }

    output
}

/// Formats the human-readable report output: both tables.
pub fn format_report(report: &Report) -> String {
    let mut output = format_detail(&report.rows);
    output.push('\n');
    output.push_str(&format_totals(&report.totals));
    output
}

/// Formats report data as JSON.
pub fn format_report_json(report: &Report, timezone: &str) -> Result<String> {
    let json = JsonReport {
        generated_at: Utc::now().to_rfc3339(),
        timezone: timezone.to_string(),
        rows: report.rows.clone(),
        totals: report.totals.clone(),
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

/// Runs the report command.
///
/// Zero qualifying events short-circuits before sorting and aggregation,
/// per the pipeline contract.
pub fn run(events: &[RawEvent], options: &ReportOptions, json: bool) -> Result<()> {
    let rows = qualifying_rows(events, options);

    if rows.is_empty() {
        if json {
            let empty = JsonReport {
                generated_at: Utc::now().to_rfc3339(),
                timezone: options.timezone.name().to_string(),
                rows: vec![],
                totals: vec![],
            };
            println!("{}", serde_json::to_string_pretty(&empty)?);
        } else {
            println!("No events found.");
        }
        return Ok(());
    }

    let report = Report::from_rows(rows);

    if json {
        let output = format_report_json(&report, options.timezone.name())?;
        println!("{output}");
    } else {
        let output = format_report(&report);
        print!("{output}");
    }

    Ok(())
}
