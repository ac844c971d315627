//! Export command: write the report as a two-sheet workbook or CSV pair.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ch_core::{DETAIL_HEADER, RawEvent, Report, ReportOptions, TOTALS_HEADER, qualifying_rows};
use rust_xlsxwriter::{Format, Workbook};

use crate::cli::ExportFormat;
use crate::config::Config;

/// Runs the export command.
pub fn run(
    events: &[RawEvent],
    options: &ReportOptions,
    config: &Config,
    output: &Path,
    format: ExportFormat,
) -> Result<()> {
    let rows = qualifying_rows(events, options);

    if rows.is_empty() {
        println!("No events found.");
        return Ok(());
    }

    let report = Report::from_rows(rows);

    match format {
        ExportFormat::Xlsx => write_xlsx(&report, config, output)?,
        ExportFormat::Csv => write_csv_pair(&report, output)?,
    }

    Ok(())
}

/// Writes a workbook with a detail sheet and a totals sheet, named from the
/// configuration.
fn write_xlsx(report: &Report, config: &Config, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let hours_format = Format::new().set_num_format("0.00");

    let detail = workbook.add_worksheet();
    detail.set_name(&config.detail_sheet)?;
    for (col, header) in DETAIL_HEADER.iter().enumerate() {
        detail.write_with_format(0, u16::try_from(col)?, *header, &header_format)?;
    }
    for (i, row) in report.rows.iter().enumerate() {
        let r = u32::try_from(i + 1)?;
        detail.write(r, 0, row.date.as_str())?;
        detail.write(r, 1, row.code.as_str())?;
        detail.write(r, 2, row.title.as_str())?;
        detail.write(r, 3, row.start_time.as_str())?;
        detail.write(r, 4, row.end_time.as_str())?;
        detail.write_number_with_format(r, 5, row.hours, &hours_format)?;
    }

    let totals = workbook.add_worksheet();
    totals.set_name(&config.totals_sheet)?;
    for (col, header) in TOTALS_HEADER.iter().enumerate() {
        totals.write_with_format(0, u16::try_from(col)?, *header, &header_format)?;
    }
    for (i, total) in report.totals.iter().enumerate() {
        let r = u32::try_from(i + 1)?;
        totals.write(r, 0, total.code.as_str())?;
        totals.write_number_with_format(r, 1, total.hours, &hours_format)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed to save workbook to {}", path.display()))?;

    tracing::info!(path = %path.display(), "wrote XLSX report");
    println!("Wrote {}", path.display());
    Ok(())
}

/// Writes `<prefix>-detail.csv` and `<prefix>-totals.csv`.
fn write_csv_pair(report: &Report, prefix: &Path) -> Result<()> {
    let detail_path = sibling(prefix, "detail");
    let totals_path = sibling(prefix, "totals");

    let mut writer = csv::Writer::from_path(&detail_path)
        .with_context(|| format!("failed to create {}", detail_path.display()))?;
    writer.write_record(DETAIL_HEADER)?;
    for row in &report.rows {
        let hours = format!("{:.2}", row.hours);
        writer.write_record([
            row.date.as_str(),
            row.code.as_str(),
            row.title.as_str(),
            row.start_time.as_str(),
            row.end_time.as_str(),
            hours.as_str(),
        ])?;
    }
    writer.flush()?;

    let mut writer = csv::Writer::from_path(&totals_path)
        .with_context(|| format!("failed to create {}", totals_path.display()))?;
    writer.write_record(TOTALS_HEADER)?;
    for total in &report.totals {
        let hours = format!("{:.2}", total.hours);
        writer.write_record([total.code.as_str(), hours.as_str()])?;
    }
    writer.flush()?;

    tracing::info!(
        detail = %detail_path.display(),
        totals = %totals_path.display(),
        "wrote CSV report"
    );
    println!("Wrote {}", detail_path.display());
    println!("Wrote {}", totals_path.display());
    Ok(())
}

/// Derives a per-sheet CSV path from the output prefix:
/// `out/march.csv` + `detail` -> `out/march-detail.csv`.
fn sibling(prefix: &Path, suffix: &str) -> PathBuf {
    let stem = prefix
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("report");
    prefix.with_file_name(format!("{stem}-{suffix}.csv"))
}
