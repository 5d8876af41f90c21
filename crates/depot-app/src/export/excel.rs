//! Excel export of one productivity summary

use chrono::NaiveDate;
use depot_domain::model::MetricValue;
use depot_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

use crate::app::Computation;

/// Export a computed summary to an Excel file
pub fn export_summary_to_excel(
    computation: &Computation,
    entry_date: NaiveDate,
    output_path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, computation, entry_date)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    computation: &Computation,
    entry_date: NaiveDate,
) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let rate_format = Format::new().set_num_format("0.00");

    sheet
        .write_string_with_format(0, 0, "Depot Driver Productivity Summary", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let input = &computation.input;
    let details = [
        ("Depot:", input.depot.name().to_string()),
        ("Mode:", input.mode.label().to_string()),
        ("Entry Date:", entry_date.format("%Y-%m-%d").to_string()),
    ];
    for (offset, (label, value)) in details.iter().enumerate() {
        let row = 2 + offset as u32;
        sheet
            .write_string(row, 0, *label)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, value)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    // Key metrics
    sheet
        .write_string_with_format(6, 0, "Metric", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string_with_format(6, 1, "Value", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let mut row = 7;
    for metric in computation.summary.metrics() {
        sheet
            .write_string(row, 0, metric.label)
            .map_err(|e| Error::Excel(e.to_string()))?;
        let written = match metric.value {
            MetricValue::Rate(v) => sheet.write_number_with_format(row, 1, v, &rate_format),
            other => sheet.write_number(row, 1, other.as_f64()),
        };
        written.map_err(|e| Error::Excel(e.to_string()))?;
        row += 1;
    }

    // Reason checks
    row += 1;
    let headers = ["Reason Check", "Entered", "From Reasons", "Difference"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(row, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for check in &computation.reason_checks {
        row += 1;
        sheet
            .write_string(row, 0, check.label)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 1, check.entered)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 2, check.from_reasons as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 3, check.difference)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .set_column_width(0, 24)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 14)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}
