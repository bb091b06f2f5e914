//! Human-readable rendering of responses.
//!
//! All display formatting lives here: exponent notation for the
//! determinant, fixed decimals for averages and the 1-based `Day n` naming
//! of columns.
use std::fmt::Write;

use shelfgrid::{MatrixSnapshot, SummaryReport};

use crate::dispatch::Response;

/// Render `value` in normalized exponential notation with `digits` fraction
/// digits and an explicitly signed exponent, e.g. `-6.0000e+0` or
/// `1.2346e-7`.
pub fn to_exponential(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let raw = format!("{:.*e}", digits, value);
    match raw.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => raw,
    }
}

/// Label of a zero-based column index.
pub fn day_label(col: usize) -> String {
    format!("Day {}", col + 1)
}

/// Render a response as plain text for a terminal.
pub fn render_text(response: &Response, labels: &[String]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_response(&mut out, response, labels);
    out
}

fn write_response(out: &mut String, response: &Response, labels: &[String]) -> std::fmt::Result {
    match response {
        Response::Snapshot(snapshot) => write_grid(out, snapshot),
        Response::Regenerated(r) => {
            writeln!(out, "New matrix generated")?;
            write_grid(out, &r.snapshot)
        }
        Response::Swapped(r) => {
            writeln!(out, "Diagonals swapped")?;
            write_grid(out, &r.snapshot)
        }
        Response::CellUpdated(r) => {
            writeln!(out, "Cell updated")?;
            write_grid(out, &r.snapshot)
        }
        Response::RowSums(sums) => {
            for (label, value) in labels.iter().zip(sums.values.iter()) {
                writeln!(out, "{}: {}", label, value)?;
            }
            writeln!(out, "Total Books: {}", sums.values.sum())
        }
        Response::ColSums(sums) => {
            for (j, value) in sums.values.iter().enumerate() {
                writeln!(out, "{}: {}", day_label(j), value)?;
            }
            match sums.values.argmax_first() {
                Some(j) => writeln!(out, "Busiest Day: {}", day_label(j)),
                None => Ok(()),
            }
        }
        Response::RowAverages(avgs) => {
            for (label, value) in labels.iter().zip(avgs.values.iter()) {
                writeln!(out, "{}: {:.2}", label, value)?;
            }
            Ok(())
        }
        Response::ColAverages(avgs) => {
            for (j, value) in avgs.values.iter().enumerate() {
                writeln!(out, "{}: {:.2}", day_label(j), value)?;
            }
            Ok(())
        }
        Response::Determinant(det) => writeln!(out, "Determinant: {}", det.scientific),
        Response::Report(report) => write_report(out, report),
        Response::Cell(cell) => writeln!(
            out,
            "{} / {}: {}",
            labels.get(cell.row).map(String::as_str).unwrap_or("?"),
            day_label(cell.col),
            cell.value
        ),
    }
}

fn write_grid(out: &mut String, snapshot: &MatrixSnapshot) -> std::fmt::Result {
    let width = snapshot
        .labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0)
        .max("Category".len());
    write!(out, "{:<width$}", "Category", width = width)?;
    for j in 0..snapshot.size {
        write!(out, " {:>7}", day_label(j))?;
    }
    writeln!(out)?;
    for (label, row) in snapshot.labels.iter().zip(snapshot.cells.iter()) {
        write!(out, "{:<width$}", label, width = width)?;
        for value in row {
            write!(out, " {:>7}", value)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_report(out: &mut String, report: &SummaryReport) -> std::fmt::Result {
    writeln!(out, "Library Statistics Report")?;
    writeln!(out, "Total Books Borrowed: {}", report.total_count)?;
    writeln!(
        out,
        "Most Popular Category: {} ({} books)",
        report.peak_row_label,
        report.peak_row_total()
    )?;
    writeln!(
        out,
        "Busiest Day: {} ({} books)",
        day_label(report.peak_column_index),
        report.peak_column_total()
    )?;
    writeln!(
        out,
        "Determinant: {}",
        to_exponential(report.determinant, crate::dispatch::SCIENTIFIC_DIGITS)
    )?;
    writeln!(out, "Average per Day: {:.1}", report.average_per_column())?;
    writeln!(out, "Matrix Size: {}x{}", report.size, report.size)
}
