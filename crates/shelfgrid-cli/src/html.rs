//! Standalone HTML rendering of the summary report.
use std::path::Path;

use anyhow::{Context, Result};
use maud::{html, Markup, DOCTYPE};

use shelfgrid::SummaryReport;

use crate::dispatch::SCIENTIFIC_DIGITS;
use crate::format::{day_label, to_exponential};

pub fn render_report(report: &SummaryReport, labels: &[String]) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "Library Statistics Report" }
                style {
                    "table { border-collapse: collapse; }
                     td, th { padding: 4px 8px; border: 1px solid #dee2e6; text-align: right; }
                     th.label, td.label { text-align: left; }
                     td.peak { background-color: #fff3cd; }"
                }
            }
            body {
                h1 { "Library Statistics Report" }
                ul {
                    li { strong { "Total Books Borrowed: " } (report.total_count) }
                    li {
                        strong { "Most Popular Category: " }
                        (report.peak_row_label) " (" (report.peak_row_total()) " books)"
                    }
                    li {
                        strong { "Busiest Day: " }
                        (day_label(report.peak_column_index))
                        " (" (report.peak_column_total()) " books)"
                    }
                    li {
                        strong { "Determinant: " }
                        (to_exponential(report.determinant, SCIENTIFIC_DIGITS))
                    }
                    li {
                        strong { "Average per Day: " }
                        (format!("{:.1}", report.average_per_column()))
                    }
                    li { strong { "Matrix Size: " } (report.size) "x" (report.size) }
                }
                table {
                    thead {
                        tr {
                            th class="label" { "Category" }
                            @for j in 0..report.size {
                                th { (day_label(j)) }
                            }
                            th { "Total" }
                            th { "Average" }
                        }
                    }
                    tbody {
                        @for (i, row) in report.cells.iter().enumerate() {
                            tr {
                                td class="label" {
                                    (labels.get(i).map(String::as_str).unwrap_or(""))
                                }
                                @for (j, value) in row.iter().enumerate() {
                                    @if j == report.peak_column_index {
                                        td class="peak" { (value) }
                                    } @else {
                                        td { (value) }
                                    }
                                }
                                td { (report.row_sums[i]) }
                                td { (format!("{:.2}", report.row_averages[i])) }
                            }
                        }
                        tr {
                            td class="label" { strong { "Total" } }
                            @for value in report.col_sums.iter() {
                                td { (value) }
                            }
                            td { (report.total_count) }
                            td {}
                        }
                        tr {
                            td class="label" { strong { "Average" } }
                            @for value in report.col_averages.iter() {
                                td { (format!("{:.2}", value)) }
                            }
                            td {}
                            td {}
                        }
                    }
                }
            }
        }
    }
}

pub fn write_report<P: AsRef<Path>>(
    report: &SummaryReport,
    labels: &[String],
    path: P,
) -> Result<()> {
    let markup = render_report(report, labels);
    std::fs::write(&path, markup.into_string())
        .with_context(|| format!("Failed to write report: {}", path.as_ref().display()))?;
    log::info!("wrote HTML report to {}", path.as_ref().display());
    Ok(())
}
