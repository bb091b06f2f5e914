use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use shelfgrid::LibraryMatrix;

use crate::format::day_label;

/// Write the grid to a CSV or TSV file based on file extension.
///
/// The first column holds the row label, the remaining columns are headed
/// `Day 1` .. `Day N`.
pub fn write_matrix_table<P: AsRef<Path>>(matrix: &LibraryMatrix, output_path: P) -> Result<()> {
    let path = output_path.as_ref();
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("csv");
    let delimiter = match extension {
        "tsv" => '\t',
        _ => ',',
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {:?}", path))?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter as u8)
        .from_writer(BufWriter::new(file));

    let mut header = Vec::with_capacity(matrix.size() + 1);
    header.push("category".to_string());
    header.extend((0..matrix.size()).map(day_label));
    writer.write_record(&header)?;

    for (row, label) in matrix.labels().iter().enumerate() {
        let mut record = Vec::with_capacity(matrix.size() + 1);
        record.push(label.clone());
        record.extend(matrix.cells().row_slice(row).iter().map(|v| v.to_string()));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    log::info!("wrote {}x{} matrix to {:?}", matrix.size(), matrix.size(), path);
    Ok(())
}
