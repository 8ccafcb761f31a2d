//! Output formatting: delimited CSV and human-readable tables.

use crate::error::CsvError;
use crate::record::{CsvConfig, RecordSet};

/// Serialize a record set back to delimited text.
///
/// The header, when present, is written first. Fields are quoted only when
/// they require it (delimiter, quote character, or line break in the
/// value). Every record ends with a single line break; there is no
/// trailing blank record.
pub fn write_delimited(set: &RecordSet, config: &CsvConfig) -> Result<String, CsvError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote(config.quote)
        .flexible(true)
        .from_writer(Vec::new());

    if let Some(header) = &set.header {
        writer.write_record(header)?;
    }
    for row in &set.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    let buf = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Render a record set as an aligned table.
///
/// Column widths are computed per index over `0..W` where `W` is the field
/// count of the first displayed record; a row contributes to a width only
/// where it actually has a cell. Cells are left-justified to their column
/// width and joined with `" | "`. Cells at indices beyond `W` render
/// unpadded. A displayed header is followed by a separator line of dashes
/// joined with `"-|-"`. An empty record set renders as no output at all.
pub fn write_readable(set: &RecordSet) -> String {
    let mut display: Vec<&[String]> = Vec::new();
    if let Some(header) = &set.header {
        display.push(header);
    }
    for row in &set.rows {
        display.push(row);
    }
    if display.is_empty() {
        return String::new();
    }

    let mut widths = vec![0usize; display[0].len()];
    for record in &display {
        for (i, width) in widths.iter_mut().enumerate() {
            if let Some(cell) = record.get(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    for (record_idx, record) in display.iter().enumerate() {
        let cells: Vec<String> = record
            .iter()
            .enumerate()
            .map(|(i, cell)| match widths.get(i) {
                Some(&width) => format!("{cell:<width$}"),
                None => cell.clone(),
            })
            .collect();
        out.push_str(&cells.join(" | "));
        out.push('\n');

        if record_idx == 0 && set.header.is_some() {
            let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            out.push_str(&dashes.join("-|-"));
            out.push('\n');
        }
    }
    out
}
