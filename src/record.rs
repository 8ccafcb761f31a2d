//! Record set data model and parser.
//!
//! A `RecordSet` is the parsed form of one delimited input: an optional
//! header (the first record, when the caller designates it as such) and an
//! ordered sequence of rows. Rows are not required to share a length with
//! the header or with each other; short rows are handled per field at use
//! time by treating missing fields as empty text.

use crate::error::CsvError;

/// Delimiter and quote character for parsing and serializing.
///
/// Passed explicitly into parse/format calls; there is no global tool
/// state. Quoting follows standard CSV rules: fields containing the
/// delimiter, the quote character, or line breaks are quoted, and a
/// doubled quote inside a quoted field is a literal quote.
#[derive(Debug, Clone, Copy)]
pub struct CsvConfig {
    pub delimiter: u8,
    pub quote: u8,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
        }
    }
}

/// An optional header plus an ordered sequence of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    /// Field names from the first parsed record, if the caller asked for
    /// one. Uniqueness is not enforced; name lookup returns the first match.
    pub header: Option<Vec<String>>,
    /// Data rows in input order, excluding the header.
    pub rows: Vec<Vec<String>>,
}

impl RecordSet {
    /// Parse raw delimited text into a record set.
    ///
    /// With `has_header` set and at least one record present, the first
    /// record becomes the header and is removed from the rows. Empty input
    /// yields an empty record set with no header regardless of the flag.
    /// Malformed input is a fatal [`CsvError::Parse`]; there is no
    /// recovery mode.
    pub fn parse(text: &str, config: &CsvConfig, has_header: bool) -> Result<Self, CsvError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(config.delimiter)
            .quote(config.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut rows: Vec<Vec<String>> = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        if has_header && !rows.is_empty() {
            let header = rows.remove(0);
            Ok(Self {
                header: Some(header),
                rows,
            })
        } else {
            Ok(Self { header: None, rows })
        }
    }

    /// True when there is nothing to display: no header and no rows.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.rows.is_empty()
    }
}
