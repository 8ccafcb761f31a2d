//! The four csvtool operations and the execute pipeline.
//!
//! Every operation is a single pure pass: read -> resolve -> transform ->
//! format. Nothing is stateful across invocations, and a failing
//! resolution produces no output at all rather than a truncated result.

use std::fs;
use std::io::{self, Read};

use regex::Regex;

use crate::column::ColumnRef;
use crate::error::CsvError;
use crate::format::{write_delimited, write_readable};
use crate::record::{CsvConfig, RecordSet};

/// A single csvtool operation.
#[derive(Debug, Clone)]
pub enum Op {
    /// Render the record set as an aligned table.
    Readable,
    /// Project rows onto the given columns, in the given order.
    Select { columns: Vec<ColumnRef> },
    /// Keep rows whose field in one column matches a regex.
    Search { column: ColumnRef, pattern: String },
    /// Overwrite exact value matches in one column.
    Replace {
        column: ColumnRef,
        old: String,
        new: String,
    },
}

/// Read an input source fully into memory. `-` designates standard input.
pub fn read_source(path: &str) -> Result<String, CsvError> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

/// Parse input text, apply one operation, and format the result.
///
/// `no_header` treats the first record as data rather than a header; for
/// `Readable` it additionally suppresses header rendering if a header was
/// parsed anyway.
pub fn execute(
    input: &str,
    op: &Op,
    config: &CsvConfig,
    no_header: bool,
) -> Result<String, CsvError> {
    let set = RecordSet::parse(input, config, !no_header)?;

    match op {
        Op::Readable => Ok(readable(&set, no_header)),
        Op::Select { columns } => write_delimited(&select(&set, columns)?, config),
        Op::Search { column, pattern } => {
            write_delimited(&search(&set, column, pattern)?, config)
        }
        Op::Replace { column, old, new } => {
            write_delimited(&replace(set, column, old, new)?, config)
        }
    }
}

/// Render the record set as an aligned table.
///
/// With `no_header` set, a parsed header is simply omitted from the
/// output; it is never re-inserted as a data row.
pub fn readable(set: &RecordSet, no_header: bool) -> String {
    if no_header && set.header.is_some() {
        let stripped = RecordSet {
            header: None,
            rows: set.rows.clone(),
        };
        write_readable(&stripped)
    } else {
        write_readable(set)
    }
}

/// Project the record set onto the given columns.
///
/// Each reference resolves independently, so numeric and name references
/// mix freely. A header cell whose selected index is out of bounds is
/// skipped; a row field whose selected index is out of bounds becomes an
/// empty string, so every output row has one field per requested column.
pub fn select(set: &RecordSet, columns: &[ColumnRef]) -> Result<RecordSet, CsvError> {
    let indices = resolve_all(columns, set)?;

    let header = set
        .header
        .as_ref()
        .map(|h| indices.iter().filter_map(|&i| h.get(i).cloned()).collect());

    let rows = set
        .rows
        .iter()
        .map(|row| {
            indices
                .iter()
                .map(|&i| row.get(i).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    Ok(RecordSet { header, rows })
}

/// Keep rows whose field in `column` matches `pattern`.
///
/// Matching is unanchored substring regex search on the field text. Rows
/// too short to have the field are dropped. Relative order of surviving
/// rows is preserved.
pub fn search(set: &RecordSet, column: &ColumnRef, pattern: &str) -> Result<RecordSet, CsvError> {
    let index = column.resolve(set.header.as_deref())?;
    let regex = Regex::new(pattern)?;

    let rows = set
        .rows
        .iter()
        .filter(|row| row.get(index).is_some_and(|field| regex.is_match(field)))
        .cloned()
        .collect();

    Ok(RecordSet {
        header: set.header.clone(),
        rows,
    })
}

/// Overwrite the field in `column` with `new` for every row where it is
/// exactly equal to `old`.
///
/// Full string equality, not regex. Rows without that field index are left
/// unchanged, and every row is emitted.
pub fn replace(
    mut set: RecordSet,
    column: &ColumnRef,
    old: &str,
    new: &str,
) -> Result<RecordSet, CsvError> {
    let index = column.resolve(set.header.as_deref())?;

    for row in &mut set.rows {
        if let Some(field) = row.get_mut(index)
            && *field == *old
        {
            *field = new.to_string();
        }
    }

    Ok(set)
}

/// Resolve every reference, failing on the first bad one.
fn resolve_all(columns: &[ColumnRef], set: &RecordSet) -> Result<Vec<usize>, CsvError> {
    columns
        .iter()
        .map(|c| c.resolve(set.header.as_deref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fruit_input() -> &'static str {
        "fruit,id\napple,1\nbanana,2\navocado,3\n"
    }

    fn run(input: &str, op: Op) -> String {
        execute(input, &op, &CsvConfig::default(), false).unwrap()
    }

    #[test]
    fn test_search_substring_semantics() {
        let out = run(
            fruit_input(),
            Op::Search {
                column: ColumnRef::parse("1"),
                pattern: "^a".to_string(),
            },
        );
        assert_eq!(out, "fruit,id\napple,1\navocado,3\n");
    }

    #[test]
    fn test_search_by_name_unanchored() {
        let out = run(
            fruit_input(),
            Op::Search {
                column: ColumnRef::parse("fruit"),
                pattern: "an".to_string(),
            },
        );
        assert_eq!(out, "fruit,id\nbanana,2\n");
    }

    #[test]
    fn test_search_drops_short_rows() {
        let set = RecordSet::parse("a,b\nonly\nx,match\n", &CsvConfig::default(), true).unwrap();
        let result = search(&set, &ColumnRef::parse("2"), ".").unwrap();
        assert_eq!(result.rows, vec![vec!["x".to_string(), "match".to_string()]]);
    }

    #[test]
    fn test_search_invalid_pattern() {
        let set = RecordSet::parse(fruit_input(), &CsvConfig::default(), true).unwrap();
        let err = search(&set, &ColumnRef::parse("1"), "[unclosed").unwrap_err();
        assert!(matches!(err, CsvError::Pattern(_)));
    }

    #[test]
    fn test_search_name_without_headers_fails() {
        let err = execute(
            "apple,1\n",
            &Op::Search {
                column: ColumnRef::parse("fruit"),
                pattern: "a".to_string(),
            },
            &CsvConfig::default(),
            true,
        )
        .unwrap_err();
        assert!(matches!(err, CsvError::NameWithoutHeaders(_)));
    }

    #[test]
    fn test_select_mixed_references() {
        let out = run(
            fruit_input(),
            Op::Select {
                columns: ColumnRef::parse_list("id,1"),
            },
        );
        assert_eq!(out, "id,fruit\n1,apple\n2,banana\n3,avocado\n");
    }

    #[test]
    fn test_select_out_of_range_pads_rows_and_skips_header() {
        // Header shorter than the request loses the cell by omission; the
        // data row gains an empty field by padding.
        let out = run(
            "a,b\n1,2\n",
            Op::Select {
                columns: ColumnRef::parse_list("1,5"),
            },
        );
        assert_eq!(out, "a\n1,\n");
    }

    #[test]
    fn test_select_unknown_name_fails() {
        let err = execute(
            fruit_input(),
            &Op::Select {
                columns: ColumnRef::parse_list("fruit,color"),
            },
            &CsvConfig::default(),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, CsvError::ColumnNotFound(_)));
    }

    #[test]
    fn test_select_idempotent_on_own_output() {
        let op = Op::Select {
            columns: ColumnRef::parse_list("fruit,id"),
        };
        let once = run(fruit_input(), op.clone());
        let twice = run(&once, op);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_replace_exact_match_only() {
        let input = "name,team\nBob,red\nBobby,blue\nBob,green\n";
        let out = run(
            input,
            Op::Replace {
                column: ColumnRef::parse("name"),
                old: "Bob".to_string(),
                new: "Robert".to_string(),
            },
        );
        assert_eq!(out, "name,team\nRobert,red\nBobby,blue\nRobert,green\n");
    }

    #[test]
    fn test_replace_skips_short_rows() {
        let set = RecordSet::parse("a,b\nx\ny,old\n", &CsvConfig::default(), true).unwrap();
        let result = replace(set, &ColumnRef::parse("2"), "old", "new").unwrap();
        assert_eq!(result.rows[0], vec!["x".to_string()]);
        assert_eq!(result.rows[1], vec!["y".to_string(), "new".to_string()]);
    }

    #[test]
    fn test_readable_via_execute() {
        let out = run("aa,b\n1,22\n", Op::Readable);
        assert_eq!(out, "aa | b \n---|---\n1  | 22\n");
    }

    #[test]
    fn test_readable_suppresses_parsed_header() {
        let set = RecordSet::parse("name,id\nAlice,1\n", &CsvConfig::default(), true).unwrap();
        let out = readable(&set, true);
        // Header omitted entirely, not shown as a data row
        assert_eq!(out, "Alice | 1\n");
    }

    #[test]
    fn test_empty_input_produces_empty_output() {
        for op in [
            Op::Readable,
            Op::Select {
                columns: ColumnRef::parse_list("1"),
            },
            Op::Search {
                column: ColumnRef::parse("1"),
                pattern: "x".to_string(),
            },
            Op::Replace {
                column: ColumnRef::parse("1"),
                old: "a".to_string(),
                new: "b".to_string(),
            },
        ] {
            let out = execute("", &op, &CsvConfig::default(), false).unwrap();
            assert_eq!(out, "", "expected no output for {op:?} on empty input");
        }
    }

    #[test]
    fn test_round_trip_preserves_record_set() {
        let config = CsvConfig::default();
        let original = RecordSet {
            header: Some(vec!["name".to_string(), "note".to_string()]),
            rows: vec![
                vec!["Alice".to_string(), "likes, commas".to_string()],
                vec!["Bob".to_string(), "said \"hi\"".to_string()],
                vec!["Carol".to_string(), "line\nbreak".to_string()],
            ],
        };

        let text = write_delimited(&original, &config).unwrap();
        let reparsed = RecordSet::parse(&text, &config, true).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn test_read_source_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "a,b\n1,2\n").unwrap();

        let text = read_source(file.path().to_str().unwrap()).unwrap();
        assert_eq!(text, "a,b\n1,2\n");
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("/nonexistent/input.csv").unwrap_err();
        assert!(matches!(err, CsvError::Io(_)));
    }
}
