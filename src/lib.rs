//! # csvtool
//!
//! A command-line tool for working with delimited tabular text (CSV).
//!
//! The whole tool is a single pass over an in-memory record set:
//! - **Parser**: raw delimited text -> optional header + ordered rows
//! - **ColumnResolver**: 1-based index or header name -> 0-based field index
//! - **Operations**: readable display, column selection, regex search,
//!   exact-value replace
//! - **Formatter**: record set -> delimited text or an aligned table
//!
//! ## Example
//!
//! ```
//! use csvtool::{ColumnRef, CsvConfig, Op, execute};
//!
//! let input = "fruit,id\napple,1\nbanana,2\navocado,3\n";
//! let op = Op::Search {
//!     column: ColumnRef::parse("fruit"),
//!     pattern: "^a".to_string(),
//! };
//!
//! let output = execute(input, &op, &CsvConfig::default(), false).unwrap();
//! assert_eq!(output, "fruit,id\napple,1\navocado,3\n");
//! ```

pub mod column;
pub mod error;
pub mod format;
pub mod ops;
pub mod record;

pub use column::ColumnRef;
pub use error::CsvError;
pub use format::{write_delimited, write_readable};
pub use ops::{Op, execute, read_source, readable, replace, search, select};
pub use record::{CsvConfig, RecordSet};
