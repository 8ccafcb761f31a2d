//! CLI for csvtool.
//!
//! With a subcommand, runs that operation on the given file (or stdin for
//! `-`). With no subcommand and piped input, defaults to readable display
//! of stdin; with no subcommand on a terminal, prints usage instead.

use clap::{CommandFactory, Parser, Subcommand};
use csvtool::{ColumnRef, CsvConfig, Op, execute, read_source};
use std::io::{self, IsTerminal, Write};
use std::process;

/// CSV manipulation tool with default readable mode for piped input.
#[derive(Parser)]
#[command(name = "csvtool")]
struct Cli {
    /// Treat first row as data, not header
    #[arg(long, global = true)]
    no_header: bool,

    /// Field delimiter (default: comma)
    #[arg(short, long, global = true, default_value = ",")]
    delimiter: char,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Display CSV in readable format
    Readable {
        /// CSV file to read (default: stdin)
        #[arg(default_value = "-")]
        file: String,
    },
    /// Select specific columns
    Select {
        /// Comma-separated column indices or names
        #[arg(short, long)]
        columns: String,

        /// CSV file to read (default: stdin)
        #[arg(default_value = "-")]
        file: String,
    },
    /// Search for pattern in column
    Search {
        /// Column index or name to search in
        #[arg(short, long)]
        column: String,

        /// Search pattern (regex supported)
        #[arg(short, long)]
        search: String,

        /// CSV file to read (default: stdin)
        #[arg(default_value = "-")]
        file: String,
    },
    /// Replace values in column
    Replace {
        /// Column index or name
        #[arg(short, long)]
        column: String,

        /// Old value to replace
        #[arg(short, long)]
        old: String,

        /// New value
        #[arg(short, long)]
        new: String,

        /// CSV file to read (default: stdin)
        #[arg(default_value = "-")]
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if !cli.delimiter.is_ascii() {
        eprintln!("Delimiter must be a single ASCII character");
        process::exit(1);
    }
    let delimiter = cli.delimiter as u8;
    let config = CsvConfig {
        delimiter,
        ..CsvConfig::default()
    };

    let (op, file) = match cli.command {
        Some(Cmd::Readable { file }) => (Op::Readable, file),
        Some(Cmd::Select { columns, file }) => (
            Op::Select {
                columns: ColumnRef::parse_list(&columns),
            },
            file,
        ),
        Some(Cmd::Search {
            column,
            search,
            file,
        }) => (
            Op::Search {
                column: ColumnRef::parse(&column),
                pattern: search,
            },
            file,
        ),
        Some(Cmd::Replace {
            column,
            old,
            new,
            file,
        }) => (
            Op::Replace {
                column: ColumnRef::parse(&column),
                old,
                new,
            },
            file,
        ),
        None => {
            if io::stdin().is_terminal() {
                // Nothing piped in: show usage instead of blocking on a read
                let _ = Cli::command().print_help();
                return;
            }
            (Op::Readable, "-".to_string())
        }
    };

    let input = match read_source(&file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    match execute(&input, &op, &config, cli.no_header) {
        Ok(output) => write_output(&output),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

/// Write to stdout, exiting quietly when the downstream consumer of a pipe
/// has gone away.
fn write_output(output: &str) {
    let mut stdout = io::stdout();
    let result = stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush());
    if let Err(e) = result {
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("Error writing output: {e}");
        }
        process::exit(1);
    }
}
