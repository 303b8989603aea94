use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while loading, filtering, or writing a table.
///
/// Each variant carries the path (and line number, where one exists) so the
/// message alone is enough to find the problem.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("input file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("{}: no header row (file is empty)", .path.display())]
    MissingHeader { path: PathBuf },

    #[error("{}: duplicate column '{}' in header", .path.display(), .column)]
    DuplicateColumn { path: PathBuf, column: String },

    #[error(
        "{}: line {}: expected {} fields, found {}",
        .path.display(), .line, .expected, .found
    )]
    FieldCount {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("no column named '{column}' in the table")]
    MissingColumn { column: String },

    #[error("{}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TableError>;
