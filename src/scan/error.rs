// ABOUTME: Error types for parameter table parsing
// ABOUTME: Defines specific error types for scan module operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read parameter file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parameter table is empty: no header line found")]
    EmptyTable,

    #[error("Line {line}: expected {expected} columns, found {found}")]
    ColumnMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: field '{field}' has non-numeric value '{value}'")]
    InvalidNumber {
        line: usize,
        field: String,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;
