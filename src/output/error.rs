// ABOUTME: Error types for output file writing
// ABOUTME: Defines specific error types for persisting rendered files

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDirError {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    WriteError {
        path: String,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
