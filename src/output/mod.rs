// ABOUTME: Output module for persisting rendered files
// ABOUTME: Exports the file writer and output error types

pub mod error;
pub mod writer;

pub use error::{OutputError, Result};
pub use writer::OutputWriter;
