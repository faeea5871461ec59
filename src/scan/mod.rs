// ABOUTME: Scan module for parameter table parsing and derived quantities
// ABOUTME: Exports scan point records, table parsing, and error types

pub mod error;
pub mod point;
pub mod table;

pub use error::{Result, ScanError};
pub use point::{decay_width, ParamValue, ScanPoint, HBAR_GEV_S};
pub use table::ScanTable;
