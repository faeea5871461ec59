// ABOUTME: Tab-separated parameter table parsing
// ABOUTME: Reads a header line plus data rows into ordered scan point records

use indexmap::IndexMap;
use std::path::Path;
use tokio::fs;

use super::error::{Result, ScanError};
use super::point::ScanPoint;

/// A parsed parameter table: the header fields plus one scan point per
/// data row, in file order.
#[derive(Debug, Clone)]
pub struct ScanTable {
    fields: Vec<String>,
    points: Vec<ScanPoint>,
}

impl ScanTable {
    /// Parse a parameter table from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .await
            .map_err(ScanError::IoError)?;
        Self::parse(&content)
    }

    /// Parse a parameter table from its text content
    pub fn parse(content: &str) -> Result<Self> {
        let mut lines = content.lines();

        let header = lines.next().ok_or(ScanError::EmptyTable)?;
        let fields = split_columns(header);
        if fields.is_empty() {
            return Err(ScanError::EmptyTable);
        }

        let mut points = Vec::new();
        for (index, line) in lines.enumerate() {
            // Header is line 1, first data row is line 2
            points.push(parse_row(&fields, line, index + 2)?);
        }

        Ok(Self {
            fields: fields.into_iter().map(String::from).collect(),
            points,
        })
    }

    /// Header field names, in table order (derived fields not included)
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Parsed scan points, one per data row
    pub fn points(&self) -> &[ScanPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Split a line on tabs, dropping empty tokens left behind by trailing
/// delimiters and trimming the trailing newline off the last token.
fn split_columns(line: &str) -> Vec<&str> {
    line.split('\t')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

fn parse_row(fields: &[&str], line: &str, line_number: usize) -> Result<ScanPoint> {
    let tokens = split_columns(line);
    if tokens.len() != fields.len() {
        return Err(ScanError::ColumnMismatch {
            line: line_number,
            expected: fields.len(),
            found: tokens.len(),
        });
    }

    let mut raw = IndexMap::new();
    for (field, token) in fields.iter().zip(tokens) {
        let value: f64 = token.parse().map_err(|_| ScanError::InvalidNumber {
            line: line_number,
            field: field.to_string(),
            value: token.to_string(),
        })?;
        raw.insert(field.to_string(), value);
    }

    Ok(ScanPoint::from_raw(raw))
}
