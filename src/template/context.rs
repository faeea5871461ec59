// ABOUTME: Rendering context built from a scan point record
// ABOUTME: Holds formatted field values plus keys injected while rendering

use indexmap::IndexMap;

use crate::scan::ScanPoint;

/// Ordered string map consulted during placeholder substitution. Built
/// once per scan point; the renderer extends it with step and file-name
/// keys as it works through a record.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    values: IndexMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from a scan point, formatting every field value
    pub fn from_point(point: &ScanPoint) -> Self {
        let values = point
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Self { values }
    }

    /// Add or replace a key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Number of keys in the context
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
