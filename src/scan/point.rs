// ABOUTME: Scan point record type and derived-quantity computation
// ABOUTME: Defines tagged parameter values and the width-from-lifetime derivation

use indexmap::IndexMap;
use std::fmt;

/// Reduced Planck constant in GeV*s.
pub const HBAR_GEV_S: f64 = 6.582119624e-25;

/// Speed of light in m/s, as used throughout the production scripts.
pub const SPEED_OF_LIGHT_M_S: f64 = 3.0e8;

/// Decay length field, in millimeters.
pub const CTAU_FIELD: &str = "CTAU";

/// Decay width field, in GeV.
pub const WIDTH_FIELD: &str = "WIDTH";

/// Fields stored as integers after numeric parsing.
const INTEGER_FIELDS: &[&str] = &["N"];

/// Compute the decay width in GeV for a decay length given in millimeters.
///
/// The lifetime is `ctau_mm * 1e-3 / c` seconds and the width follows from
/// the uncertainty relation `width = hbar / tau`. Undefined for
/// `ctau_mm <= 0`; callers must guard against non-positive decay lengths.
pub fn decay_width(ctau_mm: f64) -> f64 {
    let tau = ctau_mm * 1.0e-3 / SPEED_OF_LIGHT_M_S;
    HBAR_GEV_S / tau
}

/// A single parsed parameter value, tagged by numeric kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Float(f64),
    Int(i64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Shortest round-trip form: whole floats keep their ".0" suffix
            // (later scrubbed from rendered names) and small widths come out
            // in scientific notation.
            ParamValue::Float(v) => write!(f, "{:?}", v),
            ParamValue::Int(v) => write!(f, "{}", v),
        }
    }
}

/// One row of the parameter table: an ordered mapping from field name to
/// value, plus any derived fields. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanPoint {
    values: IndexMap<String, ParamValue>,
}

impl ScanPoint {
    /// Build a scan point from raw float fields, re-casting
    /// integer-designated fields and deriving WIDTH from CTAU when the
    /// table does not supply a width of its own.
    pub fn from_raw(raw: IndexMap<String, f64>) -> Self {
        let mut values: IndexMap<String, ParamValue> = raw
            .into_iter()
            .map(|(name, value)| {
                let tagged = if INTEGER_FIELDS.contains(&name.as_str()) {
                    ParamValue::Int(value as i64)
                } else {
                    ParamValue::Float(value)
                };
                (name, tagged)
            })
            .collect();

        let ctau = values.get(CTAU_FIELD).copied();
        if !values.contains_key(WIDTH_FIELD) {
            if let Some(ParamValue::Float(ctau)) = ctau {
                values.insert(WIDTH_FIELD.to_string(), ParamValue::Float(decay_width(ctau)));
            }
        }

        Self { values }
    }

    /// Get a field value by name
    pub fn get(&self, field: &str) -> Option<&ParamValue> {
        self.values.get(field)
    }

    /// Check whether a field is present
    pub fn has_field(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Iterate over fields in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields, including derived ones
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for ScanPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self
            .values
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        write!(f, "{{{}}}", fields.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_width_formula() {
        // ctau = 10 mm -> tau = 3.333e-11 s -> width ~ 1.9746e-14 GeV
        let width = decay_width(10.0);
        let expected = 6.582119624e-25 / (10.0 * 1e-3 / 3.0e8);
        assert_eq!(width, expected);
        assert!((width - 1.9746358872e-14).abs() < 1e-23);
    }

    #[test]
    fn test_width_derived_from_ctau() {
        let mut raw = IndexMap::new();
        raw.insert("MSQUARK".to_string(), 100.0);
        raw.insert("CTAU".to_string(), 10.0);

        let point = ScanPoint::from_raw(raw);
        assert!(point.has_field("WIDTH"));
        assert_eq!(
            point.get("WIDTH"),
            Some(&ParamValue::Float(decay_width(10.0)))
        );
    }

    #[test]
    fn test_width_not_recomputed_when_supplied() {
        let mut raw = IndexMap::new();
        raw.insert("CTAU".to_string(), 10.0);
        raw.insert("WIDTH".to_string(), 42.0);

        let point = ScanPoint::from_raw(raw);
        assert_eq!(point.get("WIDTH"), Some(&ParamValue::Float(42.0)));
    }

    #[test]
    fn test_no_derivation_without_ctau() {
        let mut raw = IndexMap::new();
        raw.insert("A".to_string(), 1.0);

        let point = ScanPoint::from_raw(raw);
        assert!(!point.has_field("WIDTH"));
    }

    #[test]
    fn test_integer_field_recast() {
        let mut raw = IndexMap::new();
        raw.insert("N".to_string(), 5.0);

        let point = ScanPoint::from_raw(raw);
        assert_eq!(point.get("N"), Some(&ParamValue::Int(5)));
        assert_eq!(point.get("N").unwrap().to_string(), "5");
    }

    #[test]
    fn test_whole_float_display_keeps_decimal() {
        assert_eq!(ParamValue::Float(100.0).to_string(), "100.0");
        assert_eq!(ParamValue::Float(0.5).to_string(), "0.5");
    }

    #[test]
    fn test_small_float_display_scientific() {
        let rendered = ParamValue::Float(decay_width(10.0)).to_string();
        assert!(rendered.contains('e'), "expected scientific form: {}", rendered);
    }
}
