//! Consumption units extraction (kWh, litres, etc.).

use super::patterns::UNITS_VALUE;
use super::scan::scan_lines;
use super::{keywords, FieldMatch};

/// Extract the consumed units from labeled lines.
///
/// A textual match that fails numeric conversion degrades the field to
/// the missing sentinel; the line scan does not resume.
pub fn extract_units(lines: &[&str], threshold: f64) -> Option<FieldMatch<f64>> {
    let raw = scan_lines(lines, keywords::UNITS_KEYWORDS, threshold, |region| {
        UNITS_VALUE.find(region).map(|m| m.as_str().to_string())
    })?;

    match raw.value.parse::<f64>() {
        Ok(value) => Some(FieldMatch::new(value, raw.confidence, raw.source)),
        Err(_) => None,
    }
}
