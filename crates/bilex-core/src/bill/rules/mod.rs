//! Rule-based field extractors for utility bills.
//!
//! Amounts and biller identity are matched against the whole document;
//! every other field is matched line by line. The split is deliberate:
//! the total and the issuer are document-level properties, while labeled
//! fields live on individual lines.

pub mod amounts;
pub mod billers;
pub mod codes;
pub mod dates;
pub mod keywords;
pub mod patterns;
pub mod scan;
pub mod units;

use crate::models::bill::ExtractedField;

/// A successful rule match: the value plus the keyword or text snippet
/// that produced it.
#[derive(Debug, Clone)]
pub struct FieldMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
    /// Matched keyword or source snippet.
    pub source: String,
}

impl<T> FieldMatch<T> {
    pub fn new(value: T, confidence: f32, source: impl Into<String>) -> Self {
        Self {
            value,
            confidence,
            source: source.into(),
        }
    }
}

impl<T> From<FieldMatch<T>> for ExtractedField<T> {
    fn from(m: FieldMatch<T>) -> Self {
        ExtractedField::found(m.value, m.confidence)
    }
}
