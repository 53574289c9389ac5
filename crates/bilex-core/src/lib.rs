//! Core library for utility bill OCR text processing.
//!
//! This crate provides:
//! - Fuzzy keyword matching over noisy OCR lines
//! - Rule-based field extraction (amount, bill/consumer numbers, dates, units)
//! - Biller classification against a category catalog
//! - Per-field and overall confidence scoring
//!
//! OCR itself is an upstream concern: the input here is already-extracted
//! text, one string per document.

pub mod bill;
pub mod error;
pub mod models;

pub use bill::{BillFieldExtractor, BillParser, ExtractionResult};
pub use error::{BilexError, ExtractionError, Result};
pub use models::bill::{BillFields, BillerCategory, BillerInfo, ExtractedField};
pub use models::config::{BilexConfig, ExtractionConfig, ReportConfig};

/// Extract all bill fields from OCR text with the default extractor.
///
/// Nothing found is not an error: every absent field is reported as the
/// zero-confidence sentinel and the call still succeeds.
pub fn extract_fields(text: &str) -> bill::Result<BillFields> {
    BillFieldExtractor::new().parse(text).map(|r| r.fields)
}
