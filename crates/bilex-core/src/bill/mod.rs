//! Bill field extraction module.

mod extractor;
pub mod rules;

pub use extractor::{BillFieldExtractor, BillParser, ExtractionResult};

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
