//! Bill field extraction orchestrator.

use tracing::{debug, info};

use crate::error::ExtractionError;
use crate::models::bill::{BillFields, ExtractedField};
use crate::models::config::BilexConfig;

use super::rules::{amounts, billers, codes, dates, keywords, units, FieldMatch};
use super::Result;

/// Result of a bill extraction run.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted fields with confidence scores.
    pub fields: BillFields,
    /// Extraction warnings, one per field that degraded to its sentinel.
    pub warnings: Vec<String>,
}

/// Trait for bill field parsing.
pub trait BillParser {
    /// Parse bill fields from OCR text.
    fn parse(&self, text: &str) -> Result<ExtractionResult>;
}

/// Rule-based bill field extractor.
///
/// Stateless across calls; the catalogs and compiled patterns are shared
/// immutable statics, so one extractor may serve any number of threads.
pub struct BillFieldExtractor {
    /// Minimum fuzzy score for a line to count as labeled with a keyword.
    keyword_threshold: f64,
    /// Minimum fuzzy score for a biller match to be reported.
    biller_threshold: f64,
    /// Confidence assigned to an accepted amount.
    amount_confidence: f32,
    /// Exclusive bounds for plausible amounts.
    min_amount: f64,
    max_amount: f64,
    /// Leading characters of the source kept in the report.
    excerpt_chars: usize,
}

impl BillFieldExtractor {
    /// Create a new extractor with default settings.
    pub fn new() -> Self {
        Self::from_config(&BilexConfig::default())
    }

    /// Create an extractor from a configuration.
    pub fn from_config(config: &BilexConfig) -> Self {
        Self {
            keyword_threshold: config.extraction.keyword_threshold,
            biller_threshold: config.extraction.biller_threshold,
            amount_confidence: config.extraction.amount_confidence,
            min_amount: config.extraction.min_amount,
            max_amount: config.extraction.max_amount,
            excerpt_chars: config.report.excerpt_chars,
        }
    }

    /// Set the keyword acceptance threshold.
    pub fn with_keyword_threshold(mut self, threshold: f64) -> Self {
        self.keyword_threshold = threshold;
        self
    }

    /// Set the biller acceptance threshold.
    pub fn with_biller_threshold(mut self, threshold: f64) -> Self {
        self.biller_threshold = threshold;
        self
    }

    /// Set the number of excerpt characters kept in the report.
    pub fn with_excerpt_chars(mut self, chars: usize) -> Self {
        self.excerpt_chars = chars;
        self
    }

    /// Parse bill fields from raw bytes, rejecting non-UTF-8 input.
    ///
    /// This is the only failing path: text in which nothing is found is a
    /// valid result, bytes that are not text are a caller error.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<ExtractionResult> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| ExtractionError::InvalidInput(e.to_string()))?;
        self.parse(text)
    }
}

impl Default for BillFieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl BillParser for BillFieldExtractor {
    fn parse(&self, text: &str) -> Result<ExtractionResult> {
        info!("Extracting bill fields from {} characters of text", text.len());

        let lines: Vec<&str> = text.lines().collect();
        let mut warnings = Vec::new();

        let amount = amounts::extract_amount(
            text,
            self.min_amount,
            self.max_amount,
            self.amount_confidence,
        );
        let bill_number = codes::extract_bill_number(&lines, self.keyword_threshold);
        let consumer_number = codes::extract_consumer_number(&lines, self.keyword_threshold);
        let biller_info = billers::classify_biller(text, self.biller_threshold);
        let billing_date = dates::extract_date(
            &lines,
            keywords::BILLING_DATE_KEYWORDS,
            self.keyword_threshold,
        );
        let due_date =
            dates::extract_date(&lines, keywords::DUE_DATE_KEYWORDS, self.keyword_threshold);
        let units_consumed = units::extract_units(&lines, self.keyword_threshold);

        if amount.is_none() {
            warnings.push("Could not extract amount".to_string());
        }
        if bill_number.is_none() {
            warnings.push("Could not extract bill number".to_string());
        }
        if consumer_number.is_none() {
            warnings.push("Could not extract consumer number".to_string());
        }
        if biller_info.biller_name.is_none() {
            warnings.push("Could not identify biller".to_string());
        }
        if billing_date.is_none() {
            warnings.push("Could not extract billing date".to_string());
        }
        if due_date.is_none() {
            warnings.push("Could not extract due date".to_string());
        }
        if units_consumed.is_none() {
            warnings.push("Could not extract units consumed".to_string());
        }

        let mut fields = BillFields {
            amount: to_field(amount),
            bill_number: to_field(bill_number),
            consumer_number: to_field(consumer_number),
            biller_info,
            billing_date: to_field(billing_date),
            due_date: to_field(due_date),
            units_consumed: to_field(units_consumed),
            raw_text_excerpt: text.chars().take(self.excerpt_chars).collect(),
            overall_confidence: 0.0,
        };

        let confidences = fields.field_confidences();
        let mean = confidences.iter().sum::<f32>() / confidences.len() as f32;
        fields.overall_confidence = (mean * 100.0).round() / 100.0;

        debug!(
            overall_confidence = fields.overall_confidence,
            warnings = warnings.len(),
            "extraction complete"
        );

        Ok(ExtractionResult { fields, warnings })
    }
}

fn to_field<T>(m: Option<FieldMatch<T>>) -> ExtractedField<T> {
    m.map(Into::into).unwrap_or_else(ExtractedField::missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bill::BillerCategory;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    const SAMPLE_BILL: &str = "\
MSEDCL - Maharashtra State Electricity Distribution
Bill No: MH-2024/00123
Consumer No: 123456789
Bill Date: 15/01/2024
Due Date: 15/02/2024
Units Consumed: 150.5
Energy charges Rs. 850.00
Total Amount Payable Rs. 1,065.00
";

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_sample_bill() {
        let result = BillFieldExtractor::new().parse(SAMPLE_BILL).unwrap();
        let fields = result.fields;

        assert_eq!(fields.amount.value, Some(1065.00));
        assert_eq!(fields.amount.confidence, 0.85);
        assert_eq!(fields.bill_number.value.as_deref(), Some("MH-2024/00123"));
        assert_eq!(fields.consumer_number.value.as_deref(), Some("123456789"));
        assert_eq!(fields.biller_info.category, BillerCategory::Electricity);
        assert!(fields.biller_info.confidence > 0.6);
        assert_eq!(fields.billing_date.value, Some(ymd(2024, 1, 15)));
        assert_eq!(fields.due_date.value, Some(ymd(2024, 2, 15)));
        assert_eq!(fields.units_consumed.value, Some(150.5));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_nothing_found_is_not_an_error() {
        let result = BillFieldExtractor::new().parse("lorem ipsum dolor").unwrap();
        let fields = &result.fields;

        assert!(fields.amount.is_missing());
        assert!(fields.bill_number.is_missing());
        assert!(fields.consumer_number.is_missing());
        assert_eq!(fields.biller_info.category, BillerCategory::Unknown);
        assert!(fields.billing_date.is_missing());
        assert!(fields.due_date.is_missing());
        assert!(fields.units_consumed.is_missing());
        assert_eq!(fields.overall_confidence, 0.0);
        assert_eq!(result.warnings.len(), 7);
    }

    #[test]
    fn test_overall_confidence_is_rounded_mean_of_seven() {
        let fields = BillFieldExtractor::new()
            .parse(SAMPLE_BILL)
            .unwrap()
            .fields;

        let confidences = fields.field_confidences();
        let mean = confidences.iter().sum::<f32>() / 7.0;
        let expected = (mean * 100.0).round() / 100.0;

        assert_eq!(fields.overall_confidence, expected);
        assert!(fields.overall_confidence > 0.0 && fields.overall_confidence <= 1.0);
    }

    #[test]
    fn test_missing_fields_still_count_in_mean() {
        // Only the amount is present; the other six contribute zeros.
        let fields = BillFieldExtractor::new()
            .parse("Total Amount Payable Rs. 500.00")
            .unwrap()
            .fields;

        assert_eq!(fields.amount.confidence, 0.85);
        let expected = (0.85f32 / 7.0 * 100.0).round() / 100.0;
        assert_eq!(fields.overall_confidence, expected);
    }

    #[test]
    fn test_repeated_extraction_is_byte_identical() {
        let extractor = BillFieldExtractor::new();
        let a = serde_json::to_string(&extractor.parse(SAMPLE_BILL).unwrap().fields).unwrap();
        let b = serde_json::to_string(&extractor.parse(SAMPLE_BILL).unwrap().fields).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_excerpt_truncates_on_char_boundary() {
        let text = "₹".repeat(600);
        let fields = BillFieldExtractor::new().parse(&text).unwrap().fields;
        assert_eq!(fields.raw_text_excerpt.chars().count(), 500);
    }

    #[test]
    fn test_parse_bytes_rejects_invalid_utf8() {
        let err = BillFieldExtractor::new().parse_bytes(&[0xff, 0xfe, 0xfd]);
        assert!(matches!(err, Err(ExtractionError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_bytes_accepts_text() {
        let result = BillFieldExtractor::new()
            .parse_bytes(SAMPLE_BILL.as_bytes())
            .unwrap();
        assert_eq!(result.fields.amount.value, Some(1065.00));
    }

    #[test]
    fn test_serialized_field_order_is_stable() {
        let fields = BillFieldExtractor::new().parse(SAMPLE_BILL).unwrap().fields;
        let json = serde_json::to_string(&fields).unwrap();

        let amount_pos = json.find("\"amount\"").unwrap();
        let overall_pos = json.find("\"overall_confidence\"").unwrap();
        assert!(amount_pos < overall_pos);
    }
}
