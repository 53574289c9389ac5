//! Bill field models with per-field confidence scores.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single extracted field: the value (if found) plus a confidence score.
///
/// `value` is `None` exactly when `confidence` is `0.0` - the missing-field
/// sentinel. A present value always carries a positive confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedField<T> {
    /// Extracted value, `None` when nothing matched.
    pub value: Option<T>,

    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
}

impl<T> ExtractedField<T> {
    /// A field that was found with the given confidence.
    pub fn found(value: T, confidence: f32) -> Self {
        Self {
            value: Some(value),
            confidence,
        }
    }

    /// The zero-confidence sentinel for a field that was not found.
    pub fn missing() -> Self {
        Self {
            value: None,
            confidence: 0.0,
        }
    }

    /// Check whether this is the missing-field sentinel.
    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }
}

impl<T> Default for ExtractedField<T> {
    fn default() -> Self {
        Self::missing()
    }
}

/// Category of the company that issued the bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BillerCategory {
    Electricity,
    Water,
    Mobile,
    Gas,
    Unknown,
}

impl Default for BillerCategory {
    fn default() -> Self {
        Self::Unknown
    }
}

impl std::fmt::Display for BillerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Electricity => "ELECTRICITY",
            Self::Water => "WATER",
            Self::Mobile => "MOBILE",
            Self::Gas => "GAS",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// Identified biller with category and classification confidence.
///
/// `category` is `Unknown` exactly when `biller_name` is `None` and
/// `confidence` is `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillerInfo {
    /// Matched biller name, upper-cased.
    pub biller_name: Option<String>,

    /// Biller category.
    pub category: BillerCategory,

    /// Classification confidence (0.0 - 1.0).
    pub confidence: f32,
}

impl BillerInfo {
    /// The sentinel for a bill whose issuer could not be identified.
    pub fn unknown() -> Self {
        Self {
            biller_name: None,
            category: BillerCategory::Unknown,
            confidence: 0.0,
        }
    }
}

impl Default for BillerInfo {
    fn default() -> Self {
        Self::unknown()
    }
}

/// The complete set of fields extracted from one bill.
///
/// Serialization follows declaration order, so consumers see a stable
/// key order with `overall_confidence` last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillFields {
    /// Total amount payable.
    pub amount: ExtractedField<f64>,

    /// Bill or invoice number.
    pub bill_number: ExtractedField<String>,

    /// Consumer/customer account number.
    pub consumer_number: ExtractedField<String>,

    /// Identified biller.
    pub biller_info: BillerInfo,

    /// Date the bill was issued.
    pub billing_date: ExtractedField<NaiveDate>,

    /// Payment due date.
    pub due_date: ExtractedField<NaiveDate>,

    /// Consumption units (e.g. kWh).
    pub units_consumed: ExtractedField<f64>,

    /// First 500 characters of the source text, kept for diagnostics.
    pub raw_text_excerpt: String,

    /// Mean of the seven per-field confidences, rounded to two decimals.
    pub overall_confidence: f32,
}

impl BillFields {
    /// Confidence scores of the seven scored fields, in record order.
    ///
    /// Every scored field contributes exactly one entry, including fields
    /// that degraded to the zero-confidence sentinel.
    pub fn field_confidences(&self) -> [f32; 7] {
        [
            self.amount.confidence,
            self.bill_number.confidence,
            self.consumer_number.confidence,
            self.biller_info.confidence,
            self.billing_date.confidence,
            self.due_date.confidence,
            self.units_consumed.confidence,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sentinel() {
        let field: ExtractedField<f64> = ExtractedField::missing();
        assert!(field.is_missing());
        assert_eq!(field.confidence, 0.0);
    }

    #[test]
    fn test_unknown_biller_sentinel() {
        let biller = BillerInfo::unknown();
        assert_eq!(biller.category, BillerCategory::Unknown);
        assert!(biller.biller_name.is_none());
        assert_eq!(biller.confidence, 0.0);
    }

    #[test]
    fn test_category_serializes_uppercase() {
        let json = serde_json::to_string(&BillerCategory::Electricity).unwrap();
        assert_eq!(json, "\"ELECTRICITY\"");
    }

    #[test]
    fn test_date_field_serializes_iso() {
        let field = ExtractedField::found(NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(), 0.9);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["value"], "2024-02-15");
    }
}
