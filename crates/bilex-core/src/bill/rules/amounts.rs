//! Amount extraction.
//!
//! Amounts are matched against the whole document rather than line by
//! line: the total shows up in too many surface forms ("Total Amount
//! Payable Rs. 1,065.00", "₹1065", "1065.00 INR") for a single labeled
//! line to be reliable. Among all plausible candidates the maximum wins,
//! the total being the largest monetary figure on a bill.

use super::patterns::{AMOUNT_KEYWORD, AMOUNT_LABELED, AMOUNT_PREFIXED, AMOUNT_SUFFIXED};
use super::FieldMatch;

/// Extract the payable amount from the whole document text.
///
/// The four patterns are applied in priority order; every match is parsed
/// with thousands separators stripped and kept only when strictly inside
/// `(min, max)`. Page numbers and garbled OCR digits fall outside that
/// range. The reported value is the maximum accepted candidate, at the
/// fixed `confidence`.
pub fn extract_amount(
    text: &str,
    min: f64,
    max: f64,
    confidence: f32,
) -> Option<FieldMatch<f64>> {
    let patterns = [
        &*AMOUNT_LABELED,
        &*AMOUNT_PREFIXED,
        &*AMOUNT_SUFFIXED,
        &*AMOUNT_KEYWORD,
    ];

    let mut best: Option<(f64, String)> = None;
    for pattern in patterns {
        for caps in pattern.captures_iter(text) {
            let raw = caps[1].replace(',', "");
            let Ok(value) = raw.parse::<f64>() else {
                continue;
            };
            if value <= min || value >= max {
                continue;
            }
            if best.as_ref().map_or(true, |(b, _)| value > *b) {
                best = Some((value, caps[0].to_string()));
            }
        }
    }

    best.map(|(value, source)| FieldMatch::new(value, confidence, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGE: (f64, f64) = (0.0, 1_000_000.0);

    fn extract(text: &str) -> Option<FieldMatch<f64>> {
        extract_amount(text, RANGE.0, RANGE.1, 0.85)
    }

    #[test]
    fn test_total_amount_payable() {
        let m = extract("Total Amount Payable Rs. 1,065.00").unwrap();
        assert_eq!(m.value, 1065.00);
        assert_eq!(m.confidence, 0.85);
    }

    #[test]
    fn test_currency_prefix_and_suffix() {
        assert_eq!(extract("Rs. 1,234.56").unwrap().value, 1234.56);
        assert_eq!(extract("₹1,234.56").unwrap().value, 1234.56);
        assert_eq!(extract("1,234.56 INR").unwrap().value, 1234.56);
    }

    #[test]
    fn test_maximum_candidate_wins() {
        let text = "Energy charges Rs. 850.00\nTotal Amount Payable Rs. 1,065.00";
        assert_eq!(extract(text).unwrap().value, 1065.00);
    }

    #[test]
    fn test_out_of_range_candidates_excluded() {
        // Zero and an absurdly large figure must never enter the pool,
        // even when a smaller in-range amount is also present.
        let text = "Rs. 0.00\nRs. 5000000.00\nAmount: Rs. 450.00";
        assert_eq!(extract(text).unwrap().value, 450.00);
    }

    #[test]
    fn test_only_out_of_range_yields_nothing() {
        assert!(extract("Rs. 0.00 and Rs. 5000000.00").is_none());
        assert!(extract("no money mentioned").is_none());
    }
}
