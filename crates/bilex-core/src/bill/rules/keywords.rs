//! Field keyword catalog and fuzzy line matching.
//!
//! OCR output garbles labels ("Consurner No", "B1ll Date"), so lines are
//! matched against the keyword catalog with partial-ratio fuzzy scoring
//! instead of exact substring search.

use rapidfuzz::fuzz;

/// Keywords labeling the bill number, in priority order.
pub const BILL_NUMBER_KEYWORDS: &[&str] = &[
    "bill no",
    "bill number",
    "invoice no",
    "invoice number",
    "reference no",
];

/// Keywords labeling the consumer/account number, in priority order.
pub const CONSUMER_NUMBER_KEYWORDS: &[&str] = &[
    "consumer no",
    "consumer number",
    "customer id",
    "account no",
    "ca number",
];

/// Keywords labeling the payment due date, in priority order.
pub const DUE_DATE_KEYWORDS: &[&str] = &["due date", "payment due", "last date", "pay by"];

/// Keywords labeling the billing date, in priority order.
pub const BILLING_DATE_KEYWORDS: &[&str] = &[
    "bill date",
    "billing date",
    "invoice date",
    "date of issue",
];

/// Keywords labeling consumption units, in priority order.
pub const UNITS_KEYWORDS: &[&str] = &["units consumed", "consumption", "kwh", "units", "usage"];

/// Score a line against a keyword list and return the best keyword with
/// its partial-ratio score in [0, 100].
///
/// Ties keep the first-listed keyword: comparison is strictly greater, so
/// list order is the tie-break.
pub fn best_match<'a>(line: &str, keywords: &[&'a str]) -> Option<(&'a str, f64)> {
    let line_lower = line.to_lowercase();

    let mut best: Option<(&str, f64)> = None;
    for &keyword in keywords {
        let score = fuzz::partial_ratio(keyword.chars(), line_lower.chars());
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((keyword, score));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_keyword_scores_full() {
        let (keyword, score) = best_match("Due Date: 15/02/2024", DUE_DATE_KEYWORDS).unwrap();
        assert_eq!(keyword, "due date");
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_ocr_noise_still_matches() {
        // Dropped character in the label.
        let (keyword, score) = best_match("Consumr No: 123456789", CONSUMER_NUMBER_KEYWORDS)
            .unwrap();
        assert_eq!(keyword, "consumer no");
        assert!(score > 70.0, "score was {score}");
    }

    #[test]
    fn test_unrelated_line_scores_low() {
        let (_, score) = best_match("Thank you for your payment", BILL_NUMBER_KEYWORDS).unwrap();
        assert!(score <= 70.0, "score was {score}");
    }

    #[test]
    fn test_tie_keeps_first_listed() {
        // Both "bill no" and "bill number" align perfectly inside this
        // line; the first-listed keyword must win.
        let (keyword, _) = best_match("bill no bill number", BILL_NUMBER_KEYWORDS).unwrap();
        assert_eq!(keyword, "bill no");
    }
}
