//! Common regex patterns for bill field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A labeled line splits into label and value at the first run of
    // delimiter characters; only the remainder is searched for a value.
    pub static ref LABEL_SPLIT: Regex = Regex::new(
        r"[:=\-\s]+"
    ).unwrap();

    // Bill numbers are alphanumeric codes, possibly with dashes or slashes.
    pub static ref CODE_VALUE: Regex = Regex::new(
        r"[A-Za-z0-9/\-]+"
    ).unwrap();

    // Consumer numbers are purely numeric, 6-15 digits.
    pub static ref CONSUMER_VALUE: Regex = Regex::new(
        r"\d{6,15}"
    ).unwrap();

    // Consumption quantity, optionally fractional.
    pub static ref UNITS_VALUE: Regex = Regex::new(
        r"\d+(?:\.\d+)?"
    ).unwrap();

    // Amount patterns, in priority order. Currency markers cover the
    // Rs./₹/INR surface forms found on Indian utility bills.
    pub static ref AMOUNT_LABELED: Regex = Regex::new(
        r"(?i)total\s+amount\s+payable[\s:]*(?:rs\.?|₹|inr)?\s*(\d+(?:,\d+)*(?:\.\d{2})?)"
    ).unwrap();

    pub static ref AMOUNT_PREFIXED: Regex = Regex::new(
        r"(?i)(?:rs\.?|₹|inr)\s*(\d+(?:,\d+)*(?:\.\d{2})?)"
    ).unwrap();

    pub static ref AMOUNT_SUFFIXED: Regex = Regex::new(
        r"(?i)(\d+(?:,\d+)*(?:\.\d{2})?)\s*(?:rs\.?|₹|inr)"
    ).unwrap();

    pub static ref AMOUNT_KEYWORD: Regex = Regex::new(
        r"(?i)(?:total|amount|payable)[\s:]*(?:rs\.?|₹|inr)?\s*(\d+(?:,\d+)*(?:\.\d{2})?)"
    ).unwrap();

    // Date patterns. Day-first is the dominant order on these bills.
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b(\d{1,2})[./\-](\d{1,2})[./\-](\d{4}|\d{2})\b"
    ).unwrap();

    pub static ref DATE_YMD: Regex = Regex::new(
        r"\b(\d{4})[./\-](\d{1,2})[./\-](\d{1,2})\b"
    ).unwrap();

    pub static ref DATE_MONTH_NAME: Regex = Regex::new(
        r"(?i)\b(\d{1,2})\s+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+(\d{4})\b"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_split_keeps_remainder() {
        let parts: Vec<&str> = LABEL_SPLIT.splitn("Bill No: ABC-12345", 2).collect();
        assert_eq!(parts, vec!["Bill", "No: ABC-12345"]);
    }

    #[test]
    fn test_amount_labeled_matches_total_payable() {
        let caps = AMOUNT_LABELED
            .captures("Total Amount Payable Rs. 1,065.00")
            .unwrap();
        assert_eq!(&caps[1], "1,065.00");
    }

    #[test]
    fn test_amount_suffixed() {
        let caps = AMOUNT_SUFFIXED.captures("1,234.56 Rs").unwrap();
        assert_eq!(&caps[1], "1,234.56");
    }

    #[test]
    fn test_date_dmy_embedded_in_noise() {
        let caps = DATE_DMY.captures("Date: 15/02/2024 (pay early)").unwrap();
        assert_eq!(&caps[1], "15");
        assert_eq!(&caps[2], "02");
        assert_eq!(&caps[3], "2024");
    }

    #[test]
    fn test_date_ymd_not_shadowed_by_dmy() {
        assert!(!DATE_DMY.is_match("2024-02-15"));
        assert!(DATE_YMD.is_match("2024-02-15"));
    }
}
