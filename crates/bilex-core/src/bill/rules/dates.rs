//! Date extraction and normalization.

use chrono::NaiveDate;

use super::patterns::{DATE_DMY, DATE_MONTH_NAME, DATE_YMD};
use super::scan::scan_lines;
use super::FieldMatch;

/// Strict fallback formats, tried in order after the permissive scan.
const STRICT_FORMATS: &[&str] = &[
    "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y",
    "%d/%m/%y", "%d-%m-%y",
    "%Y-%m-%d", "%Y/%m/%d",
    "%d %b %Y", "%d %B %Y",
];

/// Extract a date field from lines labeled by one of `keywords`.
pub fn extract_date(
    lines: &[&str],
    keywords: &[&str],
    threshold: f64,
) -> Option<FieldMatch<NaiveDate>> {
    scan_lines(lines, keywords, threshold, parse_date)
}

/// Parse a free-form date substring into a calendar date.
///
/// The permissive pass scans for a date anywhere in the string, tolerating
/// surrounding tokens left over from the label split. The strict pass
/// requires the trimmed string to be exactly one of the known formats.
/// Calendar-invalid dates (e.g. 31/02) are rejected, not clamped.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Some(date) = scan_for_date(s) {
        return Some(date);
    }

    let trimmed = s.trim();
    for format in STRICT_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    None
}

fn scan_for_date(s: &str) -> Option<NaiveDate> {
    // DD/MM/YYYY, DD-MM-YY, DD.MM.YYYY
    for caps in DATE_DMY.captures_iter(s) {
        let day: u32 = caps[1].parse().unwrap_or(0);
        let month: u32 = caps[2].parse().unwrap_or(0);
        let year = parse_year(&caps[3]);

        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }

    // YYYY-MM-DD, YYYY/MM/DD
    for caps in DATE_YMD.captures_iter(s) {
        let year: i32 = caps[1].parse().unwrap_or(0);
        let month: u32 = caps[2].parse().unwrap_or(0);
        let day: u32 = caps[3].parse().unwrap_or(0);

        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }

    // "15 Feb 2024", "15 February 2024"
    for caps in DATE_MONTH_NAME.captures_iter(s) {
        let day: u32 = caps[1].parse().unwrap_or(0);
        let month = month_number(&caps[2]);
        let year: i32 = caps[3].parse().unwrap_or(0);

        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }

    None
}

fn parse_year(s: &str) -> i32 {
    let year: i32 = s.parse().unwrap_or(0);
    if year < 100 {
        // Two-digit year: 2000s for 00-50, 1900s for 51-99
        if year <= 50 {
            2000 + year
        } else {
            1900 + year
        }
    } else {
        year
    }
}

fn month_number(abbrev: &str) -> u32 {
    match abbrev.to_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => 0,
    }
}
