//! Bill number and consumer number extraction.

use super::patterns::{CODE_VALUE, CONSUMER_VALUE};
use super::scan::scan_lines;
use super::{keywords, FieldMatch};

/// Minimum length for an alphanumeric code to count as a bill number.
const MIN_BILL_NUMBER_LEN: usize = 5;

/// Extract the bill/invoice number from labeled lines.
pub fn extract_bill_number(lines: &[&str], threshold: f64) -> Option<FieldMatch<String>> {
    scan_lines(
        lines,
        keywords::BILL_NUMBER_KEYWORDS,
        threshold,
        longest_code_run,
    )
}

/// Extract the consumer/account number from labeled lines.
pub fn extract_consumer_number(lines: &[&str], threshold: f64) -> Option<FieldMatch<String>> {
    scan_lines(lines, keywords::CONSUMER_NUMBER_KEYWORDS, threshold, |region| {
        CONSUMER_VALUE.find(region).map(|m| m.as_str().to_string())
    })
}

/// The longest alphanumeric run in the value region.
///
/// The region may still carry label residue ("No: ABC-12345"), so the
/// longest run is taken rather than the first; equal lengths keep the
/// earlier run. Runs shorter than the minimum are rejected outright.
fn longest_code_run(region: &str) -> Option<String> {
    let mut best: Option<&str> = None;
    for m in CODE_VALUE.find_iter(region) {
        let run = m.as_str();
        if best.map_or(true, |b| run.len() > b.len()) {
            best = Some(run);
        }
    }

    best.filter(|run| run.len() >= MIN_BILL_NUMBER_LEN)
        .map(str::to_string)
}
