//! Generic line-by-line extraction for keyword-labeled fields.

use tracing::debug;

use super::keywords;
use super::patterns::LABEL_SPLIT;
use super::FieldMatch;

/// Scan lines for a field labeled by one of `keywords`.
///
/// Each non-blank line is fuzzy-matched against the keyword list; on a
/// score above `threshold` the line is split at the first delimiter run
/// and `parse_value` is applied to the remainder (the value region). The
/// first line that passes both the keyword gate and the value parse wins;
/// a line that passes the gate but yields no value does not stop the scan.
pub fn scan_lines<T, F>(
    lines: &[&str],
    keywords: &[&str],
    threshold: f64,
    parse_value: F,
) -> Option<FieldMatch<T>>
where
    F: Fn(&str) -> Option<T>,
{
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((keyword, score)) = keywords::best_match(line, keywords) else {
            continue;
        };
        if score <= threshold {
            continue;
        }

        let Some(region) = value_region(line) else {
            continue;
        };

        if let Some(value) = parse_value(region) {
            debug!(keyword, score, "line accepted");
            return Some(FieldMatch::new(value, (score / 100.0) as f32, keyword));
        }
    }

    None
}

/// The portion of a line after the first delimiter run; the part before
/// it is assumed to be the label.
fn value_region(line: &str) -> Option<&str> {
    let mut parts = LABEL_SPLIT.splitn(line, 2);
    parts.next()?;
    parts.next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bill::rules::patterns::CONSUMER_VALUE;

    #[test]
    fn test_first_accepting_line_wins() {
        let lines = ["Consumer No: 123456789", "Account No: 999999999"];
        let m = scan_lines(&lines, keywords::CONSUMER_NUMBER_KEYWORDS, 70.0, |region| {
            CONSUMER_VALUE.find(region).map(|m| m.as_str().to_string())
        })
        .unwrap();
        assert_eq!(m.value, "123456789");
    }

    #[test]
    fn test_failed_value_parse_continues_scan() {
        // First line matches the keyword but carries no valid value;
        // the scan must move on to the second.
        let lines = ["Consumer No: 1234", "Consumer Number: 987654321"];
        let m = scan_lines(&lines, keywords::CONSUMER_NUMBER_KEYWORDS, 70.0, |region| {
            CONSUMER_VALUE.find(region).map(|m| m.as_str().to_string())
        })
        .unwrap();
        assert_eq!(m.value, "987654321");
    }

    #[test]
    fn test_no_keyword_no_match() {
        let lines = ["Electricity is billed monthly", ""];
        let m = scan_lines(&lines, keywords::CONSUMER_NUMBER_KEYWORDS, 70.0, |region| {
            Some(region.to_string())
        });
        assert!(m.is_none());
    }

    #[test]
    fn test_value_region_splits_once() {
        assert_eq!(value_region("Due Date: 15/02/2024"), Some("Date: 15/02/2024"));
        assert_eq!(value_region("total"), None);
    }
}
