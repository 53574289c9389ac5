//! Biller identification.
//!
//! Unlike the labeled fields, the issuer is a document-level property:
//! the whole text is scored against every catalog entry and the single
//! global maximum wins.

use rapidfuzz::fuzz;

use crate::models::bill::{BillerCategory, BillerInfo};

/// Known biller names by category.
///
/// An explicit ordered slice: earlier categories, and earlier names within
/// a category, win score ties.
pub static BILLER_CATALOG: &[(BillerCategory, &[&str])] = &[
    (
        BillerCategory::Electricity,
        &[
            "electricity board",
            "power distribution",
            "electric company",
            "msedcl",
            "bescom",
            "tata power",
            "adani electricity",
            "torrent power",
            "cesc",
            "bses",
            "reliance energy",
        ],
    ),
    (
        BillerCategory::Water,
        &[
            "water supply",
            "water board",
            "municipal corporation",
            "jal board",
            "water works",
            "water department",
        ],
    ),
    (
        BillerCategory::Mobile,
        &[
            "airtel", "vodafone", "jio", "bsnl", "idea", "mobile", "telecom", "cellular",
        ],
    ),
    (
        BillerCategory::Gas,
        &[
            "gas company",
            "indraprastha gas",
            "mahanagar gas",
            "gujarat gas",
            "lpg",
            "png",
        ],
    ),
];

/// Classify the bill's issuer from the whole document text.
///
/// Scores above `threshold` (0 - 100) report the matched name upper-cased
/// with `confidence = score / 100`; anything else is the unknown sentinel.
pub fn classify_biller(text: &str, threshold: f64) -> BillerInfo {
    let text_lower = text.to_lowercase();

    let mut best: Option<(&str, BillerCategory, f64)> = None;
    for (category, billers) in BILLER_CATALOG {
        for &biller in *billers {
            let score = fuzz::partial_ratio(biller.chars(), text_lower.chars());
            if best.map_or(true, |(_, _, s)| score > s) {
                best = Some((biller, *category, score));
            }
        }
    }

    match best {
        Some((name, category, score)) if score > threshold => BillerInfo {
            biller_name: Some(name.to_uppercase()),
            category,
            confidence: (score / 100.0) as f32,
        },
        _ => BillerInfo::unknown(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msedcl_is_electricity() {
        let info = classify_biller("MSEDCL Mumbai - Electricity Bill", 60.0);
        assert_eq!(info.category, BillerCategory::Electricity);
        assert_eq!(info.biller_name.as_deref(), Some("MSEDCL"));
        assert!(info.confidence > 0.6);
    }

    #[test]
    fn test_case_insensitive_match() {
        let info = classify_biller("bill issued by msedcl", 60.0);
        assert_eq!(info.category, BillerCategory::Electricity);
    }

    #[test]
    fn test_water_board() {
        let info = classify_biller("Delhi Jal Board - Water Charges", 60.0);
        assert_eq!(info.category, BillerCategory::Water);
        assert_eq!(info.biller_name.as_deref(), Some("JAL BOARD"));
    }

    #[test]
    fn test_unknown_below_threshold() {
        let info = classify_biller("zzqx", 60.0);
        assert_eq!(info, BillerInfo::unknown());
    }

    #[test]
    fn test_exact_substring_scores_full() {
        let info = classify_biller("TATA POWER monthly statement", 60.0);
        assert_eq!(info.confidence, 1.0);
        assert_eq!(info.biller_name.as_deref(), Some("TATA POWER"));
    }
}
