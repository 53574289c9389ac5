//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{BilexError, Result};

/// Main configuration for the bilex pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BilexConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Report assembly configuration.
    pub report: ReportConfig,
}

impl Default for BilexConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Minimum fuzzy score (0 - 100) for a line to count as labeled
    /// with a field keyword. A line is accepted only above this value.
    pub keyword_threshold: f64,

    /// Minimum fuzzy score (0 - 100) for a biller catalog entry to be
    /// reported instead of the unknown sentinel.
    pub biller_threshold: f64,

    /// Confidence assigned to an accepted amount match.
    pub amount_confidence: f32,

    /// Exclusive lower bound for plausible bill amounts.
    pub min_amount: f64,

    /// Exclusive upper bound for plausible bill amounts.
    pub max_amount: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            keyword_threshold: 70.0,
            biller_threshold: 60.0,
            amount_confidence: 0.85,
            min_amount: 0.0,
            max_amount: 1_000_000.0,
        }
    }
}

/// Report assembly configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Number of leading characters of the source text kept in the
    /// report for diagnostics.
    pub excerpt_chars: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { excerpt_chars: 500 }
    }
}

impl BilexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| BilexError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| BilexError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BilexConfig::default();
        assert_eq!(config.extraction.keyword_threshold, 70.0);
        assert_eq!(config.extraction.biller_threshold, 60.0);
        assert_eq!(config.report.excerpt_chars, 500);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: BilexConfig =
            serde_json::from_str(r#"{"extraction": {"biller_threshold": 75.0}}"#).unwrap();
        assert_eq!(config.extraction.biller_threshold, 75.0);
        assert_eq!(config.extraction.keyword_threshold, 70.0);
    }
}
