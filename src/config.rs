//! Analysis configuration

use crate::data::{companies, SOCIAL_RATES};
use crate::error::{AnalysisError, AnalysisResult};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// First year of the generated series
    pub start_year: u16,

    /// Last year of the generated series (inclusive)
    pub end_year: u16,

    /// RNG seed for reproducible runs (None = entropy)
    pub seed: Option<u64>,

    /// Number of companies kept in rankings
    pub top_n: usize,

    /// Companies that get a detailed report
    pub report_companies: Vec<String>,

    /// Companies compared side by side
    pub comparison_companies: Vec<String>,

    /// Output directory for saved datasets and reports
    pub output_dir: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            start_year: 2002,
            end_year: 2025,
            seed: None,
            top_n: 10,
            report_companies: vec![
                "LVMH".to_string(),
                "TotalEnergies".to_string(),
                "L'Oréal".to_string(),
                "Sanofi".to_string(),
                "BNP Paribas".to_string(),
            ],
            comparison_companies: vec![
                "LVMH".to_string(),
                "TotalEnergies".to_string(),
                "L'Oréal".to_string(),
                "BNP Paribas".to_string(),
            ],
            output_dir: "output".to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Default configuration with a fixed seed
    pub fn reproducible(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Short range used by tests and smoke runs
    pub fn quick_test() -> Self {
        Self {
            start_year: 2018,
            end_year: 2022,
            top_n: 5,
            ..Self::reproducible(42)
        }
    }

    /// Load a configuration from a JSON file; missing fields keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Self = serde_json::from_str(&contents)
            .context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Years covered by this configuration
    pub fn years(&self) -> std::ops::RangeInclusive<u16> {
        self.start_year..=self.end_year
    }

    /// Check the year range against the rate table and the selections against the registry
    pub fn validate(&self) -> AnalysisResult<()> {
        if self.start_year > self.end_year {
            return Err(AnalysisError::InvalidConfig(format!(
                "start year {} is after end year {}",
                self.start_year, self.end_year
            )));
        }

        for year in [self.start_year, self.end_year] {
            if !SOCIAL_RATES.iter().any(|(y, _)| *y == year) {
                return Err(AnalysisError::UnknownYear(year));
            }
        }

        if self.top_n == 0 {
            return Err(AnalysisError::InvalidConfig("top_n must be at least 1".to_string()));
        }

        for name in self.report_companies.iter().chain(&self.comparison_companies) {
            companies::lookup(name)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.years().count(), 24);
    }

    #[test]
    fn test_rejects_out_of_range_years() {
        let config = AnalysisConfig {
            end_year: 2030,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(AnalysisError::UnknownYear(2030)));

        let inverted = AnalysisConfig {
            start_year: 2010,
            end_year: 2005,
            ..Default::default()
        };
        assert!(matches!(inverted.validate(), Err(AnalysisError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_unknown_report_company() {
        let config = AnalysisConfig {
            comparison_companies: vec!["Acme".to_string()],
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(AnalysisError::UnknownCompany("Acme".to_string()))
        );
    }

    #[test]
    fn test_from_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "seed": 7, "top_n": 3 }}"#).unwrap();

        let config = AnalysisConfig::from_file(file.path()).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.top_n, 3);
        assert_eq!(config.start_year, 2002);
        assert_eq!(config.report_companies.len(), 5);
    }

    #[test]
    fn test_from_file_rejects_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "topn": 3 }}"#).unwrap();

        let err = AnalysisConfig::from_file(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("topn"));
    }
}
