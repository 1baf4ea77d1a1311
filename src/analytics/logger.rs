//! Persistence of datasets and reports

use crate::analytics::report::AnalysisBundle;
use crate::simulation::Dataset;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Writes analysis artifacts as JSON under an output directory
pub struct ResultsLogger {
    output_dir: PathBuf,
}

impl ResultsLogger {
    /// Create a new logger with the specified output directory
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    fn data_dir(&self) -> PathBuf {
        self.output_dir.join("data")
    }

    /// Ensure output directories exist
    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(self.data_dir())
            .context("Failed to create data directory")?;
        Ok(())
    }

    /// Save the generated table
    pub fn save_dataset(&self, dataset: &Dataset) -> Result<PathBuf> {
        self.write_json("urssaf_dataset", dataset)
    }

    /// Save the analysis bundle
    pub fn save_bundle(&self, bundle: &AnalysisBundle) -> Result<PathBuf> {
        self.write_json("urssaf_analysis", bundle)
    }

    fn write_json<T: Serialize>(&self, prefix: &str, value: &T) -> Result<PathBuf> {
        self.ensure_dirs()?;

        let json = serde_json::to_string_pretty(value)
            .context("Failed to serialize results")?;

        let (path, mut file) = self.create_unique(prefix)?;
        file.write_all(json.as_bytes())
            .context("Failed to write results file")?;

        info!("Saved to: {}", path.display());
        Ok(path)
    }

    /// Open a fresh `<prefix>_<timestamp>[_<n>].json`; never reuses an existing file
    fn create_unique(&self, prefix: &str) -> Result<(PathBuf, File)> {
        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S_%3f");

        for attempt in 0u32.. {
            let name = match attempt {
                0 => format!("{}_{}.json", prefix, timestamp),
                n => format!("{}_{}_{}.json", prefix, timestamp, n),
            };
            let path = self.data_dir().join(name);

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    debug!("{} already exists, trying next suffix", path.display());
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("Failed to create {}", path.display()))
                }
            }
        }

        anyhow::bail!("No free file name for {}", prefix)
    }

    /// Load a dataset saved by `save_dataset`
    pub fn load_dataset(path: &Path) -> Result<Dataset> {
        read_json(path, "dataset")
    }

    /// Load a bundle saved by `save_bundle`
    pub fn load_bundle(path: &Path) -> Result<AnalysisBundle> {
        read_json(path, "analysis")
    }
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {} file", what))
}

/// Emit headline figures of a bundle through the logger
pub fn log_highlights(bundle: &AnalysisBundle) {
    let ranking = &bundle.ranking;
    info!("Top contributors in {}:", ranking.year);
    for entry in &ranking.entries {
        info!(
            rank = entry.rank,
            company = %entry.company,
            contributions_meur = entry.social_contributions_meur.round(),
            ratio_pct = %format!("{:.1}", entry.social_payroll_ratio_pct),
            "ranking"
        );
    }

    for report in &bundle.company_reports {
        info!(
            company = %report.company,
            sector = %report.sector,
            year = report.latest_year,
            contributions_meur = report.latest.social_contributions_meur.round(),
            sector_avg_ratio_pct = %format!("{:.1}", report.sector_comparison.sector_avg_ratio_pct),
            "company report"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::report::build_bundle;
    use crate::config::AnalysisConfig;
    use crate::simulation::Orchestrator;

    #[test]
    fn test_dataset_survives_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = Orchestrator::new(AnalysisConfig::quick_test())
            .run_for(&["Hermès", "Orange"])
            .unwrap();

        let logger = ResultsLogger::new(dir.path());
        let path = logger.save_dataset(&dataset).unwrap();
        assert!(path.starts_with(dir.path().join("data")));

        let loaded = ResultsLogger::load_dataset(&path).unwrap();
        assert_eq!(loaded.len(), dataset.len());
        assert_eq!(loaded.companies(), vec!["Hermès", "Orange"]);
        assert_eq!(loaded.records()[3].sector, dataset.records()[3].sector);
    }

    #[test]
    fn test_back_to_back_saves_keep_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let logger = ResultsLogger::new(dir.path());
        let mut orchestrator = Orchestrator::new(AnalysisConfig::quick_test());
        let hermes = orchestrator.run_for(&["Hermès"]).unwrap();
        let orange = orchestrator.run_for(&["Orange"]).unwrap();

        let first = logger.save_dataset(&hermes).unwrap();
        let second = logger.save_dataset(&orange).unwrap();
        assert_ne!(first, second);

        assert_eq!(ResultsLogger::load_dataset(&first).unwrap().companies(), vec!["Hermès"]);
        assert_eq!(ResultsLogger::load_dataset(&second).unwrap().companies(), vec!["Orange"]);
        assert_eq!(fs::read_dir(logger.data_dir()).unwrap().count(), 2);
    }

    #[test]
    fn test_bundle_survives_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = AnalysisConfig::reproducible(42);
        let dataset = Orchestrator::new(config.clone()).run().unwrap();
        let bundle = build_bundle(&dataset, &config).unwrap();

        let logger = ResultsLogger::new(dir.path());
        let path = logger.save_bundle(&bundle).unwrap();
        let file_name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(file_name.starts_with("urssaf_analysis_"));

        let loaded = ResultsLogger::load_bundle(&path).unwrap();
        assert_eq!(loaded, bundle);

        log_highlights(&loaded);
    }

    #[test]
    fn test_bundle_rebuilt_from_saved_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let config = AnalysisConfig::reproducible(3);
        let dataset = Orchestrator::new(config.clone()).run().unwrap();
        let original = build_bundle(&dataset, &config).unwrap();

        let logger = ResultsLogger::new(dir.path());
        let path = logger.save_dataset(&dataset).unwrap();
        let rebuilt = build_bundle(&ResultsLogger::load_dataset(&path).unwrap(), &config).unwrap();

        assert_eq!(rebuilt.global, original.global);
        assert_eq!(rebuilt.company_reports, original.company_reports);
        assert_eq!(rebuilt.comparison, original.comparison);
        assert_eq!(rebuilt.ranking, original.ranking);
    }

    #[test]
    fn test_load_bundle_rejects_dataset_file() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = Orchestrator::new(AnalysisConfig::quick_test())
            .run_for(&["Orange"])
            .unwrap();

        let path = ResultsLogger::new(dir.path()).save_dataset(&dataset).unwrap();
        let err = ResultsLogger::load_bundle(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse analysis file"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ResultsLogger::load_dataset(&dir.path().join("nope.json")).is_err());
    }
}
