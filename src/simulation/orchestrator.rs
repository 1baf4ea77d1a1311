//! Dataset Orchestrator
//!
//! Drives the series generator over the registry and assembles the
//! company/year table with its derived ratios.

use crate::config::AnalysisConfig;
use crate::data::{companies, social_rate, CompanyProfile, YearlySeries};
use crate::error::{AnalysisError, AnalysisResult};
use crate::simulation::dataset::{CompanyYearRecord, Dataset};
use crate::simulation::generator::SeriesGenerator;
use anyhow::Result;
use tracing::{debug, info, warn};

/// Main dataset orchestrator
pub struct Orchestrator {
    config: AnalysisConfig,
    generator: SeriesGenerator,
}

impl Orchestrator {
    /// Create a new orchestrator with the given configuration
    pub fn new(config: AnalysisConfig) -> Self {
        let generator = SeriesGenerator::new(&config);
        Self { config, generator }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Build the table for every registry company
    pub fn run(&mut self) -> Result<Dataset> {
        let names: Vec<&str> = companies::all().iter().map(|c| c.name).collect();
        self.run_for(&names)
    }

    /// Build the table for a subset of companies, in the given order.
    /// Repeated names are generated once, at their first position.
    pub fn run_for(&mut self, names: &[&str]) -> Result<Dataset> {
        self.config.validate()?;

        let mut unique: Vec<&str> = Vec::with_capacity(names.len());
        for name in names {
            if unique.contains(name) {
                warn!("Ignoring repeated company {}", name);
            } else {
                unique.push(*name);
            }
        }
        let names = unique;

        info!(
            "Generating data for {} companies ({}-{})",
            names.len(),
            self.config.start_year,
            self.config.end_year
        );

        let mut records = Vec::with_capacity(names.len() * self.config.years().count());

        for (i, name) in names.iter().enumerate() {
            let profile = companies::lookup(name)?;
            debug!("Processing {} ({})", profile.name, profile.sector);

            records.extend(self.company_records(profile)?);

            if (i + 1) % 5 == 0 || i + 1 == names.len() {
                info!("Progress: {}/{} companies", i + 1, names.len());
            }
        }

        info!("Dataset complete: {} rows", records.len());
        Ok(Dataset::new(records))
    }

    fn company_records(&mut self, profile: &CompanyProfile) -> AnalysisResult<Vec<CompanyYearRecord>> {
        let social = self.generator.social_contributions(profile.name)?;
        let payroll = self.generator.payroll(profile.name)?;
        let employees = self.generator.employees(profile.name)?;

        self.config
            .years()
            .map(|year| -> AnalysisResult<CompanyYearRecord> {
                Ok(CompanyYearRecord::new(
                    profile.name,
                    profile.sector,
                    year,
                    value_at(&social, profile, year)?,
                    value_at(&payroll, profile, year)?,
                    value_at(&employees, profile, year)?,
                    social_rate(year)?,
                ))
            })
            .collect()
    }
}

fn value_at(series: &YearlySeries, profile: &CompanyProfile, year: u16) -> AnalysisResult<f64> {
    series
        .get(year)
        .ok_or_else(|| AnalysisError::NoData(format!("{} in {}", profile.name, year)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Sector;

    #[test]
    fn test_orchestrator_full_run() {
        let mut orchestrator = Orchestrator::new(AnalysisConfig::reproducible(42));
        let dataset = orchestrator.run().unwrap();

        assert_eq!(dataset.len(), 25 * 24);
        assert_eq!(dataset.companies().len(), 25);
        assert_eq!(dataset.latest_year(), Some(2025));

        let first = &dataset.records()[0];
        assert_eq!(first.company, "LVMH");
        assert_eq!(first.year, 2002);
        assert_eq!(first.social_contributions_meur, 450.0);
        assert_eq!(first.payroll_meur, 850.0);
        assert_eq!(first.employees, 45_000.0);
        assert_eq!(first.social_rate_pct, 45.0);
    }

    #[test]
    fn test_rows_are_company_major() {
        let mut orchestrator = Orchestrator::new(AnalysisConfig::quick_test());
        let dataset = orchestrator.run_for(&["Renault", "Kering"]).unwrap();

        let keys: Vec<(&str, u16)> = dataset
            .records()
            .iter()
            .map(|r| (r.company.as_str(), r.year))
            .collect();
        assert_eq!(keys.len(), 10);
        assert_eq!(keys[0], ("Renault", 2018));
        assert_eq!(keys[4], ("Renault", 2022));
        assert_eq!(keys[5], ("Kering", 2018));
        assert!(dataset.records().iter().all(|r| r.sector == Sector::Automotive || r.company == "Kering"));
    }

    #[test]
    fn test_synthesized_values_respect_floors() {
        let mut orchestrator = Orchestrator::new(AnalysisConfig::reproducible(7));
        let dataset = orchestrator.run().unwrap();

        for record in dataset.records() {
            assert!(record.social_contributions_meur >= 10.0);
            assert!(record.payroll_meur >= 100.0);
            assert!(record.employees >= 100.0);
        }
    }

    #[test]
    fn test_reproducible_runs() {
        let a = Orchestrator::new(AnalysisConfig::reproducible(11)).run().unwrap();
        let b = Orchestrator::new(AnalysisConfig::reproducible(11)).run().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_repeated_companies_generate_once() {
        let mut orchestrator = Orchestrator::new(AnalysisConfig::quick_test());
        let dataset = orchestrator.run_for(&["LVMH", "Danone", "LVMH"]).unwrap();

        assert_eq!(dataset.len(), 10);
        assert_eq!(dataset.companies(), vec!["LVMH", "Danone"]);
        assert_eq!(dataset.for_company("LVMH").count(), 5);
        assert_eq!(dataset.for_year(2022).count(), 2);
    }

    #[test]
    fn test_unknown_company_is_rejected() {
        let mut orchestrator = Orchestrator::new(AnalysisConfig::quick_test());
        let err = orchestrator.run_for(&["LVMH", "Acme"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<AnalysisError>(),
            Some(&AnalysisError::UnknownCompany("Acme".to_string()))
        );
    }
}
