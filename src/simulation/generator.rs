//! Synthetic Series Generator
//!
//! Produces per-company yearly series for contributions, payroll and
//! headcount. Curated history is used where it exists; everything else is
//! compounded from the company's current profile with crisis shocks and
//! gaussian noise.

use crate::config::AnalysisConfig;
use crate::data::{companies, historical_series, CompanyProfile, SeriesKind, Shock, YearlySeries};
use crate::error::{AnalysisError, AnalysisResult};
use rand::prelude::*;
use rand_distr::Normal;
use std::ops::RangeInclusive;
use tracing::{debug, warn};

/// Mean and standard deviation of the yearly growth draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regime {
    pub mean: f64,
    pub std_dev: f64,
}

/// Which way the exponent runs from the first year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compounding {
    /// `(1 + g)^(year - start)`: base is the first-year level
    Forward,
    /// `(1 + g)^(start - year)`: base is the current level, discounted forward
    Backward,
}

/// Parameters of one synthesized metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthModel {
    pub regime: Regime,
    /// Replaces `regime` from the given year onward
    pub late_regime: Option<(u16, Regime)>,
    pub financial_crisis_penalty: f64,
    pub covid_penalty: f64,
    /// Noise standard deviation as a fraction of the trend value
    pub noise_ratio: f64,
    pub floor: f64,
    pub compounding: Compounding,
}

impl GrowthModel {
    pub const SOCIAL_CONTRIBUTIONS: GrowthModel = GrowthModel {
        regime: Regime { mean: 0.04, std_dev: 0.02 },
        late_regime: None,
        financial_crisis_penalty: 0.10,
        covid_penalty: 0.08,
        noise_ratio: 0.10,
        floor: 10.0,
        compounding: Compounding::Forward,
    };

    pub const PAYROLL: GrowthModel = GrowthModel {
        regime: Regime { mean: 0.03, std_dev: 0.02 },
        late_regime: None,
        financial_crisis_penalty: 0.08,
        covid_penalty: 0.06,
        noise_ratio: 0.10,
        floor: 100.0,
        compounding: Compounding::Forward,
    };

    pub const EMPLOYEES: GrowthModel = GrowthModel {
        regime: Regime { mean: 0.02, std_dev: 0.01 },
        late_regime: Some((2010, Regime { mean: 0.01, std_dev: 0.005 })),
        financial_crisis_penalty: 0.03,
        covid_penalty: 0.02,
        noise_ratio: 0.05,
        floor: 100.0,
        compounding: Compounding::Backward,
    };

    pub fn for_kind(kind: SeriesKind) -> &'static GrowthModel {
        match kind {
            SeriesKind::SocialContributions => &Self::SOCIAL_CONTRIBUTIONS,
            SeriesKind::Payroll => &Self::PAYROLL,
            SeriesKind::Employees => &Self::EMPLOYEES,
        }
    }

    fn regime_for(&self, year: u16) -> Regime {
        match self.late_regime {
            Some((from, late)) if year >= from => late,
            _ => self.regime,
        }
    }

    fn shock_penalty(&self, year: u16) -> f64 {
        match Shock::for_year(year) {
            Some(Shock::FinancialCrisis) => self.financial_crisis_penalty,
            Some(Shock::Covid) => self.covid_penalty,
            None => 0.0,
        }
    }
}

/// Starting level of a synthesized series, derived from the current profile
pub fn base_level(kind: SeriesKind, profile: &CompanyProfile) -> f64 {
    match kind {
        SeriesKind::SocialContributions => profile.payroll_meur * profile.sector.contribution_share(),
        // k€ per head -> M€
        SeriesKind::Payroll => {
            profile.employees as f64 * profile.sector.average_salary_keur() * 1_000.0 / 1_000_000.0
        }
        SeriesKind::Employees => profile.employees as f64,
    }
}

/// Seeded generator for company series
pub struct SeriesGenerator {
    rng: StdRng,
    years: RangeInclusive<u16>,
}

impl SeriesGenerator {
    /// Create a generator for the configured year range
    pub fn new(config: &AnalysisConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        debug!("Series generator seed: {}", seed);

        Self {
            rng: StdRng::seed_from_u64(seed),
            years: config.years(),
        }
    }

    /// Social contributions in M€
    pub fn social_contributions(&mut self, company: &str) -> AnalysisResult<YearlySeries> {
        self.series(SeriesKind::SocialContributions, company)
    }

    /// Payroll in M€
    pub fn payroll(&mut self, company: &str) -> AnalysisResult<YearlySeries> {
        self.series(SeriesKind::Payroll, company)
    }

    /// Headcount
    pub fn employees(&mut self, company: &str) -> AnalysisResult<YearlySeries> {
        self.series(SeriesKind::Employees, company)
    }

    /// Curated series when on file, synthesized otherwise
    pub fn series(&mut self, kind: SeriesKind, company: &str) -> AnalysisResult<YearlySeries> {
        let profile = companies::lookup(company)?;
        let curated = historical_series(kind, company);
        self.resolve(kind, profile, curated)
    }

    fn resolve(
        &mut self,
        kind: SeriesKind,
        profile: &CompanyProfile,
        curated: Option<YearlySeries>,
    ) -> AnalysisResult<YearlySeries> {
        if let Some(history) = curated {
            if history.covers(self.years.clone()) {
                return Ok(history
                    .iter()
                    .filter(|(year, _)| self.years.contains(year))
                    .collect());
            }
            warn!(
                "Curated {:?} series for {} is incomplete, falling back to synthesis",
                kind, profile.name
            );
        }

        self.synthesize(GrowthModel::for_kind(kind), base_level(kind, profile))
    }

    /// Compound `base` over the year range following `model`
    pub fn synthesize(&mut self, model: &GrowthModel, base: f64) -> AnalysisResult<YearlySeries> {
        let start = *self.years.start() as i32;
        let mut series = YearlySeries::new();

        for year in self.years.clone() {
            let regime = model.regime_for(year);
            let growth = self.normal(regime.mean, regime.std_dev)? - model.shock_penalty(year);

            let exponent = match model.compounding {
                Compounding::Forward => year as i32 - start,
                Compounding::Backward => start - year as i32,
            };
            let trend = base * (1.0 + growth).powi(exponent);
            let noisy = trend + self.normal(0.0, trend.abs() * model.noise_ratio)?;

            series.insert(year, noisy.max(model.floor));
        }

        Ok(series)
    }

    fn normal(&mut self, mean: f64, std_dev: f64) -> AnalysisResult<f64> {
        let dist = Normal::new(mean, std_dev).map_err(|e| AnalysisError::Distribution {
            mean,
            std_dev,
            reason: e.to_string(),
        })?;
        Ok(dist.sample(&mut self.rng))
    }
}
