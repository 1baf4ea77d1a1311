//! Official contribution rates and macroeconomic shocks

use crate::error::{AnalysisError, AnalysisResult};

/// Official social contribution rate, in % of payroll
pub const SOCIAL_RATES: [(u16, f64); 24] = [
    (2002, 45.0),
    (2003, 45.5),
    (2004, 45.8),
    (2005, 46.0),
    (2006, 46.2),
    (2007, 46.5),
    (2008, 46.8),
    (2009, 47.0),
    (2010, 47.2),
    (2011, 47.5),
    (2012, 48.0),
    (2013, 48.5),
    (2014, 49.0),
    (2015, 49.5),
    (2016, 50.0),
    (2017, 50.5),
    (2018, 51.0),
    (2019, 51.5),
    (2020, 52.0),
    (2021, 52.5),
    (2022, 53.0),
    (2023, 53.5),
    (2024, 54.0),
    (2025, 54.5),
];

/// Years hit by the 2008 financial crisis
pub const FINANCIAL_CRISIS_YEARS: [u16; 2] = [2008, 2009];

/// Year hit by the COVID-19 shock
pub const COVID_YEAR: u16 = 2020;

/// Look up the official rate for a year
pub fn social_rate(year: u16) -> AnalysisResult<f64> {
    SOCIAL_RATES
        .iter()
        .find(|(y, _)| *y == year)
        .map(|(_, rate)| *rate)
        .ok_or(AnalysisError::UnknownYear(year))
}

/// Macroeconomic shock affecting a year, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shock {
    FinancialCrisis,
    Covid,
}

impl Shock {
    pub fn for_year(year: u16) -> Option<Self> {
        if FINANCIAL_CRISIS_YEARS.contains(&year) {
            Some(Shock::FinancialCrisis)
        } else if year == COVID_YEAR {
            Some(Shock::Covid)
        } else {
            None
        }
    }
}
