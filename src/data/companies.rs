//! Company registry and sector parameters

use crate::error::{AnalysisError, AnalysisResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Business sector of a registry company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sector {
    #[serde(rename = "Luxe")]
    Luxury,
    #[serde(rename = "Cosmétiques")]
    Cosmetics,
    #[serde(rename = "Énergie")]
    Energy,
    #[serde(rename = "Pharmaceutique")]
    Pharmaceutical,
    #[serde(rename = "Industrie")]
    Industry,
    #[serde(rename = "Banque")]
    Banking,
    #[serde(rename = "Équipement électrique")]
    ElectricalEquipment,
    #[serde(rename = "Construction")]
    Construction,
    #[serde(rename = "Agroalimentaire")]
    FoodProcessing,
    #[serde(rename = "Aéronautique")]
    Aerospace,
    #[serde(rename = "Optique")]
    Optics,
    #[serde(rename = "Assurance")]
    Insurance,
    #[serde(rename = "Distribution")]
    Retail,
    #[serde(rename = "Télécommunications")]
    Telecommunications,
    #[serde(rename = "Spiritueux")]
    Spirits,
    #[serde(rename = "Semi-conducteurs")]
    Semiconductors,
    #[serde(rename = "Services informatiques")]
    ItServices,
    #[serde(rename = "Communication")]
    Communication,
    #[serde(rename = "Automobile")]
    Automotive,
}

impl Sector {
    /// French display label
    pub fn label(&self) -> &'static str {
        match self {
            Sector::Luxury => "Luxe",
            Sector::Cosmetics => "Cosmétiques",
            Sector::Energy => "Énergie",
            Sector::Pharmaceutical => "Pharmaceutique",
            Sector::Industry => "Industrie",
            Sector::Banking => "Banque",
            Sector::ElectricalEquipment => "Équipement électrique",
            Sector::Construction => "Construction",
            Sector::FoodProcessing => "Agroalimentaire",
            Sector::Aerospace => "Aéronautique",
            Sector::Optics => "Optique",
            Sector::Insurance => "Assurance",
            Sector::Retail => "Distribution",
            Sector::Telecommunications => "Télécommunications",
            Sector::Spirits => "Spiritueux",
            Sector::Semiconductors => "Semi-conducteurs",
            Sector::ItServices => "Services informatiques",
            Sector::Communication => "Communication",
            Sector::Automotive => "Automobile",
        }
    }

    /// Share of payroll paid as social contributions
    pub fn contribution_share(&self) -> f64 {
        match self {
            Sector::Banking => 0.55,
            Sector::Energy => 0.50,
            Sector::Luxury => 0.48,
            Sector::Automotive => 0.52,
            _ => 0.50,
        }
    }

    /// Average annual salary in thousands of euros
    pub fn average_salary_keur(&self) -> f64 {
        match self {
            Sector::Banking => 55.0,
            Sector::Luxury => 50.0,
            Sector::Energy => 60.0,
            Sector::Automotive => 45.0,
            _ => 48.0,
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current profile of a registry company
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyProfile {
    pub name: &'static str,
    pub sector: Sector,
    /// Current headcount
    pub employees: u32,
    /// Current payroll in millions of euros
    pub payroll_meur: f64,
}

impl CompanyProfile {
    const fn new(name: &'static str, sector: Sector, employees: u32, payroll_meur: f64) -> Self {
        Self {
            name,
            sector,
            employees,
            payroll_meur,
        }
    }
}

/// Large French employers covered by the analysis, in reporting order
pub static REGISTRY: [CompanyProfile; 25] = [
    CompanyProfile::new("LVMH", Sector::Luxury, 150_000, 7_500.0),
    CompanyProfile::new("L'Oréal", Sector::Cosmetics, 85_000, 4_500.0),
    CompanyProfile::new("TotalEnergies", Sector::Energy, 105_000, 6_800.0),
    CompanyProfile::new("Sanofi", Sector::Pharmaceutical, 100_000, 5_200.0),
    CompanyProfile::new("Air Liquide", Sector::Industry, 65_000, 3_200.0),
    CompanyProfile::new("BNP Paribas", Sector::Banking, 190_000, 12_500.0),
    CompanyProfile::new("Kering", Sector::Luxury, 38_000, 2_200.0),
    CompanyProfile::new("Hermès", Sector::Luxury, 18_000, 1_200.0),
    CompanyProfile::new("Schneider Electric", Sector::ElectricalEquipment, 135_000, 5_800.0),
    CompanyProfile::new("Vinci", Sector::Construction, 220_000, 9_800.0),
    CompanyProfile::new("Danone", Sector::FoodProcessing, 100_000, 4_200.0),
    CompanyProfile::new("Safran", Sector::Aerospace, 81_000, 3_800.0),
    CompanyProfile::new("EssilorLuxottica", Sector::Optics, 180_000, 6_500.0),
    CompanyProfile::new("AXA", Sector::Insurance, 95_000, 5_500.0),
    CompanyProfile::new("Société Générale", Sector::Banking, 138_000, 7_800.0),
    CompanyProfile::new("Carrefour", Sector::Retail, 320_000, 8_500.0),
    CompanyProfile::new("Orange", Sector::Telecommunications, 139_000, 6_200.0),
    CompanyProfile::new("Engie", Sector::Energy, 170_000, 7_200.0),
    CompanyProfile::new("Pernod Ricard", Sector::Spirits, 19_000, 1_100.0),
    CompanyProfile::new("STMicroelectronics", Sector::Semiconductors, 48_000, 2_200.0),
    CompanyProfile::new("Capgemini", Sector::ItServices, 325_000, 14_500.0),
    CompanyProfile::new("Legrand", Sector::ElectricalEquipment, 38_000, 1_800.0),
    CompanyProfile::new("Publicis", Sector::Communication, 101_000, 4_800.0),
    CompanyProfile::new("Renault", Sector::Automotive, 170_000, 7_500.0),
    CompanyProfile::new("PSA", Sector::Automotive, 210_000, 9_200.0),
];

/// All registry companies
pub fn all() -> &'static [CompanyProfile] {
    &REGISTRY
}

/// Find a company by exact name
pub fn lookup(name: &str) -> AnalysisResult<&'static CompanyProfile> {
    REGISTRY
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| AnalysisError::UnknownCompany(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        let lvmh = lookup("LVMH").unwrap();
        assert_eq!(lvmh.sector, Sector::Luxury);
        assert_eq!(lvmh.employees, 150_000);

        assert_eq!(
            lookup("Lvmh"),
            Err(AnalysisError::UnknownCompany("Lvmh".to_string()))
        );
    }

    #[test]
    fn test_registry_names_are_unique() {
        let mut names: Vec<_> = all().iter().map(|c| c.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 25);
    }

    #[test]
    fn test_sector_parameters() {
        assert_eq!(Sector::Banking.contribution_share(), 0.55);
        assert_eq!(Sector::Automotive.contribution_share(), 0.52);
        assert_eq!(Sector::Optics.contribution_share(), 0.50);
        assert_eq!(Sector::Energy.average_salary_keur(), 60.0);
        assert_eq!(Sector::Spirits.average_salary_keur(), 48.0);
    }

    #[test]
    fn test_sector_serializes_as_label() {
        let json = serde_json::to_string(&Sector::ElectricalEquipment).unwrap();
        assert_eq!(json, "\"Équipement électrique\"");
        assert_eq!(Sector::Retail.to_string(), "Distribution");
    }
}
