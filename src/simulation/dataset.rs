//! Company/year table and derived ratios

use crate::data::Sector;
use serde::{Deserialize, Serialize};

/// One row of the analysis table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyYearRecord {
    pub company: String,
    pub sector: Sector,
    pub year: u16,
    /// Social contributions (M€)
    pub social_contributions_meur: f64,
    /// Payroll (M€)
    pub payroll_meur: f64,
    pub employees: f64,
    /// Official social contribution rate (%)
    pub social_rate_pct: f64,
    /// Average salary (€)
    pub avg_salary_eur: f64,
    /// Contributions / payroll (%)
    pub social_payroll_ratio_pct: f64,
    /// Contributions per employee (€)
    pub social_per_employee_eur: f64,
    /// Payroll per employee (€)
    pub payroll_per_employee_eur: f64,
}

impl CompanyYearRecord {
    /// Build a row from raw values and compute the derived columns
    pub fn new(
        company: &str,
        sector: Sector,
        year: u16,
        social_contributions_meur: f64,
        payroll_meur: f64,
        employees: f64,
        social_rate_pct: f64,
    ) -> Self {
        let per_head = |meur: f64| {
            if employees > 0.0 {
                meur * 1_000_000.0 / employees
            } else {
                0.0
            }
        };

        let social_payroll_ratio_pct = if payroll_meur > 0.0 {
            social_contributions_meur / payroll_meur * 100.0
        } else {
            0.0
        };

        Self {
            company: company.to_string(),
            sector,
            year,
            social_contributions_meur,
            payroll_meur,
            employees,
            social_rate_pct,
            avg_salary_eur: per_head(payroll_meur),
            social_payroll_ratio_pct,
            social_per_employee_eur: per_head(social_contributions_meur),
            payroll_per_employee_eur: per_head(payroll_meur),
        }
    }
}

/// Numeric column of the analysis table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    SocialContributions,
    Payroll,
    Employees,
    SocialRate,
    AvgSalary,
    SocialPayrollRatio,
    SocialPerEmployee,
    PayrollPerEmployee,
}

impl Metric {
    /// Columns covered by the descriptive statistics
    pub const DESCRIBED: [Metric; 5] = [
        Metric::SocialContributions,
        Metric::Payroll,
        Metric::Employees,
        Metric::SocialPayrollRatio,
        Metric::SocialPerEmployee,
    ];

    /// Indicators compared across companies
    pub const COMPARED: [Metric; 6] = [
        Metric::SocialContributions,
        Metric::Payroll,
        Metric::Employees,
        Metric::SocialPayrollRatio,
        Metric::AvgSalary,
        Metric::SocialPerEmployee,
    ];

    pub fn value(&self, record: &CompanyYearRecord) -> f64 {
        match self {
            Metric::SocialContributions => record.social_contributions_meur,
            Metric::Payroll => record.payroll_meur,
            Metric::Employees => record.employees,
            Metric::SocialRate => record.social_rate_pct,
            Metric::AvgSalary => record.avg_salary_eur,
            Metric::SocialPayrollRatio => record.social_payroll_ratio_pct,
            Metric::SocialPerEmployee => record.social_per_employee_eur,
            Metric::PayrollPerEmployee => record.payroll_per_employee_eur,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::SocialContributions => "Social Contributions (M€)",
            Metric::Payroll => "Payroll (M€)",
            Metric::Employees => "Employees",
            Metric::SocialRate => "Social Rate (%)",
            Metric::AvgSalary => "Avg Salary (€)",
            Metric::SocialPayrollRatio => "Social/Payroll Ratio (%)",
            Metric::SocialPerEmployee => "Social per Employee (€)",
            Metric::PayrollPerEmployee => "Payroll per Employee (€)",
        }
    }
}

/// Full analysis table, company-major and year-minor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<CompanyYearRecord>,
}

impl Dataset {
    pub fn new(records: Vec<CompanyYearRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CompanyYearRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Company names in first-seen order
    pub fn companies(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for record in &self.records {
            if !names.contains(&record.company.as_str()) {
                names.push(&record.company);
            }
        }
        names
    }

    /// Sectors in first-seen order
    pub fn sectors(&self) -> Vec<Sector> {
        let mut sectors = Vec::new();
        for record in &self.records {
            if !sectors.contains(&record.sector) {
                sectors.push(record.sector);
            }
        }
        sectors
    }

    pub fn latest_year(&self) -> Option<u16> {
        self.records.iter().map(|r| r.year).max()
    }

    pub fn for_company<'a>(
        &'a self,
        company: &'a str,
    ) -> impl Iterator<Item = &'a CompanyYearRecord> + 'a {
        self.records.iter().filter(move |r| r.company == company)
    }

    pub fn for_year(&self, year: u16) -> impl Iterator<Item = &CompanyYearRecord> + '_ {
        self.records.iter().filter(move |r| r.year == year)
    }

    pub fn for_sector_in_year(
        &self,
        sector: Sector,
        year: u16,
    ) -> impl Iterator<Item = &CompanyYearRecord> + '_ {
        self.for_year(year).filter(move |r| r.sector == sector)
    }

    /// The `n` largest rows of a year by `metric`, largest first
    pub fn top_by(&self, metric: Metric, year: u16, n: usize) -> Vec<&CompanyYearRecord> {
        let mut rows: Vec<&CompanyYearRecord> = self.for_year(year).collect();
        rows.sort_by(|a, b| metric.value(b).total_cmp(&metric.value(a)));
        rows.truncate(n);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(company: &str, sector: Sector, year: u16, social: f64) -> CompanyYearRecord {
        CompanyYearRecord::new(company, sector, year, social, 2.0 * social, 1_000.0, 50.0)
    }

    #[test]
    fn test_derived_metrics() {
        let record = CompanyYearRecord::new("LVMH", Sector::Luxury, 2025, 2250.0, 4400.0, 155_000.0, 54.5);

        assert!((record.social_payroll_ratio_pct - 51.136_363_636).abs() < 1e-6);
        assert!((record.avg_salary_eur - 28_387.096_774).abs() < 1e-3);
        assert_eq!(record.avg_salary_eur, record.payroll_per_employee_eur);
        assert!((record.social_per_employee_eur - 14_516.129_032).abs() < 1e-3);
    }

    #[test]
    fn test_zero_denominators() {
        let record = CompanyYearRecord::new("X", Sector::Industry, 2002, 10.0, 0.0, 0.0, 45.0);
        assert_eq!(record.avg_salary_eur, 0.0);
        assert_eq!(record.social_payroll_ratio_pct, 0.0);
        assert_eq!(record.social_per_employee_eur, 0.0);
    }

    #[test]
    fn test_queries() {
        let dataset = Dataset::new(vec![
            row("A", Sector::Banking, 2002, 10.0),
            row("A", Sector::Banking, 2003, 30.0),
            row("B", Sector::Luxury, 2002, 20.0),
            row("B", Sector::Luxury, 2003, 5.0),
            row("C", Sector::Banking, 2003, 30.0),
        ]);

        assert_eq!(dataset.companies(), vec!["A", "B", "C"]);
        assert_eq!(dataset.sectors(), vec![Sector::Banking, Sector::Luxury]);
        assert_eq!(dataset.latest_year(), Some(2003));
        assert_eq!(dataset.for_company("B").count(), 2);
        assert_eq!(dataset.for_sector_in_year(Sector::Banking, 2003).count(), 2);

        let top: Vec<&str> = dataset
            .top_by(Metric::SocialContributions, 2003, 2)
            .iter()
            .map(|r| r.company.as_str())
            .collect();
        // ties keep table order
        assert_eq!(top, vec!["A", "C"]);
    }

    #[test]
    fn test_top_by_uses_requested_metric() {
        let dataset = Dataset::new(vec![
            CompanyYearRecord::new("Small", Sector::Spirits, 2025, 10.0, 100.0, 500.0, 54.5),
            CompanyYearRecord::new("Big", Sector::Retail, 2025, 50.0, 200.0, 300_000.0, 54.5),
        ]);

        let by_ratio: Vec<&str> = dataset
            .top_by(Metric::SocialPayrollRatio, 2025, 2)
            .iter()
            .map(|r| r.company.as_str())
            .collect();
        assert_eq!(by_ratio, vec!["Big", "Small"]);

        let by_salary = dataset.top_by(Metric::AvgSalary, 2025, 1);
        assert_eq!(by_salary[0].company, "Small");
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert_eq!(dataset.latest_year(), None);
        assert!(dataset.top_by(Metric::Payroll, 2025, 10).is_empty());
    }
}
