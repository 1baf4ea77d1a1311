//! Report assembly
//!
//! Builds the global, per-company and comparative analyses from a dataset.
//! Reports are plain serializable values; rendering is left to the caller.

use crate::analytics::metrics::{
    ColumnSummary, Metric, MetricsCalculator, SectorSeries, SectorSummary, Trend, YearValue,
};
use crate::config::AnalysisConfig;
use crate::data::{companies, Sector};
use crate::error::{AnalysisError, AnalysisResult};
use crate::simulation::{CompanyYearRecord, Dataset};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One entry of a contributions ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: usize,
    pub company: String,
    pub sector: Sector,
    pub social_contributions_meur: f64,
    pub social_payroll_ratio_pct: f64,
    pub social_per_employee_eur: f64,
}

/// Largest contributors of a year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub year: u16,
    pub entries: Vec<RankingEntry>,
}

/// Cross-company overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalAnalysis {
    pub latest_year: u16,
    pub sector_contributions: Vec<SectorSeries>,
    pub sector_ratio_distribution: Vec<SectorSummary>,
    pub top_contributors: Ranking,
    pub social_rate_evolution: Vec<YearValue>,
    pub statistics: Vec<ColumnSummary>,
}

/// Company values against its sector in the latest year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorComparison {
    pub sector: Sector,
    pub company_ratio_pct: f64,
    pub sector_avg_ratio_pct: f64,
    pub company_social_per_employee_eur: f64,
    pub sector_avg_social_per_employee_eur: f64,
}

/// Detailed report for one company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyReport {
    pub company: String,
    pub sector: Sector,
    pub latest_year: u16,
    pub latest: CompanyYearRecord,
    pub sector_comparison: SectorComparison,
    pub contribution_trend: Trend,
    pub social_contributions: Vec<YearValue>,
    pub payroll: Vec<YearValue>,
    pub social_payroll_ratio: Vec<YearValue>,
    pub official_rate: Vec<YearValue>,
    pub employees: Vec<YearValue>,
    pub avg_salary: Vec<YearValue>,
    pub social_per_employee: Vec<YearValue>,
}

/// One company's series for a compared indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySeries {
    pub company: String,
    pub points: Vec<YearValue>,
}

/// A compared indicator across the selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorComparison {
    pub metric: Metric,
    pub label: String,
    pub series: Vec<CompanySeries>,
}

/// Side-by-side analysis of several companies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparativeAnalysis {
    pub companies: Vec<String>,
    pub latest_year: u16,
    pub latest: Vec<CompanyYearRecord>,
    pub indicators: Vec<IndicatorComparison>,
}

/// Everything produced by a full analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisBundle {
    pub generated_at: String,
    pub global: GlobalAnalysis,
    pub company_reports: Vec<CompanyReport>,
    pub comparison: ComparativeAnalysis,
    pub ranking: Ranking,
}

fn latest_year(dataset: &Dataset) -> AnalysisResult<u16> {
    dataset
        .latest_year()
        .ok_or_else(|| AnalysisError::NoData("empty dataset".to_string()))
}

/// Top `n` contributors of the latest year
pub fn ranking(dataset: &Dataset, n: usize) -> AnalysisResult<Ranking> {
    let year = latest_year(dataset)?;

    let entries = dataset
        .top_by(Metric::SocialContributions, year, n)
        .into_iter()
        .enumerate()
        .map(|(i, r)| RankingEntry {
            rank: i + 1,
            company: r.company.clone(),
            sector: r.sector,
            social_contributions_meur: r.social_contributions_meur,
            social_payroll_ratio_pct: r.social_payroll_ratio_pct,
            social_per_employee_eur: r.social_per_employee_eur,
        })
        .collect();

    Ok(Ranking { year, entries })
}

/// Sector trends, ratio distribution, top contributors and statistics
pub fn global_analysis(dataset: &Dataset, top_n: usize) -> AnalysisResult<GlobalAnalysis> {
    let latest_year = latest_year(dataset)?;

    Ok(GlobalAnalysis {
        latest_year,
        sector_contributions: MetricsCalculator::sector_mean_over_time(dataset, Metric::SocialContributions),
        sector_ratio_distribution: MetricsCalculator::sector_distribution(dataset, Metric::SocialPayrollRatio),
        top_contributors: ranking(dataset, top_n)?,
        social_rate_evolution: MetricsCalculator::yearly_mean(dataset, Metric::SocialRate),
        statistics: MetricsCalculator::describe_dataset(dataset),
    })
}

/// Detailed report for one company of the dataset
pub fn company_report(dataset: &Dataset, company: &str) -> AnalysisResult<CompanyReport> {
    let rows: Vec<&CompanyYearRecord> = dataset.for_company(company).collect();
    let latest = rows
        .iter()
        .max_by_key(|r| r.year)
        .copied()
        .cloned()
        .ok_or_else(|| AnalysisError::NoData(company.to_string()))?;

    let sector = latest.sector;
    let year = latest.year;

    // the company itself is part of its sector, so both means exist
    let sector_avg = |metric: Metric| {
        MetricsCalculator::sector_mean(dataset, sector, year, metric).unwrap_or(0.0)
    };
    let sector_comparison = SectorComparison {
        sector,
        company_ratio_pct: latest.social_payroll_ratio_pct,
        sector_avg_ratio_pct: sector_avg(Metric::SocialPayrollRatio),
        company_social_per_employee_eur: latest.social_per_employee_eur,
        sector_avg_social_per_employee_eur: sector_avg(Metric::SocialPerEmployee),
    };

    let contribution_trend = MetricsCalculator::trend(rows.iter().copied(), Metric::SocialContributions)
        .ok_or_else(|| AnalysisError::NoData(company.to_string()))?;

    let series = |metric: Metric| MetricsCalculator::company_series(dataset, company, metric);

    Ok(CompanyReport {
        company: company.to_string(),
        sector,
        latest_year: year,
        sector_comparison,
        contribution_trend,
        social_contributions: series(Metric::SocialContributions),
        payroll: series(Metric::Payroll),
        social_payroll_ratio: series(Metric::SocialPayrollRatio),
        official_rate: series(Metric::SocialRate),
        employees: series(Metric::Employees),
        avg_salary: series(Metric::AvgSalary),
        social_per_employee: series(Metric::SocialPerEmployee),
        latest,
    })
}

/// Compare companies over the indicators of `Metric::COMPARED`
pub fn comparative_analysis(dataset: &Dataset, names: &[String]) -> AnalysisResult<ComparativeAnalysis> {
    for name in names {
        companies::lookup(name)?;
    }

    let selected: Vec<&CompanyYearRecord> = dataset
        .records()
        .iter()
        .filter(|r| names.contains(&r.company))
        .collect();

    let latest_year = selected
        .iter()
        .map(|r| r.year)
        .max()
        .ok_or_else(|| AnalysisError::NoData(names.join(", ")))?;

    let latest = selected
        .iter()
        .filter(|r| r.year == latest_year)
        .map(|r| (*r).clone())
        .collect();

    let indicators = Metric::COMPARED
        .iter()
        .map(|metric| IndicatorComparison {
            metric: *metric,
            label: metric.label().to_string(),
            series: names
                .iter()
                .map(|name| CompanySeries {
                    company: name.clone(),
                    points: MetricsCalculator::company_series(dataset, name, *metric),
                })
                .collect(),
        })
        .collect();

    Ok(ComparativeAnalysis {
        companies: names.to_vec(),
        latest_year,
        latest,
        indicators,
    })
}

/// Run every analysis the configuration asks for
pub fn build_bundle(dataset: &Dataset, config: &AnalysisConfig) -> AnalysisResult<AnalysisBundle> {
    info!("Building analysis bundle over {} rows", dataset.len());

    let company_reports = config
        .report_companies
        .iter()
        .map(|name| company_report(dataset, name))
        .collect::<AnalysisResult<Vec<_>>>()?;

    Ok(AnalysisBundle {
        generated_at: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        global: global_analysis(dataset, config.top_n)?,
        company_reports,
        comparison: comparative_analysis(dataset, &config.comparison_companies)?,
        ranking: ranking(dataset, config.top_n)?,
    })
}
