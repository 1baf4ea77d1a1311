//! Metrics calculation for dataset analysis

use crate::data::Sector;
use crate::simulation::{CompanyYearRecord, Dataset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use crate::simulation::dataset::Metric;

/// Descriptive statistics of a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (0 below two values)
    pub std_dev: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Calculator for dataset metrics
pub struct MetricsCalculator;

impl MetricsCalculator {
    /// Count, mean, std, min, quartiles and max; `None` for empty input
    pub fn describe(values: &[f64]) -> Option<Summary> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let std_dev = if count > 1 {
            let var = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
            var.sqrt()
        } else {
            0.0
        };

        Some(Summary {
            count,
            mean,
            std_dev,
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }

    /// Descriptive statistics of the main columns
    pub fn describe_dataset(dataset: &Dataset) -> Vec<ColumnSummary> {
        Metric::DESCRIBED
            .iter()
            .filter_map(|metric| {
                let values: Vec<f64> = dataset.records().iter().map(|r| metric.value(r)).collect();
                Self::describe(&values).map(|summary| ColumnSummary {
                    metric: *metric,
                    label: metric.label().to_string(),
                    summary,
                })
            })
            .collect()
    }

    /// Per-sector mean of a metric for every year
    pub fn sector_mean_over_time(dataset: &Dataset, metric: Metric) -> Vec<SectorSeries> {
        dataset
            .sectors()
            .into_iter()
            .map(|sector| SectorSeries {
                sector,
                points: yearly_means(dataset.records().iter().filter(|r| r.sector == sector), metric),
            })
            .collect()
    }

    /// Distribution of a metric within each sector
    pub fn sector_distribution(dataset: &Dataset, metric: Metric) -> Vec<SectorSummary> {
        dataset
            .sectors()
            .into_iter()
            .filter_map(|sector| {
                let values: Vec<f64> = dataset
                    .records()
                    .iter()
                    .filter(|r| r.sector == sector)
                    .map(|r| metric.value(r))
                    .collect();
                Self::describe(&values).map(|summary| SectorSummary { sector, summary })
            })
            .collect()
    }

    /// Mean of a metric across all companies, per year
    pub fn yearly_mean(dataset: &Dataset, metric: Metric) -> Vec<YearValue> {
        yearly_means(dataset.records().iter(), metric)
    }

    /// A company's values of one metric, chronologically
    pub fn company_series(dataset: &Dataset, company: &str, metric: Metric) -> Vec<YearValue> {
        let mut points: Vec<YearValue> = dataset
            .for_company(company)
            .map(|r| YearValue {
                year: r.year,
                value: metric.value(r),
            })
            .collect();
        points.sort_by_key(|p| p.year);
        points
    }

    /// Maximum and minimum with their years, plus the mean
    pub fn trend<'a, I>(records: I, metric: Metric) -> Option<Trend>
    where
        I: IntoIterator<Item = &'a CompanyYearRecord>,
    {
        let mut trend: Option<Trend> = None;
        let mut sum = 0.0;
        let mut count = 0usize;

        for record in records {
            let value = metric.value(record);
            sum += value;
            count += 1;

            let t = trend.get_or_insert(Trend {
                max: value,
                max_year: record.year,
                min: value,
                min_year: record.year,
                mean: 0.0,
            });
            // first occurrence wins on ties
            if value > t.max {
                t.max = value;
                t.max_year = record.year;
            }
            if value < t.min {
                t.min = value;
                t.min_year = record.year;
            }
        }

        trend.map(|mut t| {
            t.mean = sum / count as f64;
            t
        })
    }

    /// Mean of a metric over rows of one sector in one year
    pub fn sector_mean(dataset: &Dataset, sector: Sector, year: u16, metric: Metric) -> Option<f64> {
        let values: Vec<f64> = dataset
            .for_sector_in_year(sector, year)
            .map(|r| metric.value(r))
            .collect();
        if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        }
    }
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}

fn yearly_means<'a, I>(records: I, metric: Metric) -> Vec<YearValue>
where
    I: Iterator<Item = &'a CompanyYearRecord>,
{
    let mut sums: BTreeMap<u16, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = sums.entry(record.year).or_insert((0.0, 0));
        entry.0 += metric.value(record);
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(year, (sum, count))| YearValue {
            year,
            value: sum / count as f64,
        })
        .collect()
}

/// Value of a metric in a given year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearValue {
    pub year: u16,
    pub value: f64,
}

/// Yearly series for one sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorSeries {
    pub sector: Sector,
    pub points: Vec<YearValue>,
}

/// Distribution summary for one sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorSummary {
    pub sector: Sector,
    pub summary: Summary,
}

/// Descriptive statistics of one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub metric: Metric,
    pub label: String,
    pub summary: Summary,
}

/// Historical extremes of a metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub max: f64,
    pub max_year: u16,
    pub min: f64,
    pub min_year: u16,
    pub mean: f64,
}
