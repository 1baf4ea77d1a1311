//! Simulation modules

pub mod dataset;
pub mod generator;
pub mod orchestrator;

pub use dataset::{CompanyYearRecord, Dataset, Metric};
pub use generator::{GrowthModel, SeriesGenerator};
pub use orchestrator::Orchestrator;
