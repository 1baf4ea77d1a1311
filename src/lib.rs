//! URSSAF Contribution Analysis
//!
//! Generates synthetic 2002-2025 social-contribution, payroll and headcount
//! series for large French employers, assembles them into a company/year
//! table with derived ratios, and builds sector, ranking and per-company
//! analyses on top of it.

pub mod analytics;
pub mod config;
pub mod data;
pub mod error;
pub mod simulation;

pub use analytics::report::build_bundle;
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use simulation::orchestrator::Orchestrator;
