//! Analytics modules for statistics, reports and persistence

pub mod logger;
pub mod metrics;
pub mod report;

pub use logger::ResultsLogger;
pub use metrics::{Metric, MetricsCalculator};
pub use report::{build_bundle, AnalysisBundle};
