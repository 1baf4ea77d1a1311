//! Error types for the analysis library

use thiserror::Error;

/// Errors raised while building or analysing the dataset
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// Company is not part of the registry
    #[error("unknown company: {0}")]
    UnknownCompany(String),

    /// Year has no official contribution rate
    #[error("no official social rate for year {0}")]
    UnknownYear(u16),

    /// Configuration rejected by validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Growth or noise parameters rejected by the sampler
    #[error("invalid distribution N({mean}, {std_dev}): {reason}")]
    Distribution { mean: f64, std_dev: f64, reason: String },

    /// Dataset holds no rows for the requested selection
    #[error("no data found for {0}")]
    NoData(String),
}

pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;
