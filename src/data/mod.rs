//! Static reference data: registry, rates, curated history

pub mod companies;
pub mod history;
pub mod rates;
pub mod series;

use serde::{Deserialize, Serialize};

pub use companies::{CompanyProfile, Sector};
pub use history::historical_series;
pub use rates::{social_rate, Shock, SOCIAL_RATES};
pub use series::YearlySeries;

/// The three raw series tracked per company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesKind {
    SocialContributions,
    Payroll,
    Employees,
}
