//! Depreciation DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_asset::{AssetFinancialRecord, DepreciationMethod, ScheduleEntry, ScheduleSummary};

#[derive(Debug, Serialize, Deserialize)]
pub struct ValuationRequest {
    pub asset: AssetFinancialRecord,
    /// Valuation instant; the server clock when absent
    #[serde(default)]
    pub as_of: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ScheduleRequest {
    pub asset: AssetFinancialRecord,
    /// Horizon in years; the engine enforces its configured maximum
    #[validate(range(min = 1))]
    #[serde(default)]
    pub years: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub entries: Vec<ScheduleEntry>,
    pub summary: ScheduleSummary,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MethodResponse {
    pub method: DepreciationMethod,
    pub description: String,
}
