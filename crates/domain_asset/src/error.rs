//! Asset domain errors

use core_kernel::TemporalError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while valuing an asset
///
/// Missing purchase inputs are not errors; the engine reports such assets
/// as not yet depreciating.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("Invalid purchase date: {0}")]
    InvalidDate(#[from] TemporalError),

    #[error("Useful life must be at least one year, got {0}")]
    InvalidUsefulLife(i32),

    #[error("Salvage value {salvage} exceeds purchase cost {cost}")]
    SalvageExceedsCost { cost: Decimal, salvage: Decimal },

    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    #[error("Unknown depreciation method: {0}")]
    UnknownMethod(String),

    #[error("Schedule of {requested} years exceeds the limit of {max}")]
    ScheduleTooLong { requested: u32, max: u32 },

    #[error("Configuration error: {0}")]
    Configuration(String),
}
