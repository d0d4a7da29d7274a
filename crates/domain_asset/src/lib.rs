//! Asset Valuation Domain
//!
//! This crate computes how assets lose value over time.
//!
//! # Key Concepts
//!
//! - **Book value**: what the asset is recorded as worth at a point in time
//! - **Salvage value**: the floor an asset keeps at the end of its useful life
//! - **Useful life**: years over which the asset is depreciated
//! - **Accumulated depreciation**: total value lost from purchase to valuation
//!
//! # Methods
//!
//! | Method | Yearly charge |
//! |---|---|
//! | Straight Line | `(cost - salvage) / life`, accrued continuously |
//! | Declining Balance | `book × 1.5 / life` |
//! | Double Declining Balance | `book × 2 / life` |
//! | No Depreciation | none |
//!
//! Valuation takes an explicit `as_of` instant; [`DepreciationEngine`] supplies
//! it from an injected clock.

pub mod asset;
pub mod config;
pub mod depreciation;
pub mod engine;
pub mod error;
pub mod schedule;

pub use asset::{
    method_description, AssetFinancialRecord, DepreciationMethod, DEFAULT_USEFUL_LIFE_YEARS,
    UNKNOWN_METHOD_DESCRIPTION,
};
pub use config::EngineConfig;
pub use depreciation::{calculate_depreciation, DepreciationResult};
pub use engine::DepreciationEngine;
pub use error::AssetError;
pub use schedule::{
    depreciation_schedule, schedule_summary, ScheduleEntry, ScheduleSummary, DEFAULT_SCHEDULE_YEARS,
};
