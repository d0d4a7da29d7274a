//! Core Kernel - Foundational types for asset valuation
//!
//! This crate provides the building blocks shared by the depreciation domain
//! and the API layer:
//! - Date parsing and elapsed-time arithmetic on a fixed 365.25-day year
//! - An injectable clock so "now" can be pinned in tests
//! - Rate value objects with percentage views
//! - Strongly-typed asset identifiers

pub mod clock;
pub mod identifiers;
pub mod rate;
pub mod temporal;

pub use clock::{Clock, FixedClock, SystemClock};
pub use identifiers::AssetId;
pub use rate::Rate;
pub use temporal::TemporalError;
