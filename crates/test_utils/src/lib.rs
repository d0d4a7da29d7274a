//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! asset valuation test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built assets and dates for common scenarios
//! - `builders`: Builder for asset records with sensible defaults
//! - `assertions`: Invariant checks for valuations and schedules
//! - `generators`: Property-based test data generators

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
