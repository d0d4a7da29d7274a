//! Clock-aware entry point
//!
//! [`DepreciationEngine`] pairs the pure functions with a [`Clock`] and an
//! [`EngineConfig`], so callers that mean "as of now" never sample the
//! system clock themselves.

use std::fmt;
use std::sync::Arc;

use core_kernel::{Clock, SystemClock};

use crate::asset::AssetFinancialRecord;
use crate::config::EngineConfig;
use crate::depreciation::{calculate_depreciation, DepreciationResult};
use crate::error::AssetError;
use crate::schedule::{depreciation_schedule, ScheduleEntry};

/// Depreciation calculator bound to a time source
///
/// Cheap to clone; clones share the clock.
#[derive(Clone)]
pub struct DepreciationEngine {
    clock: Arc<dyn Clock>,
    config: EngineConfig,
}

impl DepreciationEngine {
    /// Creates an engine reading the given clock
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Configuration`] if the config is inconsistent.
    pub fn new(clock: Arc<dyn Clock>, config: EngineConfig) -> Result<Self, AssetError> {
        config.validate()?;
        Ok(Self { clock, config })
    }

    /// Engine on the system clock with default configuration
    pub fn system() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            config: EngineConfig::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Values the asset as of the clock's current instant
    pub fn calculate(&self, asset: &AssetFinancialRecord) -> Result<DepreciationResult, AssetError> {
        calculate_depreciation(asset, self.clock.now())
    }

    /// Projects the lifetime schedule
    ///
    /// `years` defaults to the configured horizon.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::ScheduleTooLong`] beyond the configured maximum,
    /// plus any validation error from [`depreciation_schedule`].
    pub fn schedule(
        &self,
        asset: &AssetFinancialRecord,
        years: Option<u32>,
    ) -> Result<Vec<ScheduleEntry>, AssetError> {
        let years = years.unwrap_or(self.config.default_schedule_years);
        if years > self.config.max_schedule_years {
            return Err(AssetError::ScheduleTooLong {
                requested: years,
                max: self.config.max_schedule_years,
            });
        }
        depreciation_schedule(asset, years)
    }
}

impl Default for DepreciationEngine {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Debug for DepreciationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepreciationEngine")
            .field("clock", &"<dyn Clock>")
            .field("config", &self.config)
            .finish()
    }
}
