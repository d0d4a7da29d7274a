//! Engine configuration

use serde::Deserialize;

use crate::error::AssetError;
use crate::schedule::DEFAULT_SCHEDULE_YEARS;

/// Upper bound on projected schedule length when none is configured
pub const DEFAULT_MAX_SCHEDULE_YEARS: u32 = 100;

/// Tunables for [`crate::DepreciationEngine`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Years projected when a caller does not ask for a specific horizon
    pub default_schedule_years: u32,
    /// Longest schedule a caller may request
    pub max_schedule_years: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_schedule_years: DEFAULT_SCHEDULE_YEARS,
            max_schedule_years: DEFAULT_MAX_SCHEDULE_YEARS,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from `DEPRECIATION_*` environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("DEPRECIATION").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Checks that the horizons are usable together
    pub fn validate(&self) -> Result<(), AssetError> {
        if self.max_schedule_years == 0 {
            return Err(AssetError::Configuration(
                "max_schedule_years must be at least 1".to_string(),
            ));
        }
        if self.default_schedule_years > self.max_schedule_years {
            return Err(AssetError::Configuration(format!(
                "default_schedule_years ({}) exceeds max_schedule_years ({})",
                self.default_schedule_years, self.max_schedule_years
            )));
        }
        Ok(())
    }
}
