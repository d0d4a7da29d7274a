//! Asset financial records and depreciation methods
//!
//! The record mirrors the shape the persistence store hands out: every field
//! may be absent, and defaults are applied when the engine reads it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{AssetId, Rate};

use crate::error::AssetError;

/// Useful life applied when a record does not carry one
pub const DEFAULT_USEFUL_LIFE_YEARS: i32 = 5;

/// Description returned for method names outside the known set
pub const UNKNOWN_METHOD_DESCRIPTION: &str = "Select a depreciation method to see how value is reduced over time";

/// Accounting method used to reduce an asset's book value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DepreciationMethod {
    /// Equal amount every year
    #[default]
    #[serde(rename = "Straight Line")]
    StraightLine,
    /// 1.5x the straight-line rate applied to the remaining balance
    #[serde(rename = "Declining Balance")]
    DecliningBalance,
    /// 2x the straight-line rate applied to the remaining balance
    #[serde(rename = "Double Declining Balance")]
    DoubleDecliningBalance,
    /// Asset keeps its purchase value (e.g. land)
    #[serde(rename = "No Depreciation", alias = "None")]
    NoDepreciation,
}

impl DepreciationMethod {
    /// All methods, in the order they are offered to users
    pub const ALL: [DepreciationMethod; 4] = [
        DepreciationMethod::StraightLine,
        DepreciationMethod::DecliningBalance,
        DepreciationMethod::DoubleDecliningBalance,
        DepreciationMethod::NoDepreciation,
    ];

    /// Returns the display name, which is also the stored value
    pub fn name(&self) -> &'static str {
        match self {
            DepreciationMethod::StraightLine => "Straight Line",
            DepreciationMethod::DecliningBalance => "Declining Balance",
            DepreciationMethod::DoubleDecliningBalance => "Double Declining Balance",
            DepreciationMethod::NoDepreciation => "No Depreciation",
        }
    }

    /// Returns a one-sentence explanation for users choosing a method
    pub fn description(&self) -> &'static str {
        match self {
            DepreciationMethod::StraightLine => {
                "Spreads the cost evenly, recognizing the same depreciation every year of the useful life"
            }
            DepreciationMethod::DecliningBalance => {
                "Applies 1.5 times the straight-line rate to the remaining book value, front-loading depreciation"
            }
            DepreciationMethod::DoubleDecliningBalance => {
                "Applies twice the straight-line rate to the remaining book value for the fastest write-down"
            }
            DepreciationMethod::NoDepreciation => {
                "The asset keeps its full purchase value, as for land or collectibles"
            }
        }
    }

    /// Returns true if the method reduces book value over time
    pub fn is_depreciating(&self) -> bool {
        !matches!(self, DepreciationMethod::NoDepreciation)
    }

    /// Multiple of the straight-line rate used by reducing-balance methods
    pub fn balance_factor(&self) -> Option<Decimal> {
        match self {
            DepreciationMethod::DecliningBalance => Some(dec!(1.5)),
            DepreciationMethod::DoubleDecliningBalance => Some(dec!(2)),
            DepreciationMethod::StraightLine | DepreciationMethod::NoDepreciation => None,
        }
    }

    /// Reducing-balance rate for the given useful life
    ///
    /// `None` for methods that do not reduce a balance, or for a zero life.
    pub fn balance_rate(&self, useful_life_years: i32) -> Option<Rate> {
        let factor = self.balance_factor()?;
        Rate::per_period(factor, Decimal::from(useful_life_years))
    }

    /// Yearly depreciation rate for the given useful life
    ///
    /// Straight line applies `1 / life` to the depreciable base (cost less
    /// salvage); the reducing-balance methods apply their balance rate to the
    /// current book value; no depreciation is a zero rate. `None` for a zero
    /// life on a depreciating method.
    pub fn annual_rate(&self, useful_life_years: i32) -> Option<Rate> {
        match self {
            DepreciationMethod::StraightLine => {
                Rate::per_period(Decimal::ONE, Decimal::from(useful_life_years))
            }
            DepreciationMethod::DecliningBalance | DepreciationMethod::DoubleDecliningBalance => {
                self.balance_rate(useful_life_years)
            }
            DepreciationMethod::NoDepreciation => Some(Rate::new(Decimal::ZERO)),
        }
    }
}

impl fmt::Display for DepreciationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DepreciationMethod {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Straight Line" => Ok(DepreciationMethod::StraightLine),
            "Declining Balance" => Ok(DepreciationMethod::DecliningBalance),
            "Double Declining Balance" => Ok(DepreciationMethod::DoubleDecliningBalance),
            "No Depreciation" | "None" => Ok(DepreciationMethod::NoDepreciation),
            other => Err(AssetError::UnknownMethod(other.to_string())),
        }
    }
}

/// Looks up the description for a stored method name
///
/// Unknown names yield [`UNKNOWN_METHOD_DESCRIPTION`].
pub fn method_description(method: &str) -> &'static str {
    method
        .parse::<DepreciationMethod>()
        .map(|m| m.description())
        .unwrap_or(UNKNOWN_METHOD_DESCRIPTION)
}

/// Purchase and depreciation fields of an asset, as stored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetFinancialRecord {
    /// Store key, used for log correlation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AssetId>,
    /// Amount paid for the asset
    #[serde(default)]
    pub purchase_cost: Option<Decimal>,
    /// ISO 8601 purchase date or timestamp
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub depreciation_method: Option<DepreciationMethod>,
    #[serde(default)]
    pub useful_life_years: Option<i32>,
    /// Value retained at the end of the useful life
    #[serde(default)]
    pub salvage_value: Option<Decimal>,
}

impl AssetFinancialRecord {
    /// Creates a record with a cost and purchase date, all else defaulted
    pub fn new(purchase_cost: Decimal, purchase_date: NaiveDate) -> Self {
        Self {
            purchase_cost: Some(purchase_cost),
            purchase_date: Some(purchase_date.format("%Y-%m-%d").to_string()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: AssetId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_method(mut self, method: DepreciationMethod) -> Self {
        self.depreciation_method = Some(method);
        self
    }

    pub fn with_useful_life(mut self, years: i32) -> Self {
        self.useful_life_years = Some(years);
        self
    }

    pub fn with_salvage_value(mut self, salvage: Decimal) -> Self {
        self.salvage_value = Some(salvage);
        self
    }

    /// Sets the purchase date from a raw stored string
    pub fn with_purchase_date_str(mut self, date: impl Into<String>) -> Self {
        self.purchase_date = Some(date.into());
        self
    }

    /// Method, defaulting to straight line
    pub fn method(&self) -> DepreciationMethod {
        self.depreciation_method.unwrap_or_default()
    }

    /// Useful life in years, defaulting to [`DEFAULT_USEFUL_LIFE_YEARS`]
    pub fn useful_life(&self) -> i32 {
        self.useful_life_years.unwrap_or(DEFAULT_USEFUL_LIFE_YEARS)
    }

    /// Salvage value, defaulting to zero
    pub fn salvage(&self) -> Decimal {
        self.salvage_value.unwrap_or(Decimal::ZERO)
    }
}
