//! Rate value objects
//!
//! A [`Rate`] keeps the decimal form (0.30) and exposes the percentage form
//! (30%) on demand, so the two are never confused at call sites.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A proportional rate (e.g. a depreciation rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.30 for 30%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal value (e.g., 0.30 for 30%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 30 for 30%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Creates the rate `factor / periods`, or `None` when `periods` is zero
    ///
    /// Declining-balance rates are expressed this way: 2 / 5 years = 40%.
    pub fn per_period(factor: Decimal, periods: Decimal) -> Option<Self> {
        factor.checked_div(periods).map(Self::new)
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Applies this rate to an amount
    pub fn apply(&self, amount: Decimal) -> Decimal {
        amount * self.value
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().round_dp(4).normalize())
    }
}
