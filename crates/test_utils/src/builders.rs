//! Test Data Builders
//!
//! Lets tests name only the fields they care about; everything else falls
//! back to a 10,000 straight-line asset over 5 years with no salvage.

use chrono::NaiveDate;
use domain_asset::{AssetFinancialRecord, DepreciationMethod};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::TemporalFixtures;

/// Builder for asset records
#[derive(Debug, Clone)]
pub struct AssetRecordBuilder {
    cost: Option<Decimal>,
    purchase_date: Option<String>,
    method: DepreciationMethod,
    useful_life: i32,
    salvage: Decimal,
}

impl Default for AssetRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetRecordBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            cost: Some(dec!(10000)),
            purchase_date: Some(TemporalFixtures::purchase_date().format("%Y-%m-%d").to_string()),
            method: DepreciationMethod::StraightLine,
            useful_life: 5,
            salvage: Decimal::ZERO,
        }
    }

    pub fn cost(mut self, cost: Decimal) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn without_cost(mut self) -> Self {
        self.cost = None;
        self
    }

    pub fn purchased_on(mut self, date: NaiveDate) -> Self {
        self.purchase_date = Some(date.format("%Y-%m-%d").to_string());
        self
    }

    /// Sets the purchase date verbatim, valid or not
    pub fn purchase_date_raw(mut self, raw: impl Into<String>) -> Self {
        self.purchase_date = Some(raw.into());
        self
    }

    pub fn without_purchase_date(mut self) -> Self {
        self.purchase_date = None;
        self
    }

    pub fn method(mut self, method: DepreciationMethod) -> Self {
        self.method = method;
        self
    }

    pub fn useful_life(mut self, years: i32) -> Self {
        self.useful_life = years;
        self
    }

    pub fn salvage(mut self, salvage: Decimal) -> Self {
        self.salvage = salvage;
        self
    }

    /// Builds the record
    pub fn build(self) -> AssetFinancialRecord {
        AssetFinancialRecord {
            id: None,
            purchase_cost: self.cost,
            purchase_date: self.purchase_date,
            depreciation_method: Some(self.method),
            useful_life_years: Some(self.useful_life),
            salvage_value: Some(self.salvage),
        }
    }
}
