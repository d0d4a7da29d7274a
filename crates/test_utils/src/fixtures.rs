//! Pre-built Test Fixtures
//!
//! Ready-to-use assets and instants. Every fixture asset is purchased on
//! [`TemporalFixtures::purchase_date`], so [`TemporalFixtures::years_after_purchase`]
//! lands on exact Julian-year boundaries.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use core_kernel::temporal::start_of_day;
use core_kernel::{AssetId, FixedClock};
use domain_asset::{AssetFinancialRecord, DepreciationMethod};
use rust_decimal_macros::dec;

/// Hours in a 365.25-day year
pub const HOURS_PER_JULIAN_YEAR: i64 = 8766;

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard purchase date (Jan 1, 2020)
    pub fn purchase_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid fixture date")
    }

    /// Purchase instant (midnight UTC on the purchase date)
    pub fn purchase_instant() -> DateTime<Utc> {
        start_of_day(Self::purchase_date())
    }

    /// Instant exactly `years` Julian years after purchase
    pub fn years_after_purchase(years: i64) -> DateTime<Utc> {
        Self::purchase_instant() + Duration::hours(years * HOURS_PER_JULIAN_YEAR)
    }

    /// Instant `hours` hours after purchase
    pub fn hours_after_purchase(hours: i64) -> DateTime<Utc> {
        Self::purchase_instant() + Duration::hours(hours)
    }

    /// Clock frozen `years` Julian years after purchase
    pub fn clock_years_after_purchase(years: i64) -> FixedClock {
        FixedClock::new(Self::years_after_purchase(years))
    }
}

/// Fixture for asset records
pub struct AssetFixtures;

impl AssetFixtures {
    /// Office equipment: 12,000 cost, 2,000 salvage, 5 years, straight line
    pub fn office_equipment() -> AssetFinancialRecord {
        AssetFinancialRecord::new(dec!(12000), TemporalFixtures::purchase_date())
            .with_id(AssetId::new())
            .with_method(DepreciationMethod::StraightLine)
            .with_useful_life(5)
            .with_salvage_value(dec!(2000))
    }

    /// Delivery vehicle: 10,000 cost, no salvage, 5 years, declining balance
    pub fn delivery_vehicle() -> AssetFinancialRecord {
        AssetFinancialRecord::new(dec!(10000), TemporalFixtures::purchase_date())
            .with_id(AssetId::new())
            .with_method(DepreciationMethod::DecliningBalance)
            .with_useful_life(5)
    }

    /// Laptop: 10,000 cost, no salvage, 5 years, double declining balance
    pub fn laptop() -> AssetFinancialRecord {
        AssetFinancialRecord::new(dec!(10000), TemporalFixtures::purchase_date())
            .with_id(AssetId::new())
            .with_method(DepreciationMethod::DoubleDecliningBalance)
            .with_useful_life(5)
    }

    /// Land parcel: 5,000 cost, 500 salvage, never depreciates
    pub fn land() -> AssetFinancialRecord {
        AssetFinancialRecord::new(dec!(5000), TemporalFixtures::purchase_date())
            .with_id(AssetId::new())
            .with_method(DepreciationMethod::NoDepreciation)
            .with_salvage_value(dec!(500))
    }

    /// Asset saved before its purchase details were filled in
    pub fn unpriced() -> AssetFinancialRecord {
        AssetFinancialRecord {
            id: Some(AssetId::new()),
            purchase_cost: Some(dec!(750)),
            ..AssetFinancialRecord::default()
        }
    }
}
