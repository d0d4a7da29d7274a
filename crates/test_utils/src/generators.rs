//! Property-Based Test Generators
//!
//! Provides proptest strategies for asset records that satisfy the domain
//! invariants: positive cost, salvage no greater than cost, positive life.

use chrono::{DateTime, Duration, Utc};
use domain_asset::{AssetFinancialRecord, DepreciationMethod};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::fixtures::TemporalFixtures;

/// Strategy for generating any depreciation method
pub fn method_strategy() -> impl Strategy<Value = DepreciationMethod> {
    prop_oneof![
        Just(DepreciationMethod::StraightLine),
        Just(DepreciationMethod::DecliningBalance),
        Just(DepreciationMethod::DoubleDecliningBalance),
        Just(DepreciationMethod::NoDepreciation),
    ]
}

/// Strategy for generating purchase costs (0.01 to 10,000,000.00)
pub fn cost_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating a cost together with a salvage value not above it
pub fn cost_and_salvage_strategy() -> impl Strategy<Value = (Decimal, Decimal)> {
    (1i64..1_000_000_000i64)
        .prop_flat_map(|cents| (Just(cents), 0i64..=cents))
        .prop_map(|(cost, salvage)| (Decimal::new(cost, 2), Decimal::new(salvage, 2)))
}

/// Strategy for generating useful lives (1 to 40 years)
pub fn useful_life_strategy() -> impl Strategy<Value = i32> {
    1i32..=40i32
}

/// Strategy for generating valuation instants from purchase up to 60 years on
pub fn as_of_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..60 * 8766).prop_map(TemporalFixtures::hours_after_purchase)
}

/// Strategy for generating valuation instants up to 10 years before purchase
pub fn before_purchase_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (1i64..10 * 8766).prop_map(|hours| TemporalFixtures::purchase_instant() - Duration::hours(hours))
}

/// Strategy for generating complete, valid asset records
pub fn asset_strategy() -> impl Strategy<Value = AssetFinancialRecord> {
    (cost_and_salvage_strategy(), method_strategy(), useful_life_strategy()).prop_map(
        |((cost, salvage), method, life)| {
            AssetFinancialRecord::new(cost, TemporalFixtures::purchase_date())
                .with_method(method)
                .with_useful_life(life)
                .with_salvage_value(salvage)
        },
    )
}
