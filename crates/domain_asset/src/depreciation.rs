//! Current book value under each depreciation method
//!
//! Elapsed time runs from the purchase instant to an explicit `as_of`
//! instant on a 365.25-day year. Straight line accrues continuously;
//! reducing-balance methods step through whole years and then apply one
//! partial-year step for the remainder.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use core_kernel::temporal::{parse_date, years_elapsed};
use core_kernel::Rate;

use crate::asset::{AssetFinancialRecord, DepreciationMethod};
use crate::error::AssetError;

/// Valuation of an asset at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationResult {
    /// Book value as of the valuation instant
    pub current_value: Decimal,
    /// Total value lost since purchase
    pub accumulated_depreciation: Decimal,
    /// Straight line: the yearly charge. Reducing balance: the nominal
    /// first-year charge at cost basis, not this year's charge.
    pub annual_depreciation: Decimal,
    /// Annualized rate as a percentage of purchase cost
    pub depreciation_rate: Decimal,
}

impl DepreciationResult {
    /// Result for an asset that is not (yet) depreciating
    pub fn not_depreciating(current_value: Decimal) -> Self {
        Self {
            current_value,
            accumulated_depreciation: Decimal::ZERO,
            annual_depreciation: Decimal::ZERO,
            depreciation_rate: Decimal::ZERO,
        }
    }

    fn clamped(mut self, depreciable: Decimal) -> Self {
        self.current_value = self.current_value.max(Decimal::ZERO);
        self.accumulated_depreciation = self.accumulated_depreciation.min(depreciable);
        self
    }
}

/// Validated purchase inputs shared by valuation and scheduling
#[derive(Debug, Clone, Copy)]
pub(crate) struct PurchaseTerms {
    pub cost: Decimal,
    pub salvage: Decimal,
    pub useful_life: i32,
    pub method: DepreciationMethod,
    pub purchased_at: DateTime<Utc>,
}

impl PurchaseTerms {
    /// Reads and validates the record
    ///
    /// `Ok(None)` when cost or date is absent (or cost is zero): such assets
    /// are treated as not yet depreciating rather than as invalid.
    pub(crate) fn from_record(asset: &AssetFinancialRecord) -> Result<Option<Self>, AssetError> {
        let (Some(cost), Some(date)) = (asset.purchase_cost, asset.purchase_date.as_deref()) else {
            return Ok(None);
        };
        if cost.is_zero() {
            return Ok(None);
        }

        let salvage = asset.salvage();
        if cost.is_sign_negative() {
            return Err(AssetError::NegativeAmount { field: "purchase_cost", value: cost });
        }
        if salvage.is_sign_negative() && !salvage.is_zero() {
            return Err(AssetError::NegativeAmount { field: "salvage_value", value: salvage });
        }

        let purchased_at = parse_date(date)?;
        let method = asset.method();
        let useful_life = asset.useful_life();

        if method.is_depreciating() {
            if useful_life <= 0 {
                warn!(useful_life, "rejecting asset with non-positive useful life");
                return Err(AssetError::InvalidUsefulLife(useful_life));
            }
            if salvage > cost {
                warn!(%cost, %salvage, "rejecting asset whose salvage value exceeds cost");
                return Err(AssetError::SalvageExceedsCost { cost, salvage });
            }
        }

        Ok(Some(Self {
            cost,
            salvage,
            useful_life,
            method,
            purchased_at,
        }))
    }

    pub(crate) fn depreciable(&self) -> Decimal {
        self.cost - self.salvage
    }

    pub(crate) fn straight_line_annual(&self) -> Decimal {
        self.depreciable() / Decimal::from(self.useful_life)
    }

    pub(crate) fn balance_rate(&self) -> Option<Rate> {
        self.method.balance_rate(self.useful_life)
    }

    pub(crate) fn annual_rate(&self) -> Rate {
        self.method
            .annual_rate(self.useful_life)
            .unwrap_or(Rate::new(Decimal::ZERO))
    }
}

/// Values an asset as of the given instant
///
/// # Errors
///
/// - [`AssetError::InvalidDate`] if the purchase date does not parse
/// - [`AssetError::InvalidUsefulLife`] / [`AssetError::SalvageExceedsCost`] /
///   [`AssetError::NegativeAmount`] for degenerate depreciating assets
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, NaiveDate};
/// use core_kernel::temporal::start_of_day;
/// use domain_asset::{calculate_depreciation, AssetFinancialRecord};
/// use rust_decimal_macros::dec;
///
/// let purchased = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let asset = AssetFinancialRecord::new(dec!(10000), purchased);
/// let as_of = start_of_day(purchased) + Duration::days(1461);
///
/// let result = calculate_depreciation(&asset, as_of).unwrap();
/// assert_eq!(result.current_value, dec!(2000));
/// ```
#[instrument(level = "debug", skip_all, fields(asset_id = ?asset.id, method = %asset.method()))]
pub fn calculate_depreciation(
    asset: &AssetFinancialRecord,
    as_of: DateTime<Utc>,
) -> Result<DepreciationResult, AssetError> {
    let Some(terms) = PurchaseTerms::from_record(asset)? else {
        debug!("purchase cost or date missing, asset not depreciating");
        return Ok(DepreciationResult::not_depreciating(
            asset.purchase_cost.unwrap_or(Decimal::ZERO),
        ));
    };

    let years = years_elapsed(terms.purchased_at, as_of);

    let result = match (terms.method, terms.balance_rate()) {
        (DepreciationMethod::NoDepreciation, _) => DepreciationResult::not_depreciating(terms.cost),
        (DepreciationMethod::StraightLine, _) => straight_line(&terms, years),
        (_, Some(rate)) => reducing_balance(&terms, years, rate),
        (_, None) => DepreciationResult::not_depreciating(terms.cost),
    }
    .clamped(terms.depreciable());

    debug!(
        %years,
        current_value = %result.current_value,
        accumulated = %result.accumulated_depreciation,
        "asset valued"
    );
    Ok(result)
}

fn straight_line(terms: &PurchaseTerms, years: Decimal) -> DepreciationResult {
    let annual = terms.straight_line_annual();
    // Past the end of the life the whole base is gone, whatever the rounding
    let accumulated = if years >= Decimal::from(terms.useful_life) {
        terms.depreciable()
    } else {
        (annual * years).min(terms.depreciable())
    };

    DepreciationResult {
        current_value: (terms.cost - accumulated).max(terms.salvage),
        accumulated_depreciation: accumulated,
        annual_depreciation: annual,
        depreciation_rate: terms.annual_rate().as_percentage() * terms.depreciable() / terms.cost,
    }
}

fn reducing_balance(terms: &PurchaseTerms, years: Decimal, rate: Rate) -> DepreciationResult {
    let whole_years = years.floor();
    let fraction = years - whole_years;
    let mut book_value = terms.cost;

    // Bounded by elapsed years only; an asset held past its useful life keeps
    // stepping until the salvage floor is reached.
    for _ in 0..whole_years.to_u64().unwrap_or(0) {
        let charge = rate.apply(book_value);
        if book_value - charge <= terms.salvage {
            book_value = terms.salvage;
            break;
        }
        book_value -= charge;
    }

    if fraction > Decimal::ZERO && book_value > terms.salvage {
        let charge = rate.apply(book_value) * fraction;
        book_value = (book_value - charge).max(terms.salvage);
    }

    let current_value = book_value.max(terms.salvage);

    DepreciationResult {
        current_value,
        accumulated_depreciation: terms.cost - current_value,
        annual_depreciation: rate.apply(terms.cost),
        depreciation_rate: terms.annual_rate().as_percentage(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use core_kernel::temporal::start_of_day;
    use rust_decimal_macros::dec;

    fn purchased() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 3, 1).unwrap()
    }

    fn years_later(years: i64) -> DateTime<Utc> {
        // four Julian years are exactly 1461 days
        start_of_day(purchased()) + Duration::hours(years * 8766)
    }

    #[test]
    fn test_straight_line_two_years() {
        let asset = AssetFinancialRecord::new(dec!(12000), purchased())
            .with_salvage_value(dec!(2000));

        let result = calculate_depreciation(&asset, years_later(2)).unwrap();

        assert_eq!(result.annual_depreciation, dec!(2000));
        assert_eq!(result.accumulated_depreciation, dec!(4000));
        assert_eq!(result.current_value, dec!(8000));
        assert_eq!(result.depreciation_rate.round_dp(2), dec!(16.67));
    }

    #[test]
    fn test_declining_balance_one_year() {
        let asset = AssetFinancialRecord::new(dec!(10000), purchased())
            .with_method(DepreciationMethod::DecliningBalance);

        let result = calculate_depreciation(&asset, years_later(1)).unwrap();

        assert_eq!(result.current_value, dec!(7000));
        assert_eq!(result.accumulated_depreciation, dec!(3000));
        assert_eq!(result.depreciation_rate, dec!(30));
    }

    #[test]
    fn test_missing_date_passes_cost_through() {
        let asset = AssetFinancialRecord {
            purchase_cost: Some(dec!(900)),
            ..AssetFinancialRecord::default()
        };

        let result = calculate_depreciation(&asset, years_later(3)).unwrap();
        assert_eq!(result, DepreciationResult::not_depreciating(dec!(900)));
    }

    #[test]
    fn test_straight_line_fully_depreciated_at_end_of_uneven_life() {
        let asset = AssetFinancialRecord::new(dec!(10000), purchased()).with_useful_life(3);

        let result = calculate_depreciation(&asset, years_later(3)).unwrap();

        assert_eq!(result.current_value, Decimal::ZERO);
        assert_eq!(result.accumulated_depreciation, dec!(10000));
    }

    #[test]
    fn test_partial_year_on_reducing_balance() {
        let asset = AssetFinancialRecord::new(dec!(10000), purchased())
            .with_method(DepreciationMethod::DoubleDecliningBalance);
        let as_of = years_later(1) + Duration::hours(4383);

        let result = calculate_depreciation(&asset, as_of).unwrap();

        // 10000 -> 6000 after one year, then half a year at 40% of 6000
        assert_eq!(result.current_value, dec!(4800));
    }
}
