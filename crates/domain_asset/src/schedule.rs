//! Lifetime depreciation schedules
//!
//! A schedule always starts at the purchase date and projects forward year
//! by year; it does not depend on the current date. Depreciating methods stop
//! early once the book value reaches salvage.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use core_kernel::temporal::{anniversary, new_year_after};

use crate::asset::{AssetFinancialRecord, DepreciationMethod};
use crate::depreciation::PurchaseTerms;
use crate::error::AssetError;

/// Number of years projected when the caller does not choose
pub const DEFAULT_SCHEDULE_YEARS: u32 = 10;

/// One year of a depreciation schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Years since purchase, starting at 1
    pub year: u32,
    /// Date labelling the end of this year
    pub year_date: NaiveDate,
    /// Depreciation recognized in this year
    pub depreciation: Decimal,
    /// Running total through this year
    pub accumulated_depreciation: Decimal,
    /// Book value at the end of this year
    pub book_value: Decimal,
}

/// Totals over a schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub years_covered: u32,
    pub total_depreciation: Decimal,
    /// Book value after the last row, `None` for an empty schedule
    pub final_book_value: Option<Decimal>,
}

/// Projects depreciation year by year from the purchase date
///
/// Returns an empty schedule when cost or purchase date is missing.
/// `NoDepreciation` yields exactly `years` rows labelled January 1 of each
/// following year; the other methods yield at most `years` rows labelled on
/// purchase anniversaries.
///
/// # Errors
///
/// Same validation errors as [`crate::calculate_depreciation`].
#[instrument(level = "debug", skip_all, fields(asset_id = ?asset.id, method = %asset.method(), years = years))]
pub fn depreciation_schedule(
    asset: &AssetFinancialRecord,
    years: u32,
) -> Result<Vec<ScheduleEntry>, AssetError> {
    let Some(terms) = PurchaseTerms::from_record(asset)? else {
        debug!("purchase cost or date missing, empty schedule");
        return Ok(Vec::new());
    };
    let purchase_date = terms.purchased_at.date_naive();

    let schedule = match (terms.method, terms.balance_rate()) {
        (DepreciationMethod::NoDepreciation, _) => hold_value(&terms, purchase_date, years)?,
        (DepreciationMethod::StraightLine, _) => {
            let annual = terms.straight_line_annual();
            let final_year = u32::try_from(terms.useful_life).ok();
            project(&terms, purchase_date, years, final_year, |_| annual)?
        }
        (_, Some(rate)) => project(&terms, purchase_date, years, None, |book| rate.apply(book))?,
        (_, None) => hold_value(&terms, purchase_date, years)?,
    };

    debug!(rows = schedule.len(), "schedule projected");
    Ok(schedule)
}

fn hold_value(
    terms: &PurchaseTerms,
    purchase_date: NaiveDate,
    years: u32,
) -> Result<Vec<ScheduleEntry>, AssetError> {
    (1..=years)
        .map(|year| -> Result<ScheduleEntry, AssetError> {
            Ok(ScheduleEntry {
                year,
                year_date: new_year_after(purchase_date, year)?,
                depreciation: Decimal::ZERO,
                accumulated_depreciation: Decimal::ZERO,
                book_value: terms.cost,
            })
        })
        .collect()
}

fn project(
    terms: &PurchaseTerms,
    purchase_date: NaiveDate,
    years: u32,
    final_year: Option<u32>,
    nominal_charge: impl Fn(Decimal) -> Decimal,
) -> Result<Vec<ScheduleEntry>, AssetError> {
    let mut schedule = Vec::with_capacity(years as usize);
    let mut book_value = terms.cost;
    let mut accumulated = Decimal::ZERO;

    for year in 1..=years {
        // The final year of the life takes whatever rounding left behind
        let depreciation = if final_year == Some(year) {
            book_value - terms.salvage
        } else {
            nominal_charge(book_value).min(book_value - terms.salvage)
        };
        book_value -= depreciation;
        accumulated += depreciation;

        schedule.push(ScheduleEntry {
            year,
            year_date: anniversary(purchase_date, year)?,
            depreciation,
            accumulated_depreciation: accumulated,
            book_value,
        });

        if book_value <= terms.salvage {
            break;
        }
    }

    Ok(schedule)
}

/// Summarizes a schedule
pub fn schedule_summary(schedule: &[ScheduleEntry]) -> ScheduleSummary {
    ScheduleSummary {
        years_covered: schedule.last().map_or(0, |entry| entry.year),
        total_depreciation: schedule.iter().map(|entry| entry.depreciation).sum(),
        final_book_value: schedule.last().map(|entry| entry.book_value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn purchased() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 5, 10).unwrap()
    }

    #[test]
    fn test_straight_line_stops_at_salvage() {
        let asset = AssetFinancialRecord::new(dec!(10000), purchased()).with_useful_life(4);

        let schedule = depreciation_schedule(&asset, 10).unwrap();

        assert_eq!(schedule.len(), 4);
        assert!(schedule.iter().all(|e| e.depreciation == dec!(2500)));
        assert_eq!(schedule[3].book_value, Decimal::ZERO);
        assert_eq!(schedule[0].year_date, NaiveDate::from_ymd_opt(2022, 5, 10).unwrap());
    }

    #[test]
    fn test_uneven_division_ends_on_last_year_of_life() {
        let asset = AssetFinancialRecord::new(dec!(10000), purchased()).with_useful_life(3);

        let schedule = depreciation_schedule(&asset, 10).unwrap();

        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule[2].book_value, Decimal::ZERO);
        assert_eq!(schedule[2].accumulated_depreciation, dec!(10000));
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let json = serde_json::to_value(schedule_summary(&[])).unwrap();

        assert!(json.get("yearsCovered").is_some());
        assert!(json.get("totalDepreciation").is_some());
        assert!(json.get("finalBookValue").is_some());
    }

    #[test]
    fn test_no_depreciation_labels_new_years() {
        let asset = AssetFinancialRecord::new(dec!(5000), purchased())
            .with_method(DepreciationMethod::NoDepreciation);

        let schedule = depreciation_schedule(&asset, 3).unwrap();

        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule[0].year_date, NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
        assert_eq!(schedule[2].year_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_summary_of_empty_schedule() {
        let summary = schedule_summary(&[]);
        assert_eq!(summary.years_covered, 0);
        assert_eq!(summary.total_depreciation, Decimal::ZERO);
        assert_eq!(summary.final_book_value, None);
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        let entry = ScheduleEntry {
            year: 1,
            year_date: purchased(),
            depreciation: dec!(1),
            accumulated_depreciation: dec!(1),
            book_value: dec!(9),
        };
        let json = serde_json::to_value(entry).unwrap();

        assert!(json.get("yearDate").is_some());
        assert!(json.get("accumulatedDepreciation").is_some());
        assert!(json.get("bookValue").is_some());
    }
}
