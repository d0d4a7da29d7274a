//! Custom Test Assertions
//!
//! Invariant checks shared by unit, property, and API tests. Each panics
//! with the offending values so proptest shrinking output is readable.

use domain_asset::{DepreciationResult, ScheduleEntry};
use rust_decimal::Decimal;

/// Asserts that two decimals differ by at most `tolerance`
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimals differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts the valuation stays inside `[salvage, cost]` and
/// accumulated depreciation inside `[0, cost - salvage]`
pub fn assert_valuation_bounds(result: &DepreciationResult, cost: Decimal, salvage: Decimal) {
    assert!(
        result.current_value >= salvage && result.current_value <= cost,
        "current_value {} outside [{}, {}]",
        result.current_value,
        salvage,
        cost
    );
    assert!(
        result.accumulated_depreciation >= Decimal::ZERO
            && result.accumulated_depreciation <= cost - salvage,
        "accumulated_depreciation {} outside [0, {}]",
        result.accumulated_depreciation,
        cost - salvage
    );
}

/// Asserts book values never rise, accumulated depreciation never falls,
/// and book values stay inside `[salvage, cost]`
pub fn assert_schedule_monotonic(schedule: &[ScheduleEntry], cost: Decimal, salvage: Decimal) {
    for entry in schedule {
        assert!(
            entry.book_value >= salvage && entry.book_value <= cost,
            "year {}: book value {} outside [{}, {}]",
            entry.year,
            entry.book_value,
            salvage,
            cost
        );
        assert!(
            entry.depreciation >= Decimal::ZERO,
            "year {}: negative depreciation {}",
            entry.year,
            entry.depreciation
        );
    }

    for pair in schedule.windows(2) {
        assert!(
            pair[1].book_value <= pair[0].book_value,
            "book value rose from {} (year {}) to {} (year {})",
            pair[0].book_value,
            pair[0].year,
            pair[1].book_value,
            pair[1].year
        );
        assert!(
            pair[1].accumulated_depreciation >= pair[0].accumulated_depreciation,
            "accumulated depreciation fell from {} (year {}) to {} (year {})",
            pair[0].accumulated_depreciation,
            pair[0].year,
            pair[1].accumulated_depreciation,
            pair[1].year
        );
    }
}
