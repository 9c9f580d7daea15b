//! Custom Test Assertions
//!
//! Assertion helpers that say which figure disagreed and by how much.

use rust_decimal::Decimal;

use core_kernel::Money;
use domain_analytics::{loss_ratio_percent, CustomerAnalytics, PeriodMetrics, YearRow};

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a Money value is a kroner amount equal to `expected`
pub fn assert_nok(actual: &Money, expected: Decimal) {
    assert_eq!(*actual, Money::nok(expected), "Expected kr {}, got {}", expected, actual);
}

/// Asserts that a period's loss ratio matches its own cost and premium
pub fn assert_loss_ratio_consistent(period: &PeriodMetrics) {
    let expected = loss_ratio_percent(period.total_cost, period.earned_premium);
    assert_eq!(
        period.loss_ratio_percent, expected,
        "Loss ratio {} does not match cost {} over premium {}",
        period.loss_ratio_percent, period.total_cost, period.earned_premium
    );
}

/// Asserts that year rows are strictly ascending and the last is estimated
pub fn assert_series_well_formed(series: &[YearRow]) {
    assert!(!series.is_empty(), "Year series must contain the running year");
    for pair in series.windows(2) {
        assert!(
            pair[0].year < pair[1].year,
            "Year series not strictly ascending: {} before {}",
            pair[0].year,
            pair[1].year
        );
    }
    for row in &series[..series.len() - 1] {
        assert!(!row.is_estimated, "Closed year {} marked as estimated", row.year);
    }
    assert!(series[series.len() - 1].is_estimated, "Running year not marked as estimated");
}

/// Asserts that historical metrics are the year series plus undated claims
///
/// This is what keeps the overview and the time series from disagreeing.
pub fn assert_history_matches_series(analytics: &CustomerAnalytics) {
    let undated: Vec<_> = analytics
        .claims
        .iter()
        .filter(|c| c.incident_date().is_none())
        .collect();

    let premium = analytics
        .year_series
        .iter()
        .fold(Money::default(), |acc, row| acc + row.premium);
    let cost = analytics
        .year_series
        .iter()
        .map(|row| row.claim_cost)
        .chain(undated.iter().map(|c| c.net_cost()))
        .fold(Money::default(), |acc, m| acc + m);
    let count: u32 = analytics.year_series.iter().map(|row| row.claim_count).sum::<u32>()
        + undated.len() as u32;

    let historical = &analytics.metrics.historical;
    assert_eq!(historical.earned_premium, premium, "Historical premium differs from the series");
    assert_eq!(historical.total_cost, cost, "Historical cost differs from the series");
    assert_eq!(historical.claim_count, count, "Historical claim count differs from the series");
    assert_loss_ratio_consistent(historical);
}
