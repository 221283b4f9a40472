//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

use chrono::TimeDelta;

/// Test that value types are accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use payday_core::types::error::{InstantError, PaydayError};
    use payday_core::types::instant::Instant;
    use payday_core::types::period::PayPeriod;

    let payday = Instant::from_ymd(2024, 1, 15).unwrap();
    assert_eq!((payday.year(), payday.month(), payday.day()), (2024, 1, 15));

    let period = PayPeriod::weeks(2).unwrap();
    assert_eq!(period.as_delta(), TimeDelta::days(14));

    let _: InstantError = Instant::from_ymd(2024, 13, 1).unwrap_err();
    let _: PaydayError = PayPeriod::days(0).unwrap_err();
}

/// Test that re-exports at the types module level work.
#[test]
fn test_types_reexports() {
    use payday_core::types::{Instant, InstantError, PayPeriod, PaydayError};

    assert!(matches!(
        Instant::parse("2024-02-30"),
        Err(InstantError::ParseError(_))
    ));
    assert!(matches!(
        "0w".parse::<PayPeriod>(),
        Err(PaydayError::NonPositivePeriod { .. })
    ));
}

/// Test that calendar functions are accessible via absolute path.
#[test]
fn test_calendar_module_exports() {
    use payday_core::calendar::{
        first_instant_of_month, last_instant_of_month, month_bounds, same_month,
    };
    use payday_core::types::Instant;

    let at = Instant::from_ymd(2024, 2, 22).unwrap();
    let (first, last) = month_bounds(at);
    assert_eq!(first, first_instant_of_month(at));
    assert_eq!(last, last_instant_of_month(at));
    assert!(same_month(first, last));
}

/// Test that schedule functions and types are accessible via absolute path.
#[test]
fn test_schedules_module_exports() {
    use payday_core::schedules::{
        first_payday_in_month, last_payday_in_month, paydays_in_month,
        paydays_in_month_by_range, paydays_in_range, PaydaySchedule, Paydays,
    };
    use payday_core::types::{Instant, PayPeriod};

    let payday = Instant::from_ymd(2000, 7, 1).unwrap();
    let period = TimeDelta::days(14);

    let walked = paydays_in_month(payday, period).unwrap();
    let ranged = paydays_in_month_by_range(payday, period).unwrap();
    assert_eq!(walked, ranged);

    assert_eq!(first_payday_in_month(payday, period).unwrap(), walked[0]);
    assert_eq!(
        last_payday_in_month(payday, period).unwrap(),
        *walked.last().unwrap()
    );

    let range = paydays_in_range(
        payday,
        Instant::from_ymd(2000, 7, 1).unwrap(),
        Instant::from_ymd(2000, 8, 1).unwrap(),
        period,
    )
    .unwrap();
    assert_eq!(range, walked);

    let schedule = PaydaySchedule::new(payday, PayPeriod::biweekly());
    let iter: Paydays = schedule.iter_from(payday);
    assert_eq!(iter.take(3).collect::<Vec<_>>(), walked);
}
