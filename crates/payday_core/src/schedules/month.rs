//! Payday generation over a calendar month.
//!
//! Two strategies produce the same sequence for a reference payday inside
//! its own month:
//! - [`paydays_in_month_by_range`] resolves the month boundaries and runs the
//!   range generator over `[first instant, last instant]`;
//! - [`paydays_in_month`] walks from the reference by whole periods until the
//!   next step would leave the month, then emits the span it found.

use chrono::TimeDelta;

use super::iter::Paydays;
use super::range::first_on_or_after;
use crate::calendar::{first_instant_of_month, month_end_exclusive, same_month};
use crate::types::{Instant, PayPeriod, PaydayError};

/// Returns every payday in `payday`'s month using the month boundaries.
///
/// The month is read in `payday`'s offset and treated as the half-open range
/// `[first instant, last instant + 1ns)`, so a payday on the last nanosecond
/// of the month is included.
///
/// # Errors
///
/// [`PaydayError::NonPositivePeriod`] if `period <= 0`.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use payday_core::schedules::paydays_in_month_by_range;
/// use payday_core::types::Instant;
///
/// let paydays = paydays_in_month_by_range(
///     Instant::from_ymd(2000, 7, 15).unwrap(),
///     TimeDelta::days(14),
/// )
/// .unwrap();
///
/// assert_eq!(paydays.len(), 3);
/// assert_eq!(paydays[0], Instant::from_ymd(2000, 7, 1).unwrap());
/// ```
pub fn paydays_in_month_by_range(
    payday: Instant,
    period: TimeDelta,
) -> Result<Vec<Instant>, PaydayError> {
    let period = PayPeriod::new(period)?;
    Ok(in_month_of(payday, payday, period))
}

/// Returns every payday in `payday`'s month by walking from `payday`.
///
/// # Errors
///
/// [`PaydayError::NonPositivePeriod`] if `period <= 0`.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use payday_core::schedules::paydays_in_month;
/// use payday_core::types::Instant;
///
/// // Later occurrences exist, but none in July.
/// let paydays = paydays_in_month(Instant::from_ymd(2000, 7, 4).unwrap(), TimeDelta::days(100)).unwrap();
/// assert_eq!(paydays, vec![Instant::from_ymd(2000, 7, 4).unwrap()]);
/// ```
pub fn paydays_in_month(payday: Instant, period: TimeDelta) -> Result<Vec<Instant>, PaydayError> {
    let period = PayPeriod::new(period)?;
    Ok(walk_month(payday, period))
}

/// Returns the earliest payday in `payday`'s month.
///
/// Walks backward by `period` while the stepped value stays in the month.
///
/// # Errors
///
/// [`PaydayError::NonPositivePeriod`] if `period <= 0`.
pub fn first_payday_in_month(payday: Instant, period: TimeDelta) -> Result<Instant, PaydayError> {
    let period = PayPeriod::new(period)?;
    Ok(walk(payday, -period.as_delta()))
}

/// Returns the latest payday in `payday`'s month.
///
/// Walks forward by `period` while the stepped value stays in the month.
///
/// # Errors
///
/// [`PaydayError::NonPositivePeriod`] if `period <= 0`.
pub fn last_payday_in_month(payday: Instant, period: TimeDelta) -> Result<Instant, PaydayError> {
    let period = PayPeriod::new(period)?;
    Ok(walk(payday, period.as_delta()))
}

/// Paydays of the progression anchored at `reference` inside `at`'s month.
pub(crate) fn in_month_of(reference: Instant, at: Instant, period: PayPeriod) -> Vec<Instant> {
    let start = first_instant_of_month(at);
    let end = month_end_exclusive(at);
    Paydays::before(first_on_or_after(reference, start, period), end, period).collect()
}

pub(crate) fn walk_month(payday: Instant, period: PayPeriod) -> Vec<Instant> {
    let first = walk(payday, -period.as_delta());
    let last = walk(payday, period.as_delta());
    Paydays::through(first, last, period).collect()
}

/// Steps from `payday` by `step` until the next step would leave its month.
///
/// Stepping by a fixed duration always lands on a normalised calendar date,
/// so the month comparison never sees overflowing day fields.
pub(crate) fn walk(payday: Instant, step: TimeDelta) -> Instant {
    let mut current = payday;
    while let Some(next) = current.inner().checked_add_signed(step) {
        let next = Instant::from_inner_unchecked(next);
        if !same_month(next, payday) {
            break;
        }
        current = next;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(y: i32, m: u32, d: u32) -> Instant {
        Instant::from_ymd(y, m, d).unwrap()
    }

    fn two_weeks() -> TimeDelta {
        TimeDelta::days(14)
    }

    #[test]
    fn test_period_must_be_positive() {
        let now = utc(2026, 10, 18);
        for period in [TimeDelta::zero(), TimeDelta::seconds(-1)] {
            assert!(matches!(
                paydays_in_month(now, period),
                Err(PaydayError::NonPositivePeriod { .. })
            ));
            assert!(matches!(
                paydays_in_month_by_range(now, period),
                Err(PaydayError::NonPositivePeriod { .. })
            ));
            assert!(first_payday_in_month(now, period).is_err());
            assert!(last_payday_in_month(now, period).is_err());
        }
    }

    #[test]
    fn test_three_biweekly_paydays_from_july_first() {
        let expected = vec![utc(2000, 7, 1), utc(2000, 7, 15), utc(2000, 7, 29)];
        for reference in &expected {
            assert_eq!(paydays_in_month(*reference, two_weeks()).unwrap(), expected);
            assert_eq!(
                paydays_in_month_by_range(*reference, two_weeks()).unwrap(),
                expected
            );
        }
    }

    #[test]
    fn test_two_biweekly_paydays_from_july_fourth() {
        let expected = vec![utc(2000, 7, 4), utc(2000, 7, 18)];
        for reference in &expected {
            assert_eq!(paydays_in_month(*reference, two_weeks()).unwrap(), expected);
            assert_eq!(
                paydays_in_month_by_range(*reference, two_weeks()).unwrap(),
                expected
            );
        }
    }

    #[test]
    fn test_single_payday_when_period_exceeds_month() {
        let reference = utc(2000, 7, 4);
        let period = TimeDelta::days(100);
        assert_eq!(paydays_in_month(reference, period).unwrap(), vec![reference]);
        assert_eq!(
            paydays_in_month_by_range(reference, period).unwrap(),
            vec![reference]
        );
    }

    #[test]
    fn test_first_and_last_payday_walks() {
        let reference = utc(2000, 7, 15);
        assert_eq!(
            first_payday_in_month(reference, two_weeks()).unwrap(),
            utc(2000, 7, 1)
        );
        assert_eq!(
            last_payday_in_month(reference, two_weeks()).unwrap(),
            utc(2000, 7, 29)
        );
    }

    #[test]
    fn test_walk_stays_in_leap_february() {
        let reference = utc(2024, 2, 15);
        assert_eq!(
            last_payday_in_month(reference, two_weeks()).unwrap(),
            utc(2024, 2, 29)
        );
        assert_eq!(
            last_payday_in_month(utc(2023, 2, 15), two_weeks()).unwrap(),
            utc(2023, 2, 15)
        );
    }

    #[test]
    fn test_last_nanosecond_of_month_included() {
        let last = Instant::from_ymd_hms_nano(2000, 7, 31, 23, 59, 59, 999_999_999).unwrap();
        let period = TimeDelta::days(31);
        assert_eq!(paydays_in_month_by_range(last, period).unwrap(), vec![last]);
        assert_eq!(paydays_in_month(last, period).unwrap(), vec![last]);
    }

    #[test]
    fn test_month_read_in_reference_offset() {
        // 2000-06-30T22:00Z is already July 1st at +03:00.
        let plus_three = FixedOffset::east_opt(3 * 3600).unwrap();
        let reference = Instant::from_ymd_hms_nano(2000, 6, 30, 22, 0, 0, 0)
            .unwrap()
            .with_offset(plus_three)
            .unwrap();

        let walked = paydays_in_month(reference, two_weeks()).unwrap();
        let ranged = paydays_in_month_by_range(reference, two_weeks()).unwrap();

        assert_eq!(walked, ranged);
        assert_eq!(walked.len(), 3);
        assert!(walked.iter().all(|p| p.month() == 7));
    }

    #[test]
    fn test_in_month_of_other_month() {
        let paydays = in_month_of(utc(2000, 7, 1), utc(2000, 8, 20), PayPeriod::biweekly());
        assert_eq!(paydays, vec![utc(2000, 8, 12), utc(2000, 8, 26)]);
    }

    #[test]
    fn test_walk_at_supported_extremes() {
        let december = utc(9999, 12, 20);
        assert_eq!(
            paydays_in_month(december, two_weeks()).unwrap(),
            vec![utc(9999, 12, 6), utc(9999, 12, 20)]
        );
        let january = utc(1, 1, 10);
        assert_eq!(
            paydays_in_month(january, two_weeks()).unwrap(),
            vec![utc(1, 1, 10), utc(1, 1, 24)]
        );
    }

    #[test]
    fn test_offset_reference_at_window_edge_contains_itself() {
        let plus_one = FixedOffset::east_opt(3600).unwrap();
        let reference = Instant::from_ymd_hms_nano(9999, 12, 31, 22, 0, 0, 0)
            .unwrap()
            .with_offset(plus_one)
            .unwrap();

        let walked = paydays_in_month(reference, two_weeks()).unwrap();
        let ranged = paydays_in_month_by_range(reference, two_weeks()).unwrap();
        assert!(walked.contains(&reference));
        assert_eq!(walked, ranged);
        assert_eq!(*walked.last().unwrap(), reference);
    }
}
