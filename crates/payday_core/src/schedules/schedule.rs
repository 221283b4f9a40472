//! PaydaySchedule implementation.

use super::iter::Paydays;
use super::month::{in_month_of, walk, walk_month};
use super::range::{first_on_or_after, in_range};
use crate::types::period::delta_to_nanos;
use crate::types::{Instant, PayPeriod, PaydayError};

/// A payday progression: one known payday plus the period between paydays.
///
/// Defines the infinite sequence `reference + k * period` for every integer
/// `k`. All queries select a finite, ascending slice of it. Any member of the
/// progression can serve as the reference without changing the answers.
///
/// # Examples
///
/// ```
/// use payday_core::schedules::PaydaySchedule;
/// use payday_core::types::{Instant, PayPeriod};
///
/// let schedule = PaydaySchedule::new(Instant::from_ymd(2000, 7, 1).unwrap(), PayPeriod::biweekly());
///
/// assert_eq!(schedule.in_month().len(), 3);
/// assert_eq!(schedule.in_month(), schedule.in_month_by_range());
///
/// let august = schedule.in_month_of(Instant::from_ymd(2000, 8, 20).unwrap());
/// assert_eq!(august[0], Instant::from_ymd(2000, 8, 12).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaydaySchedule {
    reference: Instant,
    period: PayPeriod,
}

impl PaydaySchedule {
    /// Creates a schedule from a known payday and a validated period.
    pub fn new(reference: Instant, period: PayPeriod) -> Self {
        Self { reference, period }
    }

    /// Returns the reference payday.
    #[inline]
    pub fn reference(&self) -> Instant {
        self.reference
    }

    /// Returns the pay period.
    #[inline]
    pub fn period(&self) -> PayPeriod {
        self.period
    }

    /// Returns the paydays in `[start, end)`.
    ///
    /// # Errors
    ///
    /// [`PaydayError::InvalidRange`] if `start >= end`.
    pub fn in_range(&self, start: Instant, end: Instant) -> Result<Vec<Instant>, PaydayError> {
        in_range(self.reference, start, end, self.period)
    }

    /// Returns the paydays in the reference's month, found by walking.
    pub fn in_month(&self) -> Vec<Instant> {
        walk_month(self.reference, self.period)
    }

    /// Returns the paydays in the reference's month, found from the month
    /// boundaries.
    pub fn in_month_by_range(&self) -> Vec<Instant> {
        in_month_of(self.reference, self.reference, self.period)
    }

    /// Returns the paydays in the month containing `at`.
    ///
    /// The month is read in `at`'s offset; the reference may lie in any month.
    pub fn in_month_of(&self, at: Instant) -> Vec<Instant> {
        in_month_of(self.reference, at, self.period)
    }

    /// Returns the earliest payday in the reference's month.
    pub fn first_in_month(&self) -> Instant {
        walk(self.reference, -self.period.as_delta())
    }

    /// Returns the latest payday in the reference's month.
    pub fn last_in_month(&self) -> Instant {
        walk(self.reference, self.period.as_delta())
    }

    /// Returns the first payday at or after `at`.
    ///
    /// `None` when that payday would fall past the supported year window.
    pub fn next_on_or_after(&self, at: Instant) -> Option<Instant> {
        first_on_or_after(self.reference, at, self.period).and_then(|t| Instant::try_from(t).ok())
    }

    /// Returns the last payday strictly before `at`.
    ///
    /// `None` when that payday would fall before the supported year window.
    pub fn previous_before(&self, at: Instant) -> Option<Instant> {
        let next = first_on_or_after(self.reference, at, self.period)?;
        next.checked_sub_signed(self.period.as_delta())
            .and_then(|t| Instant::try_from(t).ok())
    }

    /// Whether `at` is a member of the progression.
    pub fn is_payday(&self, at: Instant) -> bool {
        delta_to_nanos(at - self.reference) % self.period.as_nanos() == 0
    }

    /// Returns an unbounded ascending iterator starting at the first payday
    /// at or after `at`.
    pub fn iter_from(&self, at: Instant) -> Paydays {
        Paydays::unbounded(first_on_or_after(self.reference, at, self.period), self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, m: u32, d: u32) -> Instant {
        Instant::from_ymd(y, m, d).unwrap()
    }

    fn biweekly_from(y: i32, m: u32, d: u32) -> PaydaySchedule {
        PaydaySchedule::new(utc(y, m, d), PayPeriod::biweekly())
    }

    #[test]
    fn test_accessors() {
        let schedule = biweekly_from(2000, 3, 8);
        assert_eq!(schedule.reference(), utc(2000, 3, 8));
        assert_eq!(schedule.period(), PayPeriod::biweekly());
    }

    #[test]
    fn test_in_range_rejects_inverted_range() {
        let schedule = biweekly_from(2000, 3, 8);
        assert!(matches!(
            schedule.in_range(utc(2000, 4, 1), utc(2000, 3, 1)),
            Err(PaydayError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_in_range() {
        let schedule = biweekly_from(2000, 3, 8);
        assert_eq!(
            schedule.in_range(utc(2000, 3, 5), utc(2000, 3, 23)).unwrap(),
            vec![utc(2000, 3, 8), utc(2000, 3, 22)]
        );
    }

    #[test]
    fn test_month_queries() {
        let schedule = biweekly_from(2000, 7, 15);
        assert_eq!(schedule.first_in_month(), utc(2000, 7, 1));
        assert_eq!(schedule.last_in_month(), utc(2000, 7, 29));
        assert_eq!(schedule.in_month(), schedule.in_month_by_range());
    }

    #[test]
    fn test_in_month_of_earlier_month() {
        let schedule = biweekly_from(2000, 7, 1);
        assert_eq!(
            schedule.in_month_of(utc(2000, 6, 10)),
            vec![utc(2000, 6, 3), utc(2000, 6, 17)]
        );
    }

    #[test]
    fn test_next_and_previous() {
        let schedule = biweekly_from(2000, 3, 8);

        assert_eq!(schedule.next_on_or_after(utc(2000, 3, 8)), Some(utc(2000, 3, 8)));
        assert_eq!(schedule.next_on_or_after(utc(2000, 3, 9)), Some(utc(2000, 3, 22)));
        assert_eq!(schedule.previous_before(utc(2000, 3, 8)), Some(utc(2000, 2, 23)));
        assert_eq!(schedule.previous_before(utc(2000, 3, 9)), Some(utc(2000, 3, 8)));
    }

    #[test]
    fn test_previous_before_start_of_window() {
        let schedule = biweekly_from(1, 1, 1);
        assert_eq!(schedule.previous_before(utc(1, 1, 1)), None);
        assert_eq!(schedule.next_on_or_after(utc(1, 1, 1)), Some(utc(1, 1, 1)));
    }

    #[test]
    fn test_is_payday() {
        let schedule = biweekly_from(2000, 3, 8);
        assert!(schedule.is_payday(utc(2000, 3, 22)));
        assert!(schedule.is_payday(utc(1999, 12, 29)));
        assert!(!schedule.is_payday(utc(2000, 3, 15)));
        assert!(!schedule.is_payday(
            Instant::from_ymd_hms_nano(2000, 3, 22, 0, 0, 0, 1).unwrap()
        ));
    }

    #[test]
    fn test_iter_from() {
        let schedule = biweekly_from(2000, 3, 8);
        let paydays: Vec<Instant> = schedule.iter_from(utc(2000, 3, 1)).take(3).collect();
        assert_eq!(
            paydays,
            vec![utc(2000, 3, 8), utc(2000, 3, 22), utc(2000, 4, 5)]
        );
    }
}
