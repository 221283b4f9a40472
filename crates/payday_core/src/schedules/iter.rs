//! Lazy ascending iteration over a slice of a payday progression.

use chrono::{DateTime, FixedOffset, TimeDelta};
use std::iter::FusedIterator;

use crate::types::{Instant, PayPeriod};

/// Where iteration stops.
#[derive(Debug, Clone, Copy)]
enum Until {
    /// Stop before reaching this instant (half-open upper bound).
    Before(DateTime<FixedOffset>),
    /// Stop after emitting this instant (closed upper bound).
    Through(DateTime<FixedOffset>),
    /// Run until the supported calendar window is exhausted.
    Unbounded,
}

/// Ascending iterator over paydays, each exactly one period after the last.
///
/// Created by [`PaydaySchedule::iter_from`](super::PaydaySchedule::iter_from)
/// and used internally to materialise range and month queries. Every yielded
/// value lies within the supported [`Instant`] year window; iteration ends
/// as soon as the next step would leave it.
///
/// # Examples
///
/// ```
/// use payday_core::schedules::PaydaySchedule;
/// use payday_core::types::{Instant, PayPeriod};
///
/// let schedule = PaydaySchedule::new(Instant::from_ymd(2000, 3, 8).unwrap(), PayPeriod::biweekly());
/// let next: Vec<String> = schedule
///     .iter_from(Instant::from_ymd(2000, 3, 9).unwrap())
///     .take(2)
///     .map(|p| p.to_string())
///     .collect();
///
/// assert_eq!(next, ["2000-03-22T00:00:00Z", "2000-04-05T00:00:00Z"]);
/// ```
#[derive(Debug, Clone)]
pub struct Paydays {
    next: Option<DateTime<FixedOffset>>,
    until: Until,
    step: TimeDelta,
}

impl Paydays {
    /// Paydays from `first` while strictly before `end`.
    pub(crate) fn before(
        first: Option<DateTime<FixedOffset>>,
        end: Instant,
        period: PayPeriod,
    ) -> Self {
        Self::with_bound(first, Until::Before(*end.inner()), period)
    }

    /// Paydays from `first` up to and including `last`.
    pub(crate) fn through(first: Instant, last: Instant, period: PayPeriod) -> Self {
        Self::with_bound(Some(*first.inner()), Until::Through(*last.inner()), period)
    }

    /// Paydays from `first` onwards.
    pub(crate) fn unbounded(first: Option<DateTime<FixedOffset>>, period: PayPeriod) -> Self {
        Self::with_bound(first, Until::Unbounded, period)
    }

    fn with_bound(first: Option<DateTime<FixedOffset>>, until: Until, period: PayPeriod) -> Self {
        Self {
            next: first,
            until,
            step: period.as_delta(),
        }
    }

    fn admits(&self, current: &DateTime<FixedOffset>) -> bool {
        match self.until {
            Until::Before(end) => *current < end,
            Until::Through(last) => *current <= last,
            Until::Unbounded => true,
        }
    }
}

impl Iterator for Paydays {
    type Item = Instant;

    fn next(&mut self) -> Option<Instant> {
        let current = self.next.take()?;
        if !self.admits(&current) {
            return None;
        }
        let payday = Instant::try_from(current).ok()?;
        self.next = current.checked_add_signed(self.step);
        Some(payday)
    }
}

impl FusedIterator for Paydays {}
