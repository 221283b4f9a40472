//! Payday generation over an arbitrary half-open range.

use chrono::{DateTime, FixedOffset, TimeDelta};
use std::cmp::Ordering;

use super::iter::Paydays;
use crate::types::period::{delta_to_nanos, nanos_to_delta};
use crate::types::{Instant, PayPeriod, PaydayError};

/// Returns every payday in `[start, end)` for the progression anchored at
/// `payday` with step `period`.
///
/// `payday` may be any member of the progression and may lie anywhere
/// relative to the range. Results are ascending and carry `payday`'s offset.
///
/// # Errors
///
/// Checked in this order, before any computation:
/// - [`PaydayError::NonPositivePeriod`] if `period <= 0`
/// - [`PaydayError::InvalidRange`] if `start >= end`
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use payday_core::schedules::paydays_in_range;
/// use payday_core::types::Instant;
///
/// let paydays = paydays_in_range(
///     Instant::from_ymd(2000, 3, 25).unwrap(),
///     Instant::from_ymd(2000, 4, 5).unwrap(),
///     Instant::from_ymd(2000, 4, 23).unwrap(),
///     TimeDelta::days(14),
/// )
/// .unwrap();
///
/// assert_eq!(
///     paydays,
///     vec![
///         Instant::from_ymd(2000, 4, 8).unwrap(),
///         Instant::from_ymd(2000, 4, 22).unwrap(),
///     ]
/// );
/// ```
pub fn paydays_in_range(
    payday: Instant,
    start: Instant,
    end: Instant,
    period: TimeDelta,
) -> Result<Vec<Instant>, PaydayError> {
    let period = PayPeriod::new(period)?;
    in_range(payday, start, end, period)
}

pub(crate) fn in_range(
    payday: Instant,
    start: Instant,
    end: Instant,
    period: PayPeriod,
) -> Result<Vec<Instant>, PaydayError> {
    if start >= end {
        return Err(PaydayError::InvalidRange { start, end });
    }
    Ok(Paydays::before(first_on_or_after(payday, start, period), end, period).collect())
}

/// First progression member at or after `start`.
///
/// The offset `start - payday` is truncated toward zero to a whole number of
/// periods and applied from `payday` toward `start`; an undershoot is
/// corrected by one period. `None` only if that correction leaves chrono's
/// representable range.
pub(crate) fn first_on_or_after(
    payday: Instant,
    start: Instant,
    period: PayPeriod,
) -> Option<DateTime<FixedOffset>> {
    let anchor = *payday.inner();
    let start_local = start.inner().with_timezone(&payday.offset());

    let distance = delta_to_nanos(start - payday).abs();
    let truncated = nanos_to_delta(distance - distance % period.as_nanos())?;

    let first = match payday.cmp(&start) {
        Ordering::Less => anchor.checked_add_signed(truncated)?,
        Ordering::Greater => anchor.checked_sub_signed(truncated)?,
        Ordering::Equal => return Some(start_local),
    };

    if first < start_local {
        first.checked_add_signed(period.as_delta())
    } else {
        Some(first)
    }
}
