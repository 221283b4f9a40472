//! Month boundary functions.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta, TimeZone};

use crate::types::Instant;

/// Returns midnight on the first day of `at`'s month, in `at`'s offset.
///
/// # Examples
///
/// ```
/// use payday_core::calendar::first_instant_of_month;
/// use payday_core::types::Instant;
///
/// let at = Instant::from_ymd(2024, 2, 29).unwrap();
/// assert_eq!(first_instant_of_month(at), Instant::from_ymd(2024, 2, 1).unwrap());
/// ```
pub fn first_instant_of_month(at: Instant) -> Instant {
    Instant::from_inner_unchecked(month_start(at.year(), at.month(), at.offset()))
}

/// Returns the last representable instant of `at`'s month.
///
/// This is the first instant of the following month minus one nanosecond;
/// December rolls into January of the next year.
///
/// # Examples
///
/// ```
/// use payday_core::calendar::last_instant_of_month;
/// use payday_core::types::Instant;
///
/// let at = Instant::from_ymd(1999, 12, 5).unwrap();
/// let last = last_instant_of_month(at);
/// assert_eq!(last, Instant::from_ymd_hms_nano(1999, 12, 31, 23, 59, 59, 999_999_999).unwrap());
/// ```
pub fn last_instant_of_month(at: Instant) -> Instant {
    Instant::from_inner_unchecked(*month_end_exclusive(at).inner() - TimeDelta::nanoseconds(1))
}

/// Returns `(first_instant_of_month(at), last_instant_of_month(at))`.
pub fn month_bounds(at: Instant) -> (Instant, Instant) {
    (first_instant_of_month(at), last_instant_of_month(at))
}

/// Whether two instants share calendar year and month.
///
/// Each instant's fields are read in its own offset.
pub fn same_month(a: Instant, b: Instant) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// First instant of the month after `at`'s month.
///
/// For December 9999 this lies in year 10000, outside the public window;
/// only use it as an exclusive bound.
pub(crate) fn month_end_exclusive(at: Instant) -> Instant {
    let (year, month) = match at.month() {
        12 => (at.year() + 1, 1),
        m => (at.year(), m + 1),
    };
    Instant::from_inner_unchecked(month_start(year, month, at.offset()))
}

// `year` comes from an `Instant`, so it lies in `Instant::MIN_YEAR..=MAX_YEAR`
// (plus one for the December roll), well inside chrono's date range. A fixed
// offset has no gaps or folds, so local midnight maps to exactly one instant.
fn month_start(year: i32, month: u32, offset: FixedOffset) -> DateTime<FixedOffset> {
    let local = NaiveDate::from_ymd_opt(year, month, 1)
        .expect("month start within chrono's range")
        .and_time(NaiveTime::MIN);
    offset
        .from_local_datetime(&local)
        .single()
        .expect("fixed offset is unambiguous")
}
