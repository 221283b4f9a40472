//! Point-in-time type for payday calculations.
//!
//! This module provides:
//! - `Instant`: Nanosecond-resolution point in time carrying the fixed UTC
//!   offset that defines its calendar fields
//!
//! # Examples
//!
//! ```
//! use payday_core::types::Instant;
//!
//! let payday = Instant::from_ymd(2000, 3, 8).unwrap();
//! assert_eq!(payday.year(), 2000);
//! assert_eq!(payday.to_string(), "2000-03-08T00:00:00Z");
//!
//! let parsed: Instant = "2000-03-08T02:00:00+02:00".parse().unwrap();
//! assert_eq!(parsed, payday);
//! ```

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, SecondsFormat, TimeDelta, TimeZone,
};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::InstantError;

/// Nanosecond-resolution point in time with a fixed UTC offset.
///
/// Wraps `chrono::DateTime<FixedOffset>`. The offset is the calendar context:
/// `year`, `month` and `day` are read in it, and month boundaries derived from
/// an instant are resolved in it. Equality, ordering and hashing compare the
/// absolute point in time, so the same moment seen from two offsets is equal.
///
/// Years are restricted to [`Instant::MIN_YEAR`]..=[`Instant::MAX_YEAR`],
/// which keeps every month boundary representable.
///
/// # Examples
///
/// ```
/// use chrono::FixedOffset;
/// use payday_core::types::Instant;
///
/// let utc = Instant::from_ymd_hms_nano(2024, 2, 29, 23, 30, 0, 0).unwrap();
/// let tokyo = utc.with_offset(FixedOffset::east_opt(9 * 3600).unwrap()).unwrap();
///
/// assert_eq!(utc, tokyo);
/// assert_eq!(utc.month(), 2);
/// assert_eq!(tokyo.month(), 3);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "DateTime<FixedOffset>", into = "DateTime<FixedOffset>")
)]
pub struct Instant(DateTime<FixedOffset>);

impl Instant {
    /// Earliest supported calendar year.
    pub const MIN_YEAR: i32 = 1;

    /// Latest supported calendar year.
    pub const MAX_YEAR: i32 = 9999;

    /// Creates an Instant at UTC midnight of the given date.
    ///
    /// # Examples
    ///
    /// ```
    /// use payday_core::types::Instant;
    ///
    /// let leap = Instant::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap.day(), 29);
    ///
    /// assert!(Instant::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, InstantError> {
        Self::from_ymd_hms_nano(year, month, day, 0, 0, 0, 0)
    }

    /// Creates an Instant in UTC from calendar and clock components.
    ///
    /// Leap-second nanosecond values (`>= 1_000_000_000`) are rejected.
    pub fn from_ymd_hms_nano(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        nano: u32,
    ) -> Result<Self, InstantError> {
        let invalid = InstantError::InvalidDateTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
            nano,
        };
        if nano >= 1_000_000_000 {
            return Err(invalid);
        }

        let naive = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_nano_opt(hour, minute, second, nano))
            .ok_or(invalid)?;

        Self::checked(naive.and_utc().fixed_offset())
    }

    /// Creates an Instant from a chrono date-time in any time zone.
    ///
    /// The zone is resolved to the fixed offset in effect at that moment.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Result<Self, InstantError> {
        Self::checked(datetime.fixed_offset())
    }

    /// Parses an RFC 3339 string, or a bare `YYYY-MM-DD` date as UTC midnight.
    ///
    /// # Examples
    ///
    /// ```
    /// use payday_core::types::Instant;
    ///
    /// let a = Instant::parse("2000-07-01").unwrap();
    /// let b = Instant::parse("2000-07-01T00:00:00Z").unwrap();
    /// assert_eq!(a, b);
    ///
    /// assert!(Instant::parse("July 1st").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, InstantError> {
        let s = s.trim();
        if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
            return Self::checked(datetime);
        }

        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
            InstantError::ParseError(format!("'{}' is neither RFC 3339 nor YYYY-MM-DD: {}", s, e))
        })?;
        Self::from_ymd(date.year(), date.month(), date.day())
    }

    /// Returns the same moment expressed in another offset.
    ///
    /// # Errors
    ///
    /// [`InstantError::OutOfRange`] if the year read in `offset` leaves
    /// `MIN_YEAR..=MAX_YEAR`.
    pub fn with_offset(self, offset: FixedOffset) -> Result<Self, InstantError> {
        Self::checked(self.0.with_timezone(&offset))
    }

    /// Returns the underlying chrono date-time.
    pub fn into_inner(self) -> DateTime<FixedOffset> {
        self.0
    }

    /// Returns the UTC offset that defines this instant's calendar fields.
    pub fn offset(&self) -> FixedOffset {
        *self.0.offset()
    }

    /// Returns the year, read in this instant's offset.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1-12), read in this instant's offset.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day of month (1-31), read in this instant's offset.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Wraps a date-time without the supported-year check.
    ///
    /// Only for internal bounds such as the exclusive end of December 9999.
    pub(crate) fn from_inner_unchecked(datetime: DateTime<FixedOffset>) -> Self {
        Instant(datetime)
    }

    pub(crate) fn inner(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    fn checked(datetime: DateTime<FixedOffset>) -> Result<Self, InstantError> {
        let year = datetime.year();
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(InstantError::OutOfRange { year });
        }
        Ok(Instant(datetime))
    }
}

impl Sub for Instant {
    type Output = TimeDelta;

    /// Returns the signed duration from `other` to `self`.
    fn sub(self, other: Self) -> TimeDelta {
        self.0 - other.0
    }
}

impl TryFrom<DateTime<FixedOffset>> for Instant {
    type Error = InstantError;

    fn try_from(datetime: DateTime<FixedOffset>) -> Result<Self, InstantError> {
        Self::checked(datetime)
    }
}

impl From<Instant> for DateTime<FixedOffset> {
    fn from(instant: Instant) -> Self {
        instant.0
    }
}

impl FromStr for Instant {
    type Err = InstantError;

    fn from_str(s: &str) -> Result<Self, InstantError> {
        Instant::parse(s)
    }
}

impl fmt::Display for Instant {
    /// Formats as RFC 3339, printing only the sub-second digits needed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ymd_is_utc_midnight() {
        let instant = Instant::from_ymd(2000, 3, 8).unwrap();
        assert_eq!(instant.offset().local_minus_utc(), 0);
        assert_eq!(instant.to_string(), "2000-03-08T00:00:00Z");
    }

    #[test]
    fn test_invalid_components_rejected() {
        assert!(matches!(
            Instant::from_ymd(2023, 2, 29),
            Err(InstantError::InvalidDateTime { .. })
        ));
        assert!(Instant::from_ymd_hms_nano(2024, 1, 1, 24, 0, 0, 0).is_err());
        assert!(Instant::from_ymd_hms_nano(2024, 1, 1, 23, 59, 59, 1_000_000_000).is_err());
    }

    #[test]
    fn test_year_window() {
        assert!(Instant::from_ymd(1, 1, 1).is_ok());
        assert!(Instant::from_ymd(9999, 12, 31).is_ok());
        assert_eq!(
            Instant::from_ymd(0, 12, 31),
            Err(InstantError::OutOfRange { year: 0 })
        );
        assert_eq!(
            Instant::from_ymd(10_000, 1, 1),
            Err(InstantError::OutOfRange { year: 10_000 })
        );
    }

    #[test]
    fn test_year_window_uses_local_fields() {
        // 9999-12-31T23:00Z is already year 10000 at +02:00.
        let utc = Instant::parse("9999-12-31T23:00:00Z").unwrap();
        let ahead = utc
            .into_inner()
            .with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap());
        assert_eq!(
            Instant::from_datetime(&ahead),
            Err(InstantError::OutOfRange { year: 10_000 })
        );
    }

    #[test]
    fn test_with_offset_keeps_year_window() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let minus_one = FixedOffset::west_opt(3600).unwrap();

        let late = Instant::from_ymd_hms_nano(9999, 12, 31, 23, 0, 0, 0).unwrap();
        assert_eq!(
            late.with_offset(plus_two),
            Err(InstantError::OutOfRange { year: 10_000 })
        );

        let early = Instant::from_ymd(1, 1, 1).unwrap();
        assert_eq!(
            early.with_offset(minus_one),
            Err(InstantError::OutOfRange { year: 0 })
        );

        // Same moment, still inside the window on the other side.
        let shifted = late.with_offset(minus_one).unwrap();
        assert_eq!(shifted, late);
        assert_eq!((shifted.year(), shifted.day()), (9999, 31));
    }

    #[test]
    fn test_parse_forms() {
        let date_only = Instant::parse("2024-02-29").unwrap();
        let rfc = Instant::parse("2024-02-29T00:00:00Z").unwrap();
        assert_eq!(date_only, rfc);

        let offset: Instant = "2024-02-29T09:00:00+09:00".parse().unwrap();
        assert_eq!(offset, rfc);
        assert_eq!(offset.offset().local_minus_utc(), 9 * 3600);

        assert!(matches!(
            Instant::parse("not-a-date"),
            Err(InstantError::ParseError(_))
        ));
    }

    #[test]
    fn test_display_keeps_nanoseconds() {
        let instant = Instant::from_ymd_hms_nano(2024, 2, 29, 23, 59, 59, 999_999_999).unwrap();
        assert_eq!(instant.to_string(), "2024-02-29T23:59:59.999999999Z");
    }

    #[test]
    fn test_calendar_fields_follow_offset() {
        let utc = Instant::from_ymd_hms_nano(2023, 12, 31, 22, 0, 0, 0).unwrap();
        let ahead = utc
            .with_offset(FixedOffset::east_opt(3 * 3600).unwrap())
            .unwrap();
        assert_eq!((utc.year(), utc.month(), utc.day()), (2023, 12, 31));
        assert_eq!((ahead.year(), ahead.month(), ahead.day()), (2024, 1, 1));
        assert_eq!(utc, ahead);
    }

    #[test]
    fn test_sub_is_signed() {
        let a = Instant::from_ymd(2000, 3, 8).unwrap();
        let b = Instant::from_ymd(2000, 3, 22).unwrap();
        assert_eq!(b - a, TimeDelta::days(14));
        assert_eq!(a - b, TimeDelta::days(-14));
    }
}
