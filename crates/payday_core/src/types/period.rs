//! Pay period type.
//!
//! This module provides:
//! - `PayPeriod`: Strictly positive fixed interval between consecutive paydays
//!
//! # Text form
//!
//! A pay period is written as an integer followed by a unit: `w` (weeks),
//! `d` (days), `h` (hours), `m` (minutes), `s` (seconds) or `ns`
//! (nanoseconds). Display picks the largest unit that divides the period
//! exactly.
//!
//! ```
//! use payday_core::types::PayPeriod;
//!
//! let fortnight: PayPeriod = "14d".parse().unwrap();
//! assert_eq!(fortnight, PayPeriod::biweekly());
//! assert_eq!(fortnight.to_string(), "2w");
//! ```

use chrono::TimeDelta;
use std::fmt;
use std::str::FromStr;

use super::error::PaydayError;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Units accepted in the text form, largest first.
const UNITS: [(&str, i128); 6] = [
    ("w", 7 * 86_400 * NANOS_PER_SECOND),
    ("d", 86_400 * NANOS_PER_SECOND),
    ("h", 3_600 * NANOS_PER_SECOND),
    ("m", 60 * NANOS_PER_SECOND),
    ("s", NANOS_PER_SECOND),
    ("ns", 1),
];

/// Strictly positive interval between consecutive paydays.
///
/// Wraps `chrono::TimeDelta`; the positivity invariant is checked once at
/// construction.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use payday_core::types::{PayPeriod, PaydayError};
///
/// let period = PayPeriod::days(14).unwrap();
/// assert_eq!(period.as_delta(), TimeDelta::days(14));
///
/// assert!(matches!(
///     PayPeriod::new(TimeDelta::zero()),
///     Err(PaydayError::NonPositivePeriod { .. })
/// ));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct PayPeriod(TimeDelta);

impl PayPeriod {
    /// Creates a pay period, rejecting zero and negative durations.
    pub fn new(delta: TimeDelta) -> Result<Self, PaydayError> {
        if delta <= TimeDelta::zero() {
            return Err(PaydayError::NonPositivePeriod { period: delta });
        }
        Ok(PayPeriod(delta))
    }

    /// Creates a pay period of `n` whole days.
    pub fn days(n: i64) -> Result<Self, PaydayError> {
        Self::from_nanos(i128::from(n) * UNITS[1].1)
    }

    /// Creates a pay period of `n` whole weeks.
    pub fn weeks(n: i64) -> Result<Self, PaydayError> {
        Self::from_nanos(i128::from(n) * UNITS[0].1)
    }

    /// Creates a pay period of `n` whole hours.
    pub fn hours(n: i64) -> Result<Self, PaydayError> {
        Self::from_nanos(i128::from(n) * UNITS[2].1)
    }

    /// Seven days.
    pub fn weekly() -> Self {
        PayPeriod(TimeDelta::days(7))
    }

    /// Fourteen days.
    pub fn biweekly() -> Self {
        PayPeriod(TimeDelta::days(14))
    }

    /// Returns the period as a chrono duration.
    #[inline]
    pub fn as_delta(&self) -> TimeDelta {
        self.0
    }

    /// Returns the period in nanoseconds.
    ///
    /// `i128` holds any `TimeDelta`, so this never overflows.
    #[inline]
    pub fn as_nanos(&self) -> i128 {
        delta_to_nanos(self.0)
    }

    fn from_nanos(nanos: i128) -> Result<Self, PaydayError> {
        let delta = nanos_to_delta(nanos).ok_or_else(|| {
            PaydayError::ParsePeriod(format!("{} ns does not fit a duration", nanos))
        })?;
        Self::new(delta)
    }
}

/// Converts a duration to signed nanoseconds.
pub(crate) fn delta_to_nanos(delta: TimeDelta) -> i128 {
    // `subsec_nanos` carries the sign of the whole duration.
    i128::from(delta.num_seconds()) * NANOS_PER_SECOND + i128::from(delta.subsec_nanos())
}

/// Converts signed nanoseconds back to a duration, if representable.
pub(crate) fn nanos_to_delta(nanos: i128) -> Option<TimeDelta> {
    let secs = i64::try_from(nanos.div_euclid(NANOS_PER_SECOND)).ok()?;
    let subsec = nanos.rem_euclid(NANOS_PER_SECOND) as u32;
    TimeDelta::new(secs, subsec)
}

impl TryFrom<TimeDelta> for PayPeriod {
    type Error = PaydayError;

    fn try_from(delta: TimeDelta) -> Result<Self, PaydayError> {
        PayPeriod::new(delta)
    }
}

impl From<PayPeriod> for TimeDelta {
    fn from(period: PayPeriod) -> Self {
        period.0
    }
}

impl FromStr for PayPeriod {
    type Err = PaydayError;

    fn from_str(s: &str) -> Result<Self, PaydayError> {
        let s = s.trim();
        let split = s
            .find(|c: char| !c.is_ascii_digit() && c != '-')
            .ok_or_else(|| PaydayError::ParsePeriod(format!("'{}' has no unit", s)))?;
        let (amount, unit) = s.split_at(split);

        let amount: i128 = amount
            .parse()
            .map_err(|_| PaydayError::ParsePeriod(format!("'{}' has no valid amount", s)))?;
        let scale = UNITS
            .iter()
            .find(|(name, _)| *name == unit.trim())
            .map(|(_, scale)| *scale)
            .ok_or_else(|| {
                PaydayError::ParsePeriod(format!(
                    "unknown unit '{}'. Supported: w, d, h, m, s, ns",
                    unit
                ))
            })?;

        let nanos = amount
            .checked_mul(scale)
            .ok_or_else(|| PaydayError::ParsePeriod(format!("'{}' overflows", s)))?;
        Self::from_nanos(nanos)
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nanos = self.as_nanos();
        // "ns" divides everything, so a unit is always found.
        let (unit, scale) = UNITS
            .iter()
            .find(|(_, scale)| nanos % scale == 0)
            .copied()
            .unwrap_or(("ns", 1));
        write!(f, "{}{}", nanos / scale, unit)
    }
}

impl TryFrom<String> for PayPeriod {
    type Error = PaydayError;

    fn try_from(s: String) -> Result<Self, PaydayError> {
        s.parse()
    }
}

impl From<PayPeriod> for String {
    fn from(period: PayPeriod) -> Self {
        period.to_string()
    }
}
