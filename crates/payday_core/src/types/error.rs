//! Error types for structured error handling.
//!
//! This module provides:
//! - `InstantError`: Errors from instant construction and parsing
//! - `PaydayError`: Contract violations and period parsing failures raised by
//!   payday generation

use chrono::TimeDelta;
use thiserror::Error;

use super::instant::Instant;

/// Instant-related errors.
///
/// # Examples
/// ```
/// use payday_core::types::InstantError;
///
/// let err = InstantError::OutOfRange { year: 10_000 };
/// assert_eq!(format!("{}", err), "Year 10000 is outside the supported range 1..=9999");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InstantError {
    /// Invalid date or time components (e.g., February 30th, hour 24).
    #[error("Invalid date-time: {year}-{month}-{day} {hour}:{minute}:{second}.{nano:09}")]
    InvalidDateTime {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
        /// Hour component (0-23)
        hour: u32,
        /// Minute component (0-59)
        minute: u32,
        /// Second component (0-59)
        second: u32,
        /// Nanosecond component (0-999_999_999)
        nano: u32,
    },

    /// Year lies outside the supported calendar window.
    #[error("Year {year} is outside the supported range 1..=9999")]
    OutOfRange {
        /// The offending year, read in the instant's own offset.
        year: i32,
    },

    /// Failed to parse an instant string.
    #[error("Instant parse error: {0}")]
    ParseError(String),
}

/// Errors raised by payday generation.
///
/// `NonPositivePeriod` and `InvalidRange` are caller contract violations.
/// They are always reported before any payday is computed, so a failing
/// call never yields a partial sequence.
///
/// # Examples
/// ```
/// use chrono::TimeDelta;
/// use payday_core::types::PaydayError;
///
/// let err = PaydayError::NonPositivePeriod { period: TimeDelta::zero() };
/// assert!(format!("{}", err).starts_with("Pay period must be positive"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaydayError {
    /// Period is zero or negative.
    #[error("Pay period must be positive, got {period}")]
    NonPositivePeriod {
        /// The rejected period.
        period: TimeDelta,
    },

    /// Range start is not strictly before range end.
    #[error("Range start {start} must be before range end {end}")]
    InvalidRange {
        /// The range start.
        start: Instant,
        /// The range end.
        end: Instant,
    },

    /// Failed to parse a pay period string.
    #[error("Pay period parse error: {0}")]
    ParsePeriod(String),
}
