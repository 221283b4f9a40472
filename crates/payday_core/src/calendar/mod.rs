//! Calendar boundary resolution.
//!
//! This module provides:
//! - [`first_instant_of_month`]: midnight on day 1 of an instant's month
//! - [`last_instant_of_month`]: one nanosecond before the following month
//! - [`month_bounds`]: both boundaries at once
//! - [`same_month`]: calendar year and month equality
//!
//! Boundaries are resolved in the offset carried by the input instant.
//!
//! # Examples
//!
//! ```
//! use payday_core::calendar::{first_instant_of_month, last_instant_of_month};
//! use payday_core::types::Instant;
//!
//! let at = Instant::from_ymd(2024, 2, 22).unwrap();
//! assert_eq!(first_instant_of_month(at).to_string(), "2024-02-01T00:00:00Z");
//! assert_eq!(
//!     last_instant_of_month(at).to_string(),
//!     "2024-02-29T23:59:59.999999999Z"
//! );
//! ```

mod month;

pub use month::{first_instant_of_month, last_instant_of_month, month_bounds, same_month};
pub(crate) use month::month_end_exclusive;
