//! Payday generation.
//!
//! This module provides:
//! - [`paydays_in_range`]: paydays in an arbitrary half-open range
//! - [`paydays_in_month`], [`paydays_in_month_by_range`]: paydays in the
//!   reference payday's month, by anchor walk or by month boundaries
//! - [`first_payday_in_month`], [`last_payday_in_month`]: the month's outer paydays
//! - [`PaydaySchedule`]: a validated (reference payday, period) pair exposing
//!   every query as a method
//! - [`Paydays`]: lazy ascending iterator over paydays
//!
//! # Examples
//!
//! ```
//! use chrono::TimeDelta;
//! use payday_core::schedules::{paydays_in_month, paydays_in_range};
//! use payday_core::types::Instant;
//!
//! let reference = Instant::from_ymd(2000, 3, 8).unwrap();
//! let paydays = paydays_in_range(
//!     reference,
//!     Instant::from_ymd(2000, 3, 5).unwrap(),
//!     Instant::from_ymd(2000, 3, 23).unwrap(),
//!     TimeDelta::days(14),
//! )
//! .unwrap();
//! assert_eq!(paydays.len(), 2);
//!
//! let march = paydays_in_month(reference, TimeDelta::days(14)).unwrap();
//! assert_eq!(march, paydays);
//! ```

mod iter;
mod month;
mod range;
mod schedule;

pub use iter::Paydays;
pub use month::{
    first_payday_in_month, last_payday_in_month, paydays_in_month, paydays_in_month_by_range,
};
pub use range::paydays_in_range;
pub use schedule::PaydaySchedule;
