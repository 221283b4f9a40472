//! # payday_core: Recurring Payday Calendar Arithmetic
//!
//! ## Kernel Role
//!
//! payday_core computes the recurring paydays that fall inside a calendar
//! month or an arbitrary time window, given one known payday and a fixed pay
//! period. It provides:
//! - Value types: `Instant`, `PayPeriod` (`types`)
//! - Calendar boundary resolution: first/last instant of a month (`calendar`)
//! - Payday generation over ranges and months (`schedules`)
//! - Error types: `InstantError`, `PaydayError` (`types::error`)
//!
//! Every operation is a pure function of immutable `Copy` values. Nothing is
//! cached, logged or shared, so all of it is safe to call from any thread.
//!
//! ## Minimal Dependencies
//!
//! - chrono: Date-time arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use chrono::TimeDelta;
//! use payday_core::calendar::last_instant_of_month;
//! use payday_core::schedules::{paydays_in_month, PaydaySchedule};
//! use payday_core::types::{Instant, PayPeriod};
//!
//! let reference = Instant::from_ymd(2000, 7, 1).unwrap();
//!
//! // Free functions
//! let july = paydays_in_month(reference, TimeDelta::days(14)).unwrap();
//! assert_eq!(july.len(), 3);
//! assert!(july.iter().all(|p| *p <= last_instant_of_month(reference)));
//!
//! // Validated schedule
//! let schedule = PaydaySchedule::new(reference, PayPeriod::biweekly());
//! assert_eq!(schedule.in_month(), july);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Instant` and `PayPeriod`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod calendar;
pub mod schedules;
pub mod types;
