//! Core value types for payday calculations.
//!
//! This module provides:
//! - `instant`: Nanosecond-resolution `Instant` carrying its calendar offset
//! - `period`: Strictly positive `PayPeriod`
//! - `error`: Structured error types for instant construction and payday generation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Instant`] from `instant`
//! - [`PayPeriod`] from `period`
//! - [`InstantError`], [`PaydayError`] from `error`

pub mod error;
pub mod instant;
pub mod period;

// Re-export commonly used types at module level
pub use error::{InstantError, PaydayError};
pub use instant::Instant;
pub use period::PayPeriod;
