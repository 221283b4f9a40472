//! # payday_cli: Command-line payday calendar
//!
//! Library half of the `payday` binary: configuration loading, output
//! rendering and one module per subcommand. The binary parses arguments,
//! initialises tracing and dispatches here.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
