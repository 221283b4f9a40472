//! CLI error types.

use payday_core::types::PaydayError;
use thiserror::Error;

/// Errors surfaced by `payday` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The payday calculation rejected its arguments.
    #[error(transparent)]
    Payday(#[from] PaydayError),

    /// A command argument is unusable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing results failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed.
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV encoding failed.
    #[error("Failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
