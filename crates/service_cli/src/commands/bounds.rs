//! Bounds command implementation

use payday_core::calendar::month_bounds;
use payday_core::types::Instant;
use std::io::Write;
use tracing::info;

use crate::output::{write_bounds, OutputFormat};
use crate::Result;

/// Run the bounds command
pub fn run(at: Instant, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let (first, last) = month_bounds(at);
    info!(%at, %first, %last, "Resolved month bounds");

    write_bounds(out, first, last, format)
}
