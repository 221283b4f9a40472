//! Range command implementation
//!
//! Lists the paydays inside a half-open window `[start, end)`.

use payday_core::schedules::paydays_in_range;
use payday_core::types::{Instant, PayPeriod};
use std::io::Write;
use tracing::{debug, info};

use crate::output::{write_paydays, OutputFormat};
use crate::Result;

/// Run the range command
pub fn run(
    payday: Instant,
    start: Instant,
    end: Instant,
    period: PayPeriod,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    info!(%payday, %start, %end, %period, "Generating paydays in range");

    let paydays = paydays_in_range(payday, start, end, period.as_delta())?;
    debug!(count = paydays.len(), "Range resolved");

    write_paydays(out, &paydays, format)
}
