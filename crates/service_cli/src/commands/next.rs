//! Next command implementation
//!
//! Lists the upcoming paydays at or after a given instant.

use payday_core::schedules::PaydaySchedule;
use payday_core::types::{Instant, PayPeriod};
use std::io::Write;
use tracing::{debug, info};

use crate::output::{write_paydays, OutputFormat};
use crate::{CliError, Result};

/// Run the next command
pub fn run(
    payday: Instant,
    after: Instant,
    count: usize,
    period: PayPeriod,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    if count == 0 {
        return Err(CliError::InvalidArgument(
            "--count must be at least 1".to_string(),
        ));
    }

    info!(%payday, %after, count, %period, "Generating upcoming paydays");

    let schedule = PaydaySchedule::new(payday, period);
    let paydays: Vec<Instant> = schedule.iter_from(after).take(count).collect();
    if paydays.len() < count {
        debug!(
            requested = count,
            produced = paydays.len(),
            "Sequence ended at the supported year limit"
        );
    }

    write_paydays(out, &paydays, format)
}
