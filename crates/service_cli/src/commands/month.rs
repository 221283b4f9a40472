//! Month command implementation
//!
//! Lists the paydays in the calendar month of a known payday.

use clap::ValueEnum;
use payday_core::schedules::PaydaySchedule;
use payday_core::types::{Instant, PayPeriod};
use std::io::Write;
use tracing::{debug, info};

use crate::output::{write_paydays, OutputFormat};
use crate::Result;

/// How the month's paydays are located
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MonthStrategy {
    /// Step backward then forward from the payday while the month holds
    #[default]
    Walk,
    /// Query the month's boundaries as a range
    Range,
}

impl std::fmt::Display for MonthStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonthStrategy::Walk => write!(f, "walk"),
            MonthStrategy::Range => write!(f, "range"),
        }
    }
}

/// Run the month command
pub fn run(
    payday: Instant,
    period: PayPeriod,
    strategy: MonthStrategy,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    info!(%payday, %period, %strategy, "Generating paydays in month");

    let schedule = PaydaySchedule::new(payday, period);
    let paydays = match strategy {
        MonthStrategy::Walk => schedule.in_month(),
        MonthStrategy::Range => schedule.in_month_by_range(),
    };
    debug!(count = paydays.len(), "Month resolved");

    write_paydays(out, &paydays, format)
}
