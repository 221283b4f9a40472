//! Result rendering
//!
//! Writes payday sequences and month bounds as a plain table, JSON, or CSV.

use payday_core::types::Instant;
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;

use crate::config::ConfigError;
use crate::Result;

/// Output formats supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One RFC 3339 instant per line under a header
    #[default]
    Table,
    /// Pretty-printed JSON object
    Json,
    /// CSV with a header row
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[derive(Serialize)]
struct PaydayList<'a> {
    paydays: &'a [Instant],
}

#[derive(Serialize)]
struct PaydayRow {
    index: usize,
    payday: Instant,
}

#[derive(Serialize)]
struct MonthBounds {
    first: Instant,
    last: Instant,
}

/// Write a payday sequence
pub fn write_paydays(out: &mut dyn Write, paydays: &[Instant], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "PAYDAY")?;
            for payday in paydays {
                writeln!(out, "{}", payday)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &PaydayList { paydays })?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for (index, payday) in paydays.iter().enumerate() {
                writer.serialize(PaydayRow {
                    index,
                    payday: *payday,
                })?;
            }
            // Serialising zero rows never emits the header.
            if paydays.is_empty() {
                writer.write_record(["index", "payday"])?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

/// Write the first and last instant of a month
pub fn write_bounds(
    out: &mut dyn Write,
    first: Instant,
    last: Instant,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "FIRST {}", first)?;
            writeln!(out, "LAST  {}", last)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &MonthBounds { first, last })?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.serialize(MonthBounds { first, last })?;
            writer.flush()?;
        }
    }
    Ok(())
}
