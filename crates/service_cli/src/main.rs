//! Payday CLI - Recurring Payday Calendar
//!
//! Command-line entry point for the payday_core library.
//!
//! # Commands
//!
//! - `payday range --payday <INSTANT> --start <INSTANT> --end <INSTANT>` - Paydays in a window
//! - `payday month --payday <INSTANT>` - Paydays in the payday's month
//! - `payday bounds <INSTANT>` - First and last instant of a month
//! - `payday next --payday <INSTANT> --after <INSTANT>` - Upcoming paydays
//!
//! Results go to stdout; logs go to stderr.

use anyhow::Context;
use clap::{Parser, Subcommand};
use payday_cli::commands;
use payday_cli::commands::month::MonthStrategy;
use payday_cli::config::{build_config, CliArgs, LogLevel};
use payday_cli::output::OutputFormat;
use payday_core::types::{Instant, PayPeriod};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Recurring payday calculator
#[derive(Parser)]
#[command(name = "payday")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "PAYDAY_CONFIG")]
    config: Option<PathBuf>,

    /// Output format (table, json, csv)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the paydays in [start, end)
    Range {
        /// Any known payday
        #[arg(long)]
        payday: Instant,

        /// Inclusive start of the window
        #[arg(long)]
        start: Instant,

        /// Exclusive end of the window
        #[arg(long)]
        end: Instant,

        /// Pay period, e.g. 14d, 2w, 36h
        #[arg(short, long)]
        period: Option<PayPeriod>,
    },

    /// List the paydays in the month of a known payday
    Month {
        /// Any known payday
        #[arg(long)]
        payday: Instant,

        /// Pay period, e.g. 14d, 2w, 36h
        #[arg(short, long)]
        period: Option<PayPeriod>,

        /// How the month's paydays are located
        #[arg(short, long, value_enum, default_value_t = MonthStrategy::Walk)]
        strategy: MonthStrategy,
    },

    /// Show the first and last instant of a month
    Bounds {
        /// Any instant inside the month
        at: Instant,
    },

    /// List upcoming paydays at or after an instant
    Next {
        /// Any known payday
        #[arg(long)]
        payday: Instant,

        /// Earliest instant to report
        #[arg(long)]
        after: Instant,

        /// Number of paydays to list
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Pay period, e.g. 14d, 2w, 36h
        #[arg(short, long)]
        period: Option<PayPeriod>,
    },
}

impl Commands {
    fn period(&self) -> Option<PayPeriod> {
        match self {
            Commands::Range { period, .. }
            | Commands::Month { period, .. }
            | Commands::Next { period, .. } => *period,
            Commands::Bounds { .. } => None,
        }
    }
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            default_period: cli.command.period(),
            log_level: cli.log_level,
            output_format: cli.format,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli)).context("Failed to load configuration")?;

    init_tracing(config.log_level.as_filter_str());

    info!(
        version = payday_cli::VERSION,
        default_period = %config.default_period,
        output_format = %config.output_format,
        "Payday CLI starting"
    );

    let period = config.default_period;
    let format = config.output_format;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Range {
            payday, start, end, ..
        } => commands::range::run(payday, start, end, period, format, &mut stdout)
            .context("range command failed")?,
        Commands::Month {
            payday, strategy, ..
        } => commands::month::run(payday, period, strategy, format, &mut stdout)
            .context("month command failed")?,
        Commands::Bounds { at } => {
            commands::bounds::run(at, format, &mut stdout).context("bounds command failed")?
        }
        Commands::Next {
            payday,
            after,
            count,
            ..
        } => commands::next::run(payday, after, count, period, format, &mut stdout)
            .context("next command failed")?,
    }

    Ok(())
}
