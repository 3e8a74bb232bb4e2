use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use request_deadline_core::calendar::{
    WorkingDayCount, count_working_days, minimum_valid_date, working_days_in,
};
use request_deadline_core::deadline::check_request_date;
use request_deadline_core::format::{format_date, format_datetime};
use request_deadline_core::hours::add_working_hours;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "request-deadline",
    about = "Compute and check lead times for material requests"
)]
struct Cli {
    /// Reference time (YYYY-MM-DDTHH:MM:SS, defaults to the current time)
    #[arg(long)]
    now: Option<NaiveDateTime>,

    /// Time zone used to read the current time (IANA name)
    #[arg(long, default_value = "UTC")]
    tz: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the earliest date a request can be made for
    Earliest {
        /// Working days required between tomorrow and the requested date
        #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
        working_days: i64,
    },

    /// Check a requested date (YYYY-MM-DD) against the lead-time rule
    Check {
        date: NaiveDate,

        /// Working days required between tomorrow and the requested date
        #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
        working_days: i64,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Count working days from start (inclusive) to end (exclusive)
    Count {
        #[arg(long)]
        start: NaiveDate,

        #[arg(long)]
        end: NaiveDate,

        /// Also print each working day (DD/MM/YYYY)
        #[arg(long)]
        list: bool,
    },

    /// Add business hours (08:00-18:00, Monday to Friday) to the reference time
    AddHours {
        #[arg(long)]
        hours: u32,
    },
}

/// The only place the system clock is read.
fn resolve_now(now: Option<NaiveDateTime>, tz: &str) -> Result<NaiveDateTime> {
    if let Some(now) = now {
        return Ok(now);
    }
    let zone: Tz = tz
        .parse()
        .map_err(|e| anyhow!("invalid time zone {tz}: {e}"))?;
    Ok(Utc::now().with_timezone(&zone).naive_local())
}

fn required_days(working_days: i64) -> Result<WorkingDayCount> {
    WorkingDayCount::try_from(working_days).context("invalid --working-days")
}

fn cmd_earliest(now: NaiveDateTime, working_days: i64) -> Result<()> {
    let required = required_days(working_days)?;
    let earliest = minimum_valid_date(now, required)
        .with_context(|| format!("failed to compute earliest date from {now}"))?;
    info!(
        "earliest date from {}: {earliest} ({} working days)",
        format_datetime(now),
        required.get()
    );
    println!("{earliest}");
    Ok(())
}

fn cmd_check(now: NaiveDateTime, date: NaiveDate, working_days: i64, json: bool) -> Result<bool> {
    let required = required_days(working_days)?;
    let result = check_request_date(date, now, required)
        .with_context(|| format!("failed to check {date}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.message());
    }

    if result.is_valid() {
        info!("{}: accepted", format_date(date));
    } else {
        warn!("{}: rejected", format_date(date));
    }
    Ok(result.is_valid())
}

fn count_lines(start: NaiveDate, end: NaiveDate, list: bool) -> Vec<String> {
    if !list {
        return vec![count_working_days(start, end).to_string()];
    }
    let days = working_days_in(start, end);
    let mut lines = vec![days.len().to_string()];
    lines.extend(days.into_iter().map(format_date));
    lines
}

fn cmd_count(start: NaiveDate, end: NaiveDate, list: bool) {
    if start > end {
        warn!("start {start} is after end {end}");
    }
    for line in count_lines(start, end, list) {
        println!("{line}");
    }
}

fn cmd_add_hours(now: NaiveDateTime, hours: u32) -> Result<()> {
    let deadline = add_working_hours(now, hours)
        .with_context(|| format!("failed to add {hours} working hour(s) to {now}"))?;
    println!("{}", format_datetime(deadline));
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let now = resolve_now(cli.now, &cli.tz)?;

    match &cli.command {
        Commands::Earliest { working_days } => {
            cmd_earliest(now, *working_days)?;
        }
        Commands::Check {
            date,
            working_days,
            json,
        } => {
            if !cmd_check(now, *date, *working_days, *json)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Count { start, end, list } => {
            cmd_count(*start, *end, *list);
        }
        Commands::AddHours { hours } => {
            cmd_add_hours(now, *hours)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
