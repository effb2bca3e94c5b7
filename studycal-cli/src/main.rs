mod commands;
mod render;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use studycal_core::ScheduleConfig;
use studycal_core::tracing::{TracingConfig, init_tracing};

#[derive(Parser)]
#[command(name = "studycal", version)]
#[command(about = "Generate a study timetable .ics and a matching cancellation .ics")]
#[command(
    long_about = "Generate a study timetable .ics and a matching cancellation .ics.\n\n\
    Settings are read from ~/.config/studycal/config.toml (optional) and\n\
    STUDYCAL_* environment variables, e.g. STUDYCAL_DAYS_AHEAD=14."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    init_tracing(TracingConfig::default()).context("Could not initialize logging")?;

    let config = ScheduleConfig::load()?;
    config.validate()?;

    // "Today" is the date in the configured zone, not the machine's
    let now = Utc::now();
    let start = now.with_timezone(&config.tz()?).date_naive();
    tracing::debug!(%start, time_zone = %config.time_zone, "resolved start date");

    commands::generate::run(&config, start, now)
}
