use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use owo_colors::OwoColorize;
use studycal_core::output::write_atomic;
use studycal_core::{DocumentKind, Schedule, ScheduleConfig, ScheduleDocument};

use crate::render::Render;

/// Generate both documents for the schedule starting at `start`.
///
/// The publish file is written before the cancel file is even built; a
/// failure in either phase aborts the run.
pub fn run(config: &ScheduleConfig, start: NaiveDate, generated_at: DateTime<Utc>) -> Result<()> {
    let schedule = Schedule::new(config, start)?;

    println!("{}", "Generating study schedule ICS...".bold());
    write_phase(DocumentKind::Publish, &schedule, config, &config.output_path(), generated_at)?;

    println!("{}", "Also generating CANCEL ICS (to clear events if needed)...".bold());
    write_phase(
        DocumentKind::Cancel,
        &schedule,
        config,
        &config.cancel_output_path(),
        generated_at,
    )?;

    println!(
        "{}",
        "Done. Import the .ics file(s) into Google Calendar or other calendar apps.".green()
    );
    println!("{}", "Tips:".dimmed());
    println!(
        "{}",
        " - To update an event, generate again with changed times or labels and import: the UIDs stay the same."
            .dimmed()
    );
    println!(
        "{}",
        format!(
            " - To remove events, import the cancel file ({}).",
            config.cancel_output.display()
        )
        .dimmed()
    );

    Ok(())
}

fn write_phase(
    kind: DocumentKind,
    schedule: &Schedule,
    config: &ScheduleConfig,
    path: &Path,
    generated_at: DateTime<Utc>,
) -> Result<()> {
    let document = ScheduleDocument::build(kind, schedule, config);

    write_atomic(path, &document.to_ics(generated_at))
        .with_context(|| format!("Failed to write {} document", kind.method()))?;

    println!("   {}", (&document, path).render());
    Ok(())
}
