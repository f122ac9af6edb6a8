use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use owo_colors::OwoColorize;
use timetable_core::ics::{CalendarExport, MEDIA_TYPE, export_calendar};
use timetable_core::store::HttpScheduleStore;

use super::load_view;

pub async fn run(
    store: &HttpScheduleStore,
    output: PathBuf,
    timezone: Option<chrono_tz::Tz>,
    at: Option<&str>,
) -> Result<()> {
    let view = load_view(store).await?;
    let at = at.map(parse_at).transpose()?;

    // The whole timetable is exported, whatever day/teacher is selected
    let export = match timezone {
        Some(tz) => export_calendar(view.entries(), &reference_time(tz, at)?),
        None => export_calendar(view.entries(), &reference_time(Local, at)?),
    };

    write_export(&export, &output)?;

    for skipped in &export.skipped {
        println!(
            "{}",
            format!("Skipped entry {}: {}", skipped.id, skipped.reason).yellow()
        );
    }

    println!(
        "{} {} {} to {} ({})",
        "Exported".green(),
        export.exported,
        if export.exported == 1 { "class" } else { "classes" },
        output.display(),
        MEDIA_TYPE.dimmed()
    );

    Ok(())
}

fn write_export(export: &CalendarExport, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(output, &export.document)
        .with_context(|| format!("Failed to write {}", output.display()))
}

/// Parse `--at` ("YYYY-MM-DDTHH:MM", seconds optional).
fn parse_at(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .with_context(|| format!("Invalid --at value '{}'. Expected YYYY-MM-DDTHH:MM", s))
}

/// The moment to project from, as wall-clock time in `tz`.
fn reference_time<Tz: TimeZone>(tz: Tz, at: Option<NaiveDateTime>) -> Result<DateTime<Tz>> {
    match at {
        Some(naive) => tz
            .from_local_datetime(&naive)
            .earliest()
            .with_context(|| format!("{} does not exist in the chosen time zone", naive)),
        None => Ok(Utc::now().with_timezone(&tz)),
    }
}
