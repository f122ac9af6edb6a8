//! Calendar export.
//!
//! Projects weekly schedule entries onto their next concrete occurrence and
//! renders them as an iCalendar 2.0 document. Export never fails as a whole:
//! entries that cannot be projected are skipped and reported.

mod generate;
mod projection;

use chrono::{DateTime, TimeZone, Utc};
use tracing::{debug, warn};

use crate::entry::ScheduleEntry;
use crate::error::TimetableError;

pub use generate::{PRODID, format_utc, generate_ics};
pub use projection::{CalendarEvent, EVENT_DURATION_MINUTES, UID_DOMAIN, days_until, project};

/// Media type of exported documents.
pub const MEDIA_TYPE: &str = "text/calendar";

/// Default file name for exported documents.
pub const DEFAULT_FILENAME: &str = "schedule.ics";

/// An entry left out of an export, and why.
#[derive(Debug)]
pub struct SkippedEntry {
    pub id: String,
    pub reason: TimetableError,
}

/// Result of exporting a schedule.
#[derive(Debug)]
pub struct CalendarExport {
    /// The iCalendar document
    pub document: String,
    /// Number of VEVENT blocks in the document
    pub exported: usize,
    pub skipped: Vec<SkippedEntry>,
}

/// Export entries as an iCalendar document relative to `now`.
///
/// Output order follows input order. `now` is also used as DTSTAMP, so the
/// output is fully determined by the arguments.
pub fn export_calendar<Tz: TimeZone>(entries: &[ScheduleEntry], now: &DateTime<Tz>) -> CalendarExport {
    let mut events = Vec::with_capacity(entries.len());
    let mut skipped = Vec::new();

    for entry in entries {
        match project(entry, now) {
            Ok(event) => events.push(event),
            Err(reason) => {
                warn!(id = %entry.id, "Skipping entry in export: {}", reason);
                skipped.push(SkippedEntry {
                    id: entry.id.clone(),
                    reason,
                });
            }
        }
    }

    debug!("Exporting {} events ({} skipped)", events.len(), skipped.len());

    let dtstamp = now.with_timezone(&Utc);
    CalendarExport {
        document: generate_ics(&events, &dtstamp),
        exported: events.len(),
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{SessionKind, Weekday};

    fn entry(id: &str, day: Weekday, time: &str) -> ScheduleEntry {
        ScheduleEntry {
            id: id.to_string(),
            teacher: "Y".to_string(),
            subject: "X".to_string(),
            time: time.to_string(),
            classroom: "Z".to_string(),
            day,
            kind: SessionKind::Practice,
        }
    }

    fn property_values<'a>(ics: &'a str, name: &str) -> Vec<&'a str> {
        let prefix = format!("{}:", name);
        ics.lines()
            .filter_map(|l| l.strip_prefix(prefix.as_str()))
            .collect()
    }

    #[test]
    fn test_empty_schedule_is_a_valid_empty_calendar() {
        // 2024-01-01 is a Monday
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let export = export_calendar(&[], &now);

        assert_eq!(export.exported, 0);
        assert!(export.skipped.is_empty());
        assert!(export.document.starts_with("BEGIN:VCALENDAR"));
        assert!(export.document.trim_end().ends_with("END:VCALENDAR"));
        assert_eq!(export.document.matches("BEGIN:VEVENT").count(), 0);
    }

    #[test]
    fn test_monday_entry_from_wednesday() {
        // 2024-01-03 is a Wednesday
        let now = Utc.with_ymd_and_hms(2024, 1, 3, 15, 30, 0).unwrap();
        let export = export_calendar(&[entry("1", Weekday::Monday, "9:00 - 10:30")], &now);

        assert_eq!(export.exported, 1);
        assert_eq!(property_values(&export.document, "DTSTART"), vec!["20240108T090000Z"]);
        assert_eq!(property_values(&export.document, "DTEND"), vec!["20240108T103000Z"]);
        assert_eq!(property_values(&export.document, "DTSTAMP"), vec!["20240103T153000Z"]);
        assert_eq!(property_values(&export.document, "SUMMARY"), vec!["X"]);
        assert_eq!(property_values(&export.document, "LOCATION"), vec!["Z"]);
    }

    #[test]
    fn test_same_weekday_projects_to_today() {
        let now = Utc.with_ymd_and_hms(2024, 1, 5, 18, 0, 0).unwrap(); // Friday
        let export = export_calendar(&[entry("1", Weekday::Friday, "10:45 - 12:15")], &now);

        assert_eq!(property_values(&export.document, "DTSTART"), vec!["20240105T104500Z"]);
    }

    #[test]
    fn test_identical_slots_get_distinct_uids() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let entries = [
            entry("1", Weekday::Tuesday, "9:00 - 10:30"),
            entry("2", Weekday::Tuesday, "9:00 - 10:30"),
        ];
        let export = export_calendar(&entries, &now);

        assert_eq!(export.exported, 2);
        assert_eq!(export.document.matches("BEGIN:VEVENT").count(), 2);
        assert_eq!(
            property_values(&export.document, "UID"),
            vec!["1@schedule", "2@schedule"]
        );
        let starts = property_values(&export.document, "DTSTART");
        let ends = property_values(&export.document, "DTEND");
        assert_eq!(starts[0], starts[1]);
        assert_eq!(ends[0], ends[1]);
    }

    #[test]
    fn test_export_is_deterministic() {
        let now = Utc.with_ymd_and_hms(2024, 3, 14, 11, 0, 0).unwrap();
        let entries = [
            entry("1", Weekday::Monday, "9:00 - 10:30"),
            entry("2", Weekday::Thursday, "14:15 - 15:45"),
            entry("3", Weekday::Friday, "23:45 - 23:55"),
        ];

        let first = export_calendar(&entries, &now);
        let second = export_calendar(&entries, &now);
        assert_eq!(first.document, second.document);
    }

    #[test]
    fn test_late_start_rolls_end_into_next_day() {
        let now = Utc.with_ymd_and_hms(2024, 1, 31, 9, 0, 0).unwrap(); // Wednesday
        let export = export_calendar(&[entry("1", Weekday::Wednesday, "23:45 - 23:59")], &now);

        assert_eq!(property_values(&export.document, "DTSTART"), vec!["20240131T234500Z"]);
        assert_eq!(property_values(&export.document, "DTEND"), vec!["20240201T011500Z"]);
    }

    #[test]
    fn test_compact_time_range_is_exported() {
        let now = Utc.with_ymd_and_hms(2024, 1, 3, 15, 30, 0).unwrap(); // Wednesday
        let export = export_calendar(&[entry("1", Weekday::Monday, "9:00-10:30")], &now);

        assert_eq!(export.exported, 1);
        assert!(export.skipped.is_empty());
        assert_eq!(property_values(&export.document, "DTSTART"), vec!["20240108T090000Z"]);
        assert_eq!(property_values(&export.document, "DTEND"), vec!["20240108T103000Z"]);
    }

    #[test]
    fn test_malformed_entry_is_skipped_and_others_kept() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let entries = [
            entry("good-1", Weekday::Monday, "9:00 - 10:30"),
            entry("bad", Weekday::Monday, "soon - later"),
            entry("good-2", Weekday::Tuesday, "12:30 - 14:00"),
        ];
        let export = export_calendar(&entries, &now);

        assert_eq!(export.exported, 2);
        assert_eq!(export.skipped.len(), 1);
        assert_eq!(export.skipped[0].id, "bad");
        assert!(matches!(export.skipped[0].reason, TimetableError::MalformedTime(_)));
        assert_eq!(
            property_values(&export.document, "UID"),
            vec!["good-1@schedule", "good-2@schedule"]
        );
    }
}
