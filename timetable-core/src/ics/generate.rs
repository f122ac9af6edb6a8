//! ICS document generation.

use chrono::{DateTime, Utc};
use icalendar::{Calendar, Component, EventLike};

use super::projection::CalendarEvent;

/// PRODID written to every exported document.
pub const PRODID: &str = "-//Schedule//Schedule 1.0//EN";

/// Format a UTC instant as an iCalendar date-time (`YYYYMMDDTHHMMSSZ`).
pub fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Render events into a single VCALENDAR document, in the given order.
pub fn generate_ics(events: &[CalendarEvent], dtstamp: &DateTime<Utc>) -> String {
    let mut cal = Calendar::new();
    let dtstamp = format_utc(dtstamp);

    for event in events {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&event.uid);
        ics_event.add_property("DTSTAMP", &dtstamp);
        ics_event.add_property("DTSTART", format_utc(&event.start));
        ics_event.add_property("DTEND", format_utc(&event.end));
        ics_event.summary(&event.summary);
        ics_event.description(&event.description);
        ics_event.location(&event.location);
        cal.push(ics_event.done());
    }

    strip_ics_bloat(&cal.done().to_string())
}

/// Clean up output from the icalendar crate
/// - Replace PRODID with our own, directly after VERSION
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") || line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");

        if line == "VERSION:2.0" {
            result.push_str("PRODID:");
            result.push_str(PRODID);
            result.push_str("\r\n");
        }
    }

    result
}
