//! Projection of weekly slots onto concrete calendar dates.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

use crate::entry::{ScheduleEntry, Weekday};
use crate::error::{TimetableError, TimetableResult};
use crate::time_range::{parse_clock, start_text};

/// Every exported event lasts this long, whatever the end text says.
pub const EVENT_DURATION_MINUTES: i64 = 90;

/// Domain appended to entry ids to form event UIDs.
pub const UID_DOMAIN: &str = "schedule";

/// A concrete event derived from a schedule entry during export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub uid: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub summary: String,
    pub description: String,
    pub location: String,
}

/// Days from `today` forward to the next `target`, 0 when they coincide.
///
/// Always in `0..=6`. chrono numbers Sunday as 7, so a Sunday reference
/// looks ahead one day to Monday.
pub fn days_until(target: Weekday, today: chrono::Weekday) -> u32 {
    (target.iso_ordinal() + 7 - today.number_from_monday()) % 7
}

/// Project an entry onto its next occurrence on or after `now`.
///
/// The start time is read as wall-clock time in `now`'s time zone and the
/// result is converted to UTC.
pub fn project<Tz: TimeZone>(
    entry: &ScheduleEntry,
    now: &DateTime<Tz>,
) -> TimetableResult<CalendarEvent> {
    let local_now = now.naive_local();
    let offset = days_until(entry.day, local_now.weekday());
    let date = local_now.date() + Duration::days(i64::from(offset));

    let start_time = parse_clock(start_text(&entry.time))?;
    let local_start = date.and_time(start_time);

    let start = now
        .timezone()
        .from_local_datetime(&local_start)
        .earliest()
        .ok_or_else(|| TimetableError::NonexistentLocalTime(local_start.to_string()))?
        .with_timezone(&Utc);
    let end = start + Duration::minutes(EVENT_DURATION_MINUTES);

    Ok(CalendarEvent {
        uid: format!("{}@{}", entry.id, UID_DOMAIN),
        start,
        end,
        summary: entry.subject.clone(),
        description: format!("Teacher: {}\nType: {}", entry.teacher, entry.kind.label()),
        location: entry.classroom.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::SessionKind;
    use chrono::NaiveDate;

    fn entry(day: Weekday, time: &str) -> ScheduleEntry {
        ScheduleEntry {
            id: "1".into(),
            teacher: "Y".into(),
            subject: "X".into(),
            time: time.into(),
            classroom: "Z".into(),
            day,
            kind: SessionKind::Lecture,
        }
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_days_until_is_always_within_a_week() {
        let reference_days = [
            chrono::Weekday::Mon,
            chrono::Weekday::Tue,
            chrono::Weekday::Wed,
            chrono::Weekday::Thu,
            chrono::Weekday::Fri,
            chrono::Weekday::Sat,
            chrono::Weekday::Sun,
        ];
        for target in Weekday::ALL {
            for today in reference_days {
                let days = days_until(target, today);
                assert!(days <= 6, "{target:?} from {today:?} gave {days}");
                if today == chrono::Weekday::from(target) {
                    assert_eq!(days, 0);
                }
            }
        }
    }

    #[test]
    fn test_days_until_examples() {
        assert_eq!(days_until(Weekday::Monday, chrono::Weekday::Wed), 5);
        assert_eq!(days_until(Weekday::Friday, chrono::Weekday::Mon), 4);
        assert_eq!(days_until(Weekday::Monday, chrono::Weekday::Sun), 1);
        assert_eq!(days_until(Weekday::Monday, chrono::Weekday::Sat), 2);
    }

    #[test]
    fn test_project_to_next_monday_from_wednesday() {
        // 2024-01-03 is a Wednesday
        let now = utc(2024, 1, 3, 12, 0);
        let event = project(&entry(Weekday::Monday, "9:00 - 10:30"), &now).unwrap();

        assert_eq!(event.start, utc(2024, 1, 8, 9, 0));
        assert_eq!(event.end, utc(2024, 1, 8, 10, 30));
        assert_eq!(event.uid, "1@schedule");
        assert_eq!(event.description, "Teacher: Y\nType: Lecture");
    }

    #[test]
    fn test_project_same_weekday_uses_today_even_if_slot_has_passed() {
        // Wednesday evening, Wednesday morning class: still today
        let now = utc(2024, 1, 3, 20, 0);
        let event = project(&entry(Weekday::Wednesday, "8:00 - 9:30"), &now).unwrap();
        assert_eq!(event.start, utc(2024, 1, 3, 8, 0));
    }

    #[test]
    fn test_project_end_rolls_into_next_day() {
        let now = utc(2024, 1, 1, 10, 0);
        let event = project(&entry(Weekday::Monday, "23:45 - 23:59"), &now).unwrap();
        assert_eq!(event.start, utc(2024, 1, 1, 23, 45));
        assert_eq!(event.end, utc(2024, 1, 2, 1, 15));
    }

    #[test]
    fn test_project_ignores_end_text() {
        let now = utc(2024, 1, 1, 10, 0);
        let event = project(&entry(Weekday::Monday, "14:15 - 18:00"), &now).unwrap();
        assert_eq!(event.end - event.start, Duration::minutes(90));
    }

    #[test]
    fn test_project_rolls_over_month_and_year() {
        // 2024-12-30 is a Monday; Friday is 2025-01-03
        let now = utc(2024, 12, 30, 9, 0);
        let event = project(&entry(Weekday::Friday, "9:00 - 10:30"), &now).unwrap();
        assert_eq!(
            event.start.date_naive(),
            NaiveDate::from_ymd_opt(2025, 1, 3).unwrap()
        );
    }

    #[test]
    fn test_project_uses_wall_clock_of_reference_zone() {
        use chrono_tz::Europe::Moscow;

        // Monday 2024-01-01 10:00 in Moscow (UTC+3)
        let now = Moscow.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let event = project(&entry(Weekday::Monday, "9:00 - 10:30"), &now).unwrap();
        assert_eq!(event.start, utc(2024, 1, 1, 6, 0));
        assert_eq!(event.end, utc(2024, 1, 1, 7, 30));
    }

    #[test]
    fn test_project_local_date_decides_weekday() {
        use chrono_tz::Asia::Tokyo;

        // Sunday 23:00 UTC is already Monday in Tokyo
        let now = utc(2024, 1, 7, 23, 0).with_timezone(&Tokyo);
        let event = project(&entry(Weekday::Monday, "9:00 - 10:30"), &now).unwrap();
        assert_eq!(event.start, utc(2024, 1, 8, 0, 0));
    }

    #[test]
    fn test_project_nonexistent_local_time() {
        use chrono_tz::Africa::Cairo;

        // Egypt moved clocks from 00:00 to 01:00 on Friday 2023-04-28
        let now = Cairo.with_ymd_and_hms(2023, 4, 27, 12, 0, 0).unwrap();
        let err = project(&entry(Weekday::Friday, "0:30 - 2:00"), &now).unwrap_err();
        assert!(matches!(err, TimetableError::NonexistentLocalTime(_)));

        let later = project(&entry(Weekday::Friday, "9:00 - 10:30"), &now).unwrap();
        assert_eq!(later.start, utc(2023, 4, 28, 6, 0));
    }

    #[test]
    fn test_project_malformed_time() {
        let now = utc(2024, 1, 1, 10, 0);
        let err = project(&entry(Weekday::Monday, "nine - ten"), &now).unwrap_err();
        assert!(matches!(err, TimetableError::MalformedTime(_)));
    }
}
