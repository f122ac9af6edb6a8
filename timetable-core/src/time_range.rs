//! Clock-time parsing for the "H:MM - HH:MM" display ranges.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;

use crate::error::{TimetableError, TimetableResult};

/// Separator written between start and end.
const RANGE_SEPARATOR: &str = " - ";

/// A parsed time range. Start is always before end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl FromStr for TimeRange {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) =
            split_range(s).ok_or_else(|| TimetableError::MalformedTime(s.to_string()))?;

        let start = parse_clock(start)?;
        let end = parse_clock(end)?;

        if start >= end {
            return Err(TimetableError::InvalidTimeRange(s.to_string()));
        }

        Ok(TimeRange { start, end })
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.start.format("%-H:%M"),
            RANGE_SEPARATOR,
            self.end.format("%-H:%M")
        )
    }
}

/// Split a range on its dash, trimming both sides.
/// Accepts "9:00 - 10:30" as well as "9:00-10:30".
fn split_range(time: &str) -> Option<(&str, &str)> {
    time.split_once('-')
        .map(|(start, end)| (start.trim(), end.trim()))
}

/// Text of the start time in a display range ("9:00 - 10:30" -> "9:00").
///
/// A value without a dash is returned whole.
pub fn start_text(time: &str) -> &str {
    split_range(time).map_or(time, |(start, _)| start)
}

/// Parse a 24-hour "H:MM" or "HH:MM" clock time.
pub fn parse_clock(s: &str) -> TimetableResult<NaiveTime> {
    let malformed = || TimetableError::MalformedTime(s.to_string());
    let trimmed = s.trim();

    let (hours, minutes) = trimmed.split_once(':').ok_or_else(malformed)?;

    let digits_ok = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    if !digits_ok(hours, 1, 2) || !digits_ok(minutes, 2, 2) {
        return Err(malformed());
    }

    let hours: u32 = hours.parse().map_err(|_| malformed())?;
    let minutes: u32 = minutes.parse().map_err(|_| malformed())?;

    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(malformed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_clock_accepts_one_or_two_digit_hours() {
        assert_eq!(parse_clock("9:00").unwrap(), hm(9, 0));
        assert_eq!(parse_clock("09:05").unwrap(), hm(9, 5));
        assert_eq!(parse_clock(" 23:45 ").unwrap(), hm(23, 45));
    }

    #[test]
    fn test_parse_clock_rejects_garbage() {
        for bad in ["", "9", "9:0", "ab:cd", "24:00", "12:60", "123:00", "-1:30", "9:00pm"] {
            assert!(
                matches!(parse_clock(bad), Err(TimetableError::MalformedTime(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_start_text() {
        assert_eq!(start_text("9:00 - 10:30"), "9:00");
        assert_eq!(start_text("9:00-10:30"), "9:00");
        assert_eq!(start_text(" 9:00 -10:30"), "9:00");
        assert_eq!(start_text("14:15"), "14:15");
    }

    #[test]
    fn test_time_range_parse_and_display() {
        let range: TimeRange = "9:00 - 10:30".parse().unwrap();
        assert_eq!(range.start, hm(9, 0));
        assert_eq!(range.end, hm(10, 30));
        assert_eq!(range.to_string(), "9:00 - 10:30");

        let compact: TimeRange = "14:15-15:45".parse().unwrap();
        assert_eq!(compact.to_string(), "14:15 - 15:45");
    }

    #[test]
    fn test_time_range_requires_start_before_end() {
        assert!(matches!(
            "10:30 - 10:30".parse::<TimeRange>(),
            Err(TimetableError::InvalidTimeRange(_))
        ));
        assert!(matches!(
            "10:30".parse::<TimeRange>(),
            Err(TimetableError::MalformedTime(_))
        ));
    }
}
