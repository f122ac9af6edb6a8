//! Schedule entry types.
//!
//! These mirror the records held by the remote schedule store. The weekday and
//! session type are closed sets, so they are modelled as enums and every
//! label/color lookup is an exhaustive match.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TimetableError, TimetableResult};
use crate::time_range::TimeRange;

/// A teaching day. Weekends never appear in the timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// ISO 8601 weekday number (Monday = 1).
    pub fn iso_ordinal(self) -> u32 {
        match self {
            Weekday::Monday => 1,
            Weekday::Tuesday => 2,
            Weekday::Wednesday => 3,
            Weekday::Thursday => 4,
            Weekday::Friday => 5,
        }
    }

    /// Wire name, as stored by the schedule store.
    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
        }
    }

    /// Display name for headings.
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| day.as_str() == needle)
            .ok_or_else(|| TimetableError::UnknownWeekday(s.to_string()))
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
        }
    }
}

/// Kind of class session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Lecture,
    Practice,
    Lab,
}

impl SessionKind {
    pub const ALL: [SessionKind; 3] = [SessionKind::Lecture, SessionKind::Practice, SessionKind::Lab];

    pub fn as_str(self) -> &'static str {
        match self {
            SessionKind::Lecture => "lecture",
            SessionKind::Practice => "practice",
            SessionKind::Lab => "lab",
        }
    }

    /// Human-readable label, used in listings and exported descriptions.
    pub fn label(self) -> &'static str {
        match self {
            SessionKind::Lecture => "Lecture",
            SessionKind::Practice => "Practice",
            SessionKind::Lab => "Lab",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionKind {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == needle)
            .ok_or_else(|| TimetableError::UnknownSessionKind(s.to_string()))
    }
}

/// A weekly-recurring class slot, as held by the schedule store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: String,
    pub teacher: String,
    pub subject: String,
    /// Display range such as "9:00 - 10:30"
    pub time: String,
    pub classroom: String,
    pub day: Weekday,
    #[serde(rename = "type")]
    pub kind: SessionKind,
}

impl ScheduleEntry {
    pub fn time_range(&self) -> TimetableResult<TimeRange> {
        self.time.parse()
    }

    /// Everything but the identifier, e.g. to edit and resubmit.
    pub fn draft(&self) -> EntryDraft {
        EntryDraft {
            teacher: self.teacher.clone(),
            subject: self.subject.clone(),
            time: self.time.clone(),
            classroom: self.classroom.clone(),
            day: self.day,
            kind: self.kind,
        }
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.subject, self.teacher)
    }
}

/// A schedule entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub teacher: String,
    pub subject: String,
    pub time: String,
    pub classroom: String,
    pub day: Weekday,
    #[serde(rename = "type")]
    pub kind: SessionKind,
}

impl EntryDraft {
    /// Check the time text parses as a range with start before end.
    pub fn validate(&self) -> TimetableResult<()> {
        self.time.parse::<TimeRange>().map(|_| ())
    }

    pub fn with_id(self, id: impl Into<String>) -> ScheduleEntry {
        ScheduleEntry {
            id: id.into(),
            teacher: self.teacher,
            subject: self.subject,
            time: self.time,
            classroom: self.classroom,
            day: self.day,
            kind: self.kind,
        }
    }
}
