//! Core types for the timetable CLI.
//!
//! - `entry`: schedule entries and their closed weekday / session-type sets
//! - `store`: the remote schedule store (trait + HTTP client)
//! - `view`: day/teacher filtering with refresh-on-write
//! - `ics`: projection of weekly slots onto dates and iCalendar export

pub mod config;
pub mod entry;
pub mod error;
pub mod ics;
pub mod store;
pub mod time_range;
pub mod view;

pub use entry::{EntryDraft, ScheduleEntry, SessionKind, Weekday};
pub use error::{TimetableError, TimetableResult};
