//! Error types for the timetable core.

use thiserror::Error;

/// Errors that can occur in timetable operations.
#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Schedule store returned {status}: {message}")]
    Store { status: u16, message: String },

    #[error("Could not decode store response: {0}")]
    Decode(String),

    #[error("Malformed time '{0}', expected H:MM or HH:MM")]
    MalformedTime(String),

    #[error("Invalid time range '{0}': start must be before end")]
    InvalidTimeRange(String),

    #[error("Unknown weekday '{0}'")]
    UnknownWeekday(String),

    #[error("Unknown session type '{0}'")]
    UnknownSessionKind(String),

    #[error("Schedule entry not found: {0}")]
    EntryNotFound(String),

    #[error("Local time {0} does not exist in this time zone")]
    NonexistentLocalTime(String),

    /// The write reached the store but the reload after it did not.
    #[error("Entry {id} was saved, but reloading the schedule failed: {source}")]
    RefreshFailed {
        id: String,
        source: Box<TimetableError>,
    },
}

/// Result type alias for timetable operations.
pub type TimetableResult<T> = Result<T, TimetableError>;
