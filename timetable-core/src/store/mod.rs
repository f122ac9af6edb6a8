//! Access to the remote schedule store.
//!
//! The store owns the lifecycle of every entry. It is reached through the
//! [`ScheduleStore`] trait so the view logic can run against any backend;
//! [`HttpScheduleStore`] speaks the JSON-over-HTTP API.

mod http;
pub mod protocol;

use serde_json::Value;
use tracing::warn;

use crate::entry::{EntryDraft, ScheduleEntry};
use crate::error::TimetableResult;

pub use http::HttpScheduleStore;

/// A store record that could not be decoded into a [`ScheduleEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    pub id: Option<String>,
    pub reason: String,
}

/// Entries returned by [`ScheduleStore::list`], in store order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleListing {
    pub entries: Vec<ScheduleEntry>,
    pub rejected: Vec<RejectedRecord>,
}

/// CRUD operations offered by the schedule store.
#[allow(async_fn_in_trait)]
pub trait ScheduleStore {
    /// Fetch every entry.
    async fn list(&self) -> TimetableResult<ScheduleListing>;

    /// Store a new entry and return the id assigned to it.
    async fn create(&self, draft: &EntryDraft) -> TimetableResult<String>;

    /// Replace the entry with the same id.
    async fn update(&self, entry: &ScheduleEntry) -> TimetableResult<()>;

    /// Remove the entry with this id.
    async fn delete(&self, id: &str) -> TimetableResult<()>;
}

/// Decode raw store records, setting aside the ones that don't fit the
/// schedule model (unknown weekday, unknown session type, missing fields).
pub fn decode_records(records: Vec<Value>) -> ScheduleListing {
    let mut listing = ScheduleListing::default();

    for record in records {
        let id = record_id(&record);
        match serde_json::from_value::<ScheduleEntry>(record) {
            Ok(entry) => listing.entries.push(entry),
            Err(e) => {
                warn!(id = ?id, "Rejecting schedule record: {}", e);
                listing.rejected.push(RejectedRecord {
                    id,
                    reason: e.to_string(),
                });
            }
        }
    }

    listing
}

fn record_id(record: &Value) -> Option<String> {
    match record.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
