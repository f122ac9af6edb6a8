//! The schedule as presented to the user: one weekday at a time,
//! optionally narrowed to one teacher.
//!
//! The view never patches its list locally. Every successful mutation is
//! followed by a full reload from the store, so what is shown is always what
//! the store holds.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::entry::{EntryDraft, ScheduleEntry, Weekday};
use crate::error::{TimetableError, TimetableResult};
use crate::store::{RejectedRecord, ScheduleStore};
use crate::time_range::{parse_clock, start_text};

/// Keyword selecting every teacher.
pub const ALL_TEACHERS: &str = "all";

/// Teacher selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TeacherFilter {
    #[default]
    All,
    Only(String),
}

impl TeacherFilter {
    pub fn matches(&self, teacher: &str) -> bool {
        match self {
            TeacherFilter::All => true,
            TeacherFilter::Only(name) => name == teacher,
        }
    }
}

impl FromStr for TeacherFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(ALL_TEACHERS) {
            Ok(TeacherFilter::All)
        } else {
            Ok(TeacherFilter::Only(s.to_string()))
        }
    }
}

impl fmt::Display for TeacherFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeacherFilter::All => f.write_str(ALL_TEACHERS),
            TeacherFilter::Only(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScheduleView {
    entries: Vec<ScheduleEntry>,
    rejected: Vec<RejectedRecord>,
    pub day: Weekday,
    pub teacher: TeacherFilter,
}

impl Default for ScheduleView {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleView {
    /// Empty view showing Monday for all teachers.
    pub fn new() -> Self {
        ScheduleView {
            entries: Vec::new(),
            rejected: Vec::new(),
            day: Weekday::Monday,
            teacher: TeacherFilter::All,
        }
    }

    pub fn with_entries(entries: Vec<ScheduleEntry>) -> Self {
        ScheduleView {
            entries,
            ..Self::new()
        }
    }

    /// Every loaded entry, in store order.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Records the store returned that could not be shown.
    pub fn rejected(&self) -> &[RejectedRecord] {
        &self.rejected
    }

    pub fn find(&self, id: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries for the selected day and teacher, earliest start first.
    ///
    /// Entries whose start time can't be parsed keep their store order
    /// after the others.
    pub fn filtered(&self) -> Vec<&ScheduleEntry> {
        let mut visible: Vec<&ScheduleEntry> = self
            .entries
            .iter()
            .filter(|e| e.day == self.day && self.teacher.matches(&e.teacher))
            .collect();

        visible.sort_by(|a, b| {
            let a_start = parse_clock(start_text(&a.time)).ok();
            let b_start = parse_clock(start_text(&b.time)).ok();
            match (a_start, b_start) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });

        visible
    }

    /// Distinct teacher names in first-seen order.
    pub fn teachers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !names.contains(&entry.teacher.as_str()) {
                names.push(&entry.teacher);
            }
        }
        names
    }

    /// Replace the loaded list with the store's current contents.
    pub async fn refresh<S: ScheduleStore>(&mut self, store: &S) -> TimetableResult<()> {
        let listing = store.list().await?;
        debug!(
            "Refreshed view: {} entries, {} rejected",
            listing.entries.len(),
            listing.rejected.len()
        );
        self.entries = listing.entries;
        self.rejected = listing.rejected;
        Ok(())
    }

    /// Create an entry, then reload. Returns the new id.
    pub async fn create<S: ScheduleStore>(
        &mut self,
        store: &S,
        draft: &EntryDraft,
    ) -> TimetableResult<String> {
        draft.validate()?;
        let id = store.create(draft).await?;
        self.reload_after_write(store, &id).await?;
        Ok(id)
    }

    /// Replace an entry, then reload.
    pub async fn update<S: ScheduleStore>(
        &mut self,
        store: &S,
        entry: &ScheduleEntry,
    ) -> TimetableResult<()> {
        entry.draft().validate()?;
        store.update(entry).await?;
        self.reload_after_write(store, &entry.id).await
    }

    /// Delete an entry, then reload.
    pub async fn delete<S: ScheduleStore>(&mut self, store: &S, id: &str) -> TimetableResult<()> {
        if self.find(id).is_none() {
            return Err(TimetableError::EntryNotFound(id.to_string()));
        }
        store.delete(id).await?;
        self.reload_after_write(store, id).await
    }

    /// Reload after a successful write. A failure here is reported as
    /// `RefreshFailed` so callers can tell the write itself went through.
    async fn reload_after_write<S: ScheduleStore>(
        &mut self,
        store: &S,
        id: &str,
    ) -> TimetableResult<()> {
        self.refresh(store)
            .await
            .map_err(|e| TimetableError::RefreshFailed {
                id: id.to_string(),
                source: Box::new(e),
            })
    }
}
