use anyhow::Result;
use owo_colors::OwoColorize;
use timetable_core::store::HttpScheduleStore;
use timetable_core::{ScheduleEntry, SessionKind, TimetableError, Weekday};

use super::{load_view, written};

/// Fields given on the command line; `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct EntryChanges {
    pub teacher: Option<String>,
    pub subject: Option<String>,
    pub time: Option<String>,
    pub classroom: Option<String>,
    pub day: Option<Weekday>,
    pub kind: Option<SessionKind>,
}

impl EntryChanges {
    /// Apply the changes, returning whether anything differs afterwards.
    pub fn apply(self, entry: &mut ScheduleEntry) -> bool {
        let before = entry.clone();

        if let Some(teacher) = self.teacher {
            entry.teacher = teacher;
        }
        if let Some(subject) = self.subject {
            entry.subject = subject;
        }
        if let Some(time) = self.time {
            entry.time = time;
        }
        if let Some(classroom) = self.classroom {
            entry.classroom = classroom;
        }
        if let Some(day) = self.day {
            entry.day = day;
        }
        if let Some(kind) = self.kind {
            entry.kind = kind;
        }

        *entry != before
    }
}

pub async fn run(store: &HttpScheduleStore, id: &str, changes: EntryChanges) -> Result<()> {
    let mut view = load_view(store).await?;

    let mut entry = view
        .find(id)
        .cloned()
        .ok_or_else(|| TimetableError::EntryNotFound(id.to_string()))?;

    if !changes.apply(&mut entry) {
        println!("{}", "Nothing to change".dimmed());
        return Ok(());
    }

    written(view.update(store, &entry).await, &entry.id)?;

    println!("{} {}", "Updated".yellow(), entry);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> ScheduleEntry {
        ScheduleEntry {
            id: "6".into(),
            teacher: "V. Petrov".into(),
            subject: "Web development".into(),
            time: "14:15 - 15:45".into(),
            classroom: "Room 205".into(),
            day: Weekday::Wednesday,
            kind: SessionKind::Lab,
        }
    }

    #[test]
    fn test_apply_changes_only_given_fields() {
        let mut e = entry();
        let changed = EntryChanges {
            classroom: Some("Room 210".into()),
            day: Some(Weekday::Thursday),
            ..Default::default()
        }
        .apply(&mut e);

        assert!(changed);
        assert_eq!(e.classroom, "Room 210");
        assert_eq!(e.day, Weekday::Thursday);
        assert_eq!(e.teacher, "V. Petrov");
        assert_eq!(e.id, "6");
    }

    #[test]
    fn test_apply_same_values_is_no_change() {
        let mut e = entry();
        let changed = EntryChanges {
            kind: Some(SessionKind::Lab),
            ..Default::default()
        }
        .apply(&mut e);

        assert!(!changed);
        assert!(!EntryChanges::default().apply(&mut e));
    }
}
