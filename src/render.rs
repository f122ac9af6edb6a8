//! TUI rendering traits for timetable types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to timetable-core types using owo_colors.

use owo_colors::OwoColorize;
use timetable_core::view::{ScheduleView, TeacherFilter};
use timetable_core::{ScheduleEntry, SessionKind};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for SessionKind {
    fn render(&self) -> String {
        let label = self.label();
        match self {
            SessionKind::Lecture => label.blue().to_string(),
            SessionKind::Practice => label.green().to_string(),
            SessionKind::Lab => label.magenta().to_string(),
        }
    }
}

impl Render for ScheduleEntry {
    fn render(&self) -> String {
        format!(
            "{:>13}  {} [{}]\n   {:>13}  {} · {} {}",
            self.time,
            self.subject.bold(),
            self.kind.render(),
            "",
            self.teacher,
            self.classroom,
            format!("#{}", self.id).dimmed()
        )
    }
}

/// "📅 Monday" plus the teacher when the view is narrowed to one.
pub fn render_heading(view: &ScheduleView) -> String {
    let day = view.day.label().bold().to_string();
    match &view.teacher {
        TeacherFilter::All => format!("📅 {}", day),
        TeacherFilter::Only(name) => format!("📅 {} {}", day, format!("({})", name).dimmed()),
    }
}
