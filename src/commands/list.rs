use anyhow::Result;
use owo_colors::OwoColorize;
use timetable_core::Weekday;
use timetable_core::store::HttpScheduleStore;
use timetable_core::view::TeacherFilter;

use crate::render::{Render, render_heading};

use super::load_view;

pub async fn run(store: &HttpScheduleStore, day: Weekday, teacher: TeacherFilter) -> Result<()> {
    let mut view = load_view(store).await?;
    view.day = day;
    view.teacher = teacher;

    println!("{}", render_heading(&view));

    let entries = view.filtered();
    if entries.is_empty() {
        println!("   {}", "No classes".dimmed());
        return Ok(());
    }

    for entry in entries {
        println!("   {}", entry.render());
    }

    Ok(())
}
