use anyhow::Result;
use owo_colors::OwoColorize;
use timetable_core::store::HttpScheduleStore;

use super::load_view;

pub async fn run(store: &HttpScheduleStore) -> Result<()> {
    let view = load_view(store).await?;
    let teachers = view.teachers();

    if teachers.is_empty() {
        println!("{}", "No teachers found".dimmed());
        return Ok(());
    }

    for teacher in teachers {
        println!("{}", teacher);
    }

    Ok(())
}
