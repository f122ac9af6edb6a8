use anyhow::Result;
use owo_colors::OwoColorize;
use timetable_core::store::HttpScheduleStore;

use super::{load_view, written};

pub async fn run(store: &HttpScheduleStore, id: &str) -> Result<()> {
    let mut view = load_view(store).await?;

    let label = view
        .find(id)
        .map(|entry| entry.to_string())
        .unwrap_or_else(|| id.to_string());

    written(view.delete(store, id).await, id)?;

    println!("{} {}", "Deleted".red(), label);

    Ok(())
}
