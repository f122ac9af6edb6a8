use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use timetable_core::EntryDraft;
use timetable_core::store::HttpScheduleStore;

use super::{load_view, written};

pub async fn run(store: &HttpScheduleStore, draft: EntryDraft) -> Result<()> {
    let mut view = load_view(store).await?;

    let id = match view.create(store, &draft).await {
        Ok(id) => id,
        Err(e) => written(Err(e), "")
            .with_context(|| format!("Failed to add {}", draft.subject))?,
    };

    println!(
        "{} {} on {} ({})",
        "Added".green(),
        draft.subject,
        draft.day.label(),
        format!("id {}", id).dimmed()
    );

    Ok(())
}
