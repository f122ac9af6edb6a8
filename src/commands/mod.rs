pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod teachers;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use timetable_core::TimetableError;
use timetable_core::config::TimetableConfig;
use timetable_core::store::HttpScheduleStore;
use timetable_core::view::ScheduleView;

/// Load config.toml, letting `--api-url` win over file and environment.
pub fn load_config(api_url: Option<String>) -> Result<TimetableConfig> {
    let mut config = TimetableConfig::load()?;
    if api_url.is_some() {
        config.api_url = api_url;
    }
    Ok(config)
}

pub fn store_from(config: &TimetableConfig) -> Result<HttpScheduleStore> {
    let url = config.api_url()?;
    tracing::debug!("Using schedule API at {} (timeout {:?})", url, config.timeout());
    HttpScheduleStore::new(url, config.timeout())
        .with_context(|| format!("Failed to set up client for {}", url))
}

/// Shorthand for commands that only need the store.
pub fn connect(api_url: Option<String>) -> Result<HttpScheduleStore> {
    store_from(&load_config(api_url)?)
}

/// Fetch the timetable into a fresh view, mentioning records the store
/// returned that could not be read.
pub async fn load_view(store: &HttpScheduleStore) -> Result<ScheduleView> {
    let mut view = ScheduleView::new();
    view.refresh(store)
        .await
        .with_context(|| format!("Failed to load schedule from {}", store.base_url()))?;

    for rejected in view.rejected() {
        let id = rejected.id.as_deref().unwrap_or("?");
        println!(
            "{}",
            format!("Skipped unreadable entry {}: {}", id, rejected.reason).yellow()
        );
    }

    Ok(view)
}

/// A failed reload after a successful write still counts as written.
/// Returns the affected id, or passes any other error through.
pub fn written(result: Result<(), TimetableError>, id: &str) -> Result<String, TimetableError> {
    match result {
        Ok(()) => Ok(id.to_string()),
        Err(TimetableError::RefreshFailed { id, source }) => {
            println!(
                "{}",
                format!("Saved, but could not reload the schedule: {}", source).yellow()
            );
            Ok(id)
        }
        Err(e) => Err(e),
    }
}
