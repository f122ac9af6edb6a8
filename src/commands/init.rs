use anyhow::Result;
use timetable_core::config::TimetableConfig;

pub fn run() -> Result<()> {
    let path = TimetableConfig::config_path()?;

    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    TimetableConfig::create_default_config(&path)?;
    println!("Created {}", path.display());
    println!("\nSet api_url there to point at your schedule API.");

    Ok(())
}
