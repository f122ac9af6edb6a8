mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use timetable_core::view::TeacherFilter;
use timetable_core::{SessionKind, Weekday};

#[derive(Parser)]
#[command(name = "timetable")]
#[command(about = "View and edit the weekly class timetable, and export it to your calendar")]
struct Cli {
    /// Schedule API endpoint (overrides config.toml and TIMETABLE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a config file with all options commented out
    Init,
    /// Show the classes of one day
    List {
        /// Day to show (monday..friday)
        #[arg(short, long, default_value = "monday")]
        day: Weekday,

        /// Only show this teacher's classes ("all" for everyone)
        #[arg(short, long, default_value = "all")]
        teacher: TeacherFilter,
    },
    /// List every teacher in the timetable
    Teachers,
    /// Add a class
    Add {
        #[arg(long)]
        teacher: String,

        #[arg(long)]
        subject: String,

        /// Time range, e.g. "9:00 - 10:30"
        #[arg(long)]
        time: String,

        #[arg(long)]
        classroom: String,

        #[arg(long)]
        day: Weekday,

        /// Session type (lecture, practice, lab)
        #[arg(long = "type", value_name = "TYPE")]
        kind: SessionKind,
    },
    /// Change fields of an existing class
    Edit {
        id: String,

        #[arg(long)]
        teacher: Option<String>,

        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        classroom: Option<String>,

        #[arg(long)]
        day: Option<Weekday>,

        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<SessionKind>,
    },
    /// Delete a class
    Delete { id: String },
    /// Export the whole timetable to an .ics file
    Export {
        /// Output file (defaults to export_path from config, or schedule.ics)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// IANA time zone the class times are in (defaults to the system zone)
        #[arg(long)]
        timezone: Option<chrono_tz::Tz>,

        /// Project from this moment instead of now (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        at: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api_url = cli.api_url;

    match cli.command {
        Commands::Init => commands::init::run(),
        Commands::List { day, teacher } => {
            let store = commands::connect(api_url)?;
            commands::list::run(&store, day, teacher).await
        }
        Commands::Teachers => {
            let store = commands::connect(api_url)?;
            commands::teachers::run(&store).await
        }
        Commands::Add {
            teacher,
            subject,
            time,
            classroom,
            day,
            kind,
        } => {
            let store = commands::connect(api_url)?;
            let draft = timetable_core::EntryDraft {
                teacher,
                subject,
                time,
                classroom,
                day,
                kind,
            };
            commands::add::run(&store, draft).await
        }
        Commands::Edit {
            id,
            teacher,
            subject,
            time,
            classroom,
            day,
            kind,
        } => {
            let store = commands::connect(api_url)?;
            let changes = commands::edit::EntryChanges {
                teacher,
                subject,
                time,
                classroom,
                day,
                kind,
            };
            commands::edit::run(&store, &id, changes).await
        }
        Commands::Delete { id } => {
            let store = commands::connect(api_url)?;
            commands::delete::run(&store, &id).await
        }
        Commands::Export {
            output,
            timezone,
            at,
        } => {
            let config = commands::load_config(api_url)?;
            let store = commands::store_from(&config)?;
            let output = output.unwrap_or_else(|| config.export_path());
            commands::export::run(&store, output, timezone, at.as_deref()).await
        }
    }
}
