mod commands;
mod datetime;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ekcal")]
#[command(about = "Access and manage events in the system calendar store")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all calendars
    Calendars,
    /// Show upcoming events (next 7 days)
    Events,
    /// Add a new calendar event
    #[command(
        long_about = "Add a new event to your calendar.\n\n\
                      Date/time format: \"2026-01-15 10:00\" or \"2026-01-15\" for all-day events"
    )]
    Add {
        title: String,

        /// Start time (required)
        #[arg(short, long)]
        start: String,

        /// End time (defaults to start + 1 hour)
        #[arg(short, long)]
        end: Option<String>,

        /// Calendar ID (uses the default calendar if not specified)
        #[arg(short, long)]
        calendar: Option<String>,

        /// Event location
        #[arg(short, long)]
        location: Option<String>,

        /// Event notes
        #[arg(short, long)]
        notes: Option<String>,

        /// Create an all-day event
        #[arg(long)]
        all_day: bool,
    },
    /// Delete a calendar event
    Delete { event_id: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // Default: show today's events.
        None => commands::today::run(),
        Some(Commands::Calendars) => commands::calendars::run(),
        Some(Commands::Events) => commands::events::run(),
        Some(Commands::Add {
            title,
            start,
            end,
            calendar,
            location,
            notes,
            all_day,
        }) => commands::add::run(commands::add::AddArgs {
            title,
            start,
            end,
            calendar,
            location,
            notes,
            all_day,
        }),
        Some(Commands::Delete { event_id }) => commands::delete::run(&event_id),
    }
}
