use anyhow::{Context, Result};
use chrono::{Duration, Local};
use ekcal_core::NewEvent;

use crate::datetime::parse_datetime;

pub struct AddArgs {
    pub title: String,
    pub start: String,
    pub end: Option<String>,
    pub calendar: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub all_day: bool,
}

pub fn run(args: AddArgs) -> Result<()> {
    let gateway = super::open_gateway()?;

    let start = parse_datetime(&args.start).context("invalid start time")?;
    let end = match &args.end {
        Some(end) => parse_datetime(end).context("invalid end time")?,
        // All-day events default to a full day, timed ones to one hour.
        None if args.all_day => start + Duration::hours(24),
        None => start + Duration::hours(1),
    };

    let draft = NewEvent {
        title: args.title.clone(),
        start,
        end,
        calendar_id: args.calendar.unwrap_or_default(),
        location: args.location.unwrap_or_default(),
        notes: args.notes.unwrap_or_default(),
        all_day: args.all_day,
    };

    let event_id = gateway.create_event(&draft)?;

    println!("Event created: {}", args.title);
    println!(
        "  Time: {} - {}",
        start.with_timezone(&Local).format("%a, %b %-d %-I:%M %p"),
        end.with_timezone(&Local).format("%-I:%M %p"),
    );
    if !draft.location.is_empty() {
        println!("  Location: {}", draft.location);
    }
    println!("  ID: {event_id}");
    Ok(())
}
