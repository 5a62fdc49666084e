use anyhow::Result;
use chrono::{Duration, Local, Utc};

use crate::render;

pub fn run() -> Result<()> {
    let gateway = super::open_gateway()?;

    let now = Local::now();
    let start_of_day = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_local_timezone(Local)
        .earliest()
        .unwrap_or(now);
    let end_of_day = start_of_day + Duration::hours(24);

    let events = gateway.list_events(
        start_of_day.with_timezone(&Utc),
        end_of_day.with_timezone(&Utc),
    )?;

    if events.is_empty() {
        println!("No events today");
        return Ok(());
    }

    println!("Today's events ({}):", now.format("%a, %b %-d"));
    println!();
    for event in &events {
        render::print_event(event);
    }
    Ok(())
}
