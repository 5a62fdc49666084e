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
    let end = start_of_day + Duration::days(7);

    let events = gateway.list_events(
        start_of_day.with_timezone(&Utc),
        end.with_timezone(&Utc),
    )?;

    if events.is_empty() {
        println!("No upcoming events in the next 7 days");
        return Ok(());
    }

    println!("Upcoming events (next 7 days):");

    // Group by day, in store order.
    let mut current_day = String::new();
    for event in &events {
        let day = render::day_label(event.start.with_timezone(&Local));
        if day != current_day {
            println!();
            println!("-- {day} --");
            current_day = day;
        }
        render::print_event(event);
    }
    Ok(())
}
