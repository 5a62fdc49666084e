use anyhow::Result;

use crate::render;

pub fn run() -> Result<()> {
    let gateway = super::open_gateway()?;
    let calendars = gateway.list_calendars()?;

    if calendars.is_empty() {
        println!("No calendars found");
        return Ok(());
    }

    println!("Available calendars:");
    println!();
    for calendar in &calendars {
        render::print_calendar(calendar);
    }
    Ok(())
}
