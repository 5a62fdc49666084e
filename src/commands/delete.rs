use anyhow::{Result, bail};
use ekcal_core::CalendarError;

pub fn run(event_id: &str) -> Result<()> {
    let gateway = super::open_gateway()?;

    match gateway.delete_event(event_id) {
        Ok(()) => {
            println!("Event deleted: {event_id}");
            Ok(())
        }
        Err(CalendarError::NotFound) => bail!("event not found: {event_id}"),
        Err(err) => Err(err.into()),
    }
}
