//! Plain-text rendering of calendars and events.

use chrono::{DateTime, Local};
use ekcal_core::{Calendar, Event};

pub fn print_event(event: &Event) {
    println!("  {}  {}", time_label(event), event.title);
    if !event.location.is_empty() {
        println!("            @ {}", event.location);
    }
    if !event.calendar_id.is_empty() {
        println!("            [{}]", event.calendar_id);
    }
}

pub fn print_calendar(calendar: &Calendar) {
    println!("  {}", calendar.title);
    println!("    ID: {}", calendar.id);
    if !calendar.color.is_empty() {
        println!("    Color: {}", calendar.color);
    }
}

/// Day header used when grouping the upcoming view, e.g. `Mon, Jan 15`.
pub fn day_label(instant: DateTime<Local>) -> String {
    instant.format("%a, %b %-d").to_string()
}

fn time_label(event: &Event) -> String {
    if event.all_day {
        return "All day".to_string();
    }
    format!(
        "{} - {}",
        event.start.with_timezone(&Local).format("%-I:%M %p"),
        event.end.with_timezone(&Local).format("%-I:%M %p"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_all_day_label() {
        let event = Event {
            id: "evt-1".to_string(),
            title: "Conference".to_string(),
            start: Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 1, 16, 0, 0, 0).unwrap(),
            calendar_id: "work".to_string(),
            location: String::new(),
            notes: String::new(),
            all_day: true,
        };
        assert_eq!(time_label(&event), "All day");
    }

    #[test]
    fn test_timed_label_shows_both_ends() {
        let event = Event {
            id: "evt-1".to_string(),
            title: "Standup".to_string(),
            start: Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap(),
            calendar_id: "work".to_string(),
            location: String::new(),
            notes: String::new(),
            all_day: false,
        };
        let label = time_label(&event);
        assert!(label.contains(" - "), "got: {label}");
    }
}
