//! Event records.
//!
//! These are the flat, immutable values crossing the boundary: the native
//! store's rich object graph is mapped into them fresh on every call, and no
//! native handle ever leaks through. The serialized field names and the
//! Unix-second timestamps are the stable external schema.

use chrono::serde::ts_seconds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar event.
///
/// `location` and `notes` are possibly-empty strings, never null. When
/// `all_day` is set, `start`/`end` carry date granularity and the
/// time-of-day is not significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(with = "ts_seconds")]
    pub start: DateTime<Utc>,
    #[serde(with = "ts_seconds")]
    pub end: DateTime<Utc>,
    #[serde(rename = "calendarID")]
    pub calendar_id: String,
    pub location: String,
    pub notes: String,
    #[serde(rename = "allDay")]
    pub all_day: bool,
}

impl Event {
    /// Boundary-inclusive overlap with a query window.
    ///
    /// An event spanning a window edge is included; strict containment is
    /// not required.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start <= end && self.end >= start
    }
}

/// Input for creating an event. The store assigns the id.
///
/// An empty `calendar_id` targets the store's default calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    #[serde(with = "ts_seconds")]
    pub start: DateTime<Utc>,
    #[serde(with = "ts_seconds")]
    pub end: DateTime<Utc>,
    #[serde(rename = "calendarID", default)]
    pub calendar_id: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub notes: String,
    #[serde(rename = "allDay", default)]
    pub all_day: bool,
}

impl NewEvent {
    pub fn new(title: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        NewEvent {
            title: title.to_string(),
            start,
            end,
            calendar_id: String::new(),
            location: String::new(),
            notes: String::new(),
            all_day: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_test_event() -> Event {
        Event {
            id: "evt-1".to_string(),
            title: "Team Standup".to_string(),
            start: Utc.with_ymd_and_hms(2026, 3, 20, 15, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 3, 20, 16, 0, 0).unwrap(),
            calendar_id: "cal-1".to_string(),
            location: String::new(),
            notes: String::new(),
            all_day: false,
        }
    }

    #[test]
    fn test_event_json_schema() {
        let event = make_test_event();
        let json = serde_json::to_value(&event).unwrap();

        // Exact field set of the external schema, Unix seconds for times.
        assert_eq!(
            json,
            serde_json::json!({
                "id": "evt-1",
                "title": "Team Standup",
                "start": 1_774_018_800i64,
                "end": 1_774_022_400i64,
                "calendarID": "cal-1",
                "location": "",
                "notes": "",
                "allDay": false,
            })
        );
    }

    #[test]
    fn test_event_json_round_trip() {
        let event = make_test_event();
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_overlap_is_boundary_inclusive() {
        let event = make_test_event();
        let t0 = event.start;
        let hour = chrono::Duration::hours(1);

        // Window starting mid-event.
        assert!(event.overlaps(t0 + hour / 2, t0 + hour * 2));
        // Window touching exactly the event end.
        assert!(event.overlaps(event.end, event.end + hour));
        // Window touching exactly the event start.
        assert!(event.overlaps(t0 - hour, t0));
        // Window starting one second after the event ends.
        assert!(!event.overlaps(event.end + chrono::Duration::seconds(1), t0 + hour * 2));
    }
}
