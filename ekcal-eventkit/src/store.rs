//! EventKit-backed calendar store.
//!
//! Maps the mutable EventKit object graph into the flat records fresh on
//! every call; no `EK*` handle and no authorization state is cached. The
//! access request bridges EventKit's completion block back into a blocking
//! call, which is the one long suspension point in the system.

use std::sync::mpsc;

use chrono::{DateTime, Utc};

use block2::RcBlock;
use objc2::rc::Retained;
use objc2::runtime::Bool;
use objc2_app_kit::{NSColor, NSColorSpace};
use objc2_event_kit::{EKCalendar, EKEntityType, EKEvent, EKEventStore, EKSpan};
use objc2_foundation::{NSDate, NSError, NSString};

use ekcal_core::{
    AuthorizationStatus, Calendar, CalendarError, CalendarResult, CalendarStore, Event, NewEvent,
};

pub struct EventKitStore {
    store: Retained<EKEventStore>,
}

impl EventKitStore {
    pub fn new() -> Self {
        EventKitStore {
            store: unsafe { EKEventStore::new() },
        }
    }
}

impl Default for EventKitStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarStore for EventKitStore {
    fn authorization_status(&self) -> AuthorizationStatus {
        // Class-level query against the OS permission database; never
        // triggers a prompt.
        let status = unsafe { EKEventStore::authorizationStatusForEntityType(EKEntityType::Event) };
        AuthorizationStatus::from_code(status.0 as i32)
    }

    fn request_access(&self) -> CalendarResult<()> {
        match self.authorization_status() {
            AuthorizationStatus::Authorized => return Ok(()),
            AuthorizationStatus::Denied | AuthorizationStatus::Restricted => {
                // The OS records one decision and will not show the dialog
                // again; only the user can change this in System Settings.
                return Err(CalendarError::AccessDenied);
            }
            AuthorizationStatus::NotDetermined => {}
        }

        let (tx, rx) = mpsc::channel();
        let completion = RcBlock::new(move |granted: Bool, _error: *mut NSError| {
            let _ = tx.send(granted.as_bool());
        });
        unsafe {
            self.store
                .requestAccessToEntityType_completion(EKEntityType::Event, &completion);
        }

        // Blocks until the user answers the one-time consent dialog.
        match rx.recv() {
            Ok(true) => Ok(()),
            Ok(false) => Err(CalendarError::AccessDenied),
            Err(_) => Err(CalendarError::Failed(
                "access request completion was dropped".to_string(),
            )),
        }
    }

    fn calendars(&self) -> CalendarResult<Vec<Calendar>> {
        let native = unsafe { self.store.calendarsForEntityType(EKEntityType::Event) };
        let mut calendars = Vec::with_capacity(native.count());
        for index in 0..native.count() {
            let calendar = unsafe { native.objectAtIndex(index) };
            calendars.push(map_calendar(&calendar));
        }
        Ok(calendars)
    }

    fn events_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> CalendarResult<Vec<Event>> {
        // EventKit's predicate already uses overlap semantics and expands
        // recurring series into one entry per occurrence; both behaviors are
        // passed through untouched.
        let predicate = unsafe {
            self.store.predicateForEventsWithStartDate_endDate_calendars(
                &ns_date(start),
                &ns_date(end),
                None,
            )
        };
        let native = unsafe { self.store.eventsMatchingPredicate(&predicate) };

        let mut events = Vec::with_capacity(native.count());
        for index in 0..native.count() {
            let event = unsafe { native.objectAtIndex(index) };
            events.push(map_event(&event));
        }
        Ok(events)
    }

    fn create_event(&self, draft: &NewEvent) -> CalendarResult<String> {
        let calendar = if draft.calendar_id.is_empty() {
            unsafe { self.store.defaultCalendarForNewEvents() }
                .ok_or_else(|| CalendarError::Failed("no default calendar".to_string()))?
        } else {
            let identifier = NSString::from_str(&draft.calendar_id);
            unsafe { self.store.calendarWithIdentifier(&identifier) }.ok_or_else(|| {
                CalendarError::Failed(format!("calendar not found: {}", draft.calendar_id))
            })?
        };

        let event = unsafe { EKEvent::eventWithEventStore(&self.store) };
        unsafe {
            event.setTitle(Some(&NSString::from_str(&draft.title)));
            event.setStartDate(&ns_date(draft.start));
            event.setEndDate(&ns_date(draft.end));
            event.setCalendar(Some(&calendar));
            event.setAllDay(draft.all_day);
            if !draft.location.is_empty() {
                event.setLocation(Some(&NSString::from_str(&draft.location)));
            }
            if !draft.notes.is_empty() {
                event.setNotes(Some(&NSString::from_str(&draft.notes)));
            }
        }

        // Committed synchronously; EventKit's save is atomic, so a rejection
        // here leaves no orphaned event.
        unsafe {
            self.store
                .saveEvent_span_commit_error(&event, EKSpan::ThisEvent, true)
        }
        .map_err(store_error)?;

        unsafe { event.eventIdentifier() }
            .map(|id| id.to_string())
            .ok_or_else(|| {
                CalendarError::Failed("store did not assign an event identifier".to_string())
            })
    }

    fn delete_event(&self, event_id: &str) -> CalendarResult<()> {
        let identifier = NSString::from_str(event_id);
        let event = unsafe { self.store.eventWithIdentifier(&identifier) }
            .ok_or(CalendarError::NotFound)?;

        unsafe {
            self.store
                .removeEvent_span_commit_error(&event, EKSpan::ThisEvent, true)
        }
        .map_err(store_error)
    }
}

fn store_error(error: Retained<NSError>) -> CalendarError {
    CalendarError::Failed(unsafe { error.localizedDescription() }.to_string())
}

fn ns_date(instant: DateTime<Utc>) -> Retained<NSDate> {
    unsafe { NSDate::dateWithTimeIntervalSince1970(instant.timestamp() as f64) }
}

fn utc(date: &NSDate) -> DateTime<Utc> {
    let seconds = unsafe { date.timeIntervalSince1970() };
    DateTime::from_timestamp(seconds as i64, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

fn map_calendar(calendar: &EKCalendar) -> Calendar {
    Calendar {
        id: unsafe { calendar.calendarIdentifier() }.to_string(),
        title: unsafe { calendar.title() }.to_string(),
        color: color_hex(&unsafe { calendar.color() }),
    }
}

fn map_event(event: &EKEvent) -> Event {
    Event {
        id: unsafe { event.eventIdentifier() }
            .map(|id| id.to_string())
            .unwrap_or_default(),
        title: unsafe { event.title() }
            .map(|title| title.to_string())
            .unwrap_or_default(),
        start: utc(&unsafe { event.startDate() }),
        end: utc(&unsafe { event.endDate() }),
        calendar_id: unsafe { event.calendar() }
            .map(|calendar| unsafe { calendar.calendarIdentifier() }.to_string())
            .unwrap_or_default(),
        location: unsafe { event.location() }
            .map(|location| location.to_string())
            .unwrap_or_default(),
        notes: unsafe { event.notes() }
            .map(|notes| notes.to_string())
            .unwrap_or_default(),
        all_day: unsafe { event.isAllDay() },
    }
}

/// Serialized color form: lowercase `#rrggbb` in sRGB, empty when the color
/// cannot be expressed there.
fn color_hex(color: &NSColor) -> String {
    let srgb = match unsafe { color.colorUsingColorSpace(&NSColorSpace::sRGBColorSpace()) } {
        Some(srgb) => srgb,
        None => return String::new(),
    };
    let channel = |component: f64| (component.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(unsafe { srgb.redComponent() }),
        channel(unsafe { srgb.greenComponent() }),
        channel(unsafe { srgb.blueComponent() }),
    )
}
