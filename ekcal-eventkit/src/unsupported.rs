//! Stub backend for platforms without a native calendar store.

use chrono::{DateTime, Utc};

use ekcal_core::{
    AuthorizationStatus, Calendar, CalendarError, CalendarResult, CalendarStore, Event, NewEvent,
};

/// Reports access as denied and fails every operation, so callers get the
/// same taxonomy off-platform instead of a crash or a silent no-op.
#[derive(Default)]
pub struct UnsupportedStore;

impl UnsupportedStore {
    pub fn new() -> Self {
        UnsupportedStore
    }
}

impl CalendarStore for UnsupportedStore {
    fn authorization_status(&self) -> AuthorizationStatus {
        AuthorizationStatus::Denied
    }

    fn request_access(&self) -> CalendarResult<()> {
        Err(CalendarError::Unsupported)
    }

    fn calendars(&self) -> CalendarResult<Vec<Calendar>> {
        Err(CalendarError::Unsupported)
    }

    fn events_between(
        &self,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> CalendarResult<Vec<Event>> {
        Err(CalendarError::Unsupported)
    }

    fn create_event(&self, _draft: &NewEvent) -> CalendarResult<String> {
        Err(CalendarError::Unsupported)
    }

    fn delete_event(&self, _event_id: &str) -> CalendarResult<()> {
        Err(CalendarError::Unsupported)
    }
}
