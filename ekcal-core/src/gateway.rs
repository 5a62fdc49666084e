//! Authorization-guarded entry point for calendar operations.

use chrono::{DateTime, Utc};

use crate::auth::AuthorizationStatus;
use crate::calendar::Calendar;
use crate::error::{CalendarError, CalendarResult};
use crate::event::{Event, NewEvent};
use crate::store::CalendarStore;

/// The boundary callers go through to reach a calendar store.
///
/// Every data operation checks the authorization state first and fails with
/// [`CalendarError::AccessDenied`] while access is not granted; the gateway
/// never requests access implicitly on a caller's behalf. Input the caller
/// got wrong (empty title, inverted time range) is rejected before the store
/// is touched.
pub struct Gateway<S: CalendarStore> {
    store: S,
}

impl<S: CalendarStore> Gateway<S> {
    pub fn new(store: S) -> Self {
        Gateway { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current permission state. Non-blocking, never prompts.
    pub fn authorization_status(&self) -> AuthorizationStatus {
        self.store.authorization_status()
    }

    /// Request calendar access, blocking on the one-time consent prompt when
    /// the state is still undetermined.
    pub fn request_access(&self) -> CalendarResult<()> {
        // Already-authorized callers resolve without reaching the store's
        // prompt path at all.
        if self.store.authorization_status().is_authorized() {
            return Ok(());
        }
        self.store.request_access()
    }

    pub fn list_calendars(&self) -> CalendarResult<Vec<Calendar>> {
        self.ensure_authorized()?;
        self.store.calendars()
    }

    /// Events overlapping `[start, end]`, boundary-inclusive.
    ///
    /// An inverted window (`end < start`) is an empty window, not an error.
    pub fn list_events(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> CalendarResult<Vec<Event>> {
        self.ensure_authorized()?;
        if end < start {
            return Ok(Vec::new());
        }
        self.store.events_between(start, end)
    }

    /// Create an event and return the store-assigned id.
    pub fn create_event(&self, draft: &NewEvent) -> CalendarResult<String> {
        self.ensure_authorized()?;
        if draft.title.is_empty() {
            return Err(CalendarError::Failed("event title is required".to_string()));
        }
        if draft.end < draft.start {
            return Err(CalendarError::Failed(
                "event end precedes its start".to_string(),
            ));
        }
        self.store.create_event(draft)
    }

    /// Permanently delete an event. Safe to call repeatedly; only the first
    /// call on a given id succeeds.
    pub fn delete_event(&self, event_id: &str) -> CalendarResult<()> {
        self.ensure_authorized()?;
        if event_id.is_empty() {
            return Err(CalendarError::NotFound);
        }
        self.store.delete_event(event_id)
    }

    fn ensure_authorized(&self) -> CalendarResult<()> {
        // Queried fresh on every call; the user can flip the OS setting
        // between any two operations.
        if self.store.authorization_status().is_authorized() {
            Ok(())
        } else {
            Err(CalendarError::AccessDenied)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use chrono::{Duration, TimeZone};

    fn authorized_gateway() -> Gateway<MemoryStore> {
        let store = MemoryStore::authorized();
        store.add_calendar("work", "Work", "#336699");
        Gateway::new(store)
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 10, 0, 0).unwrap()
    }

    fn make_draft() -> NewEvent {
        let mut draft = NewEvent::new("Design review", t0(), t0() + Duration::hours(1));
        draft.calendar_id = "work".to_string();
        draft.location = "Room 4".to_string();
        draft.notes = "Bring slides".to_string();
        draft
    }

    #[test]
    fn test_data_operations_denied_without_authorization() {
        for status in [
            AuthorizationStatus::NotDetermined,
            AuthorizationStatus::Restricted,
            AuthorizationStatus::Denied,
        ] {
            let store = MemoryStore::with_status(status);
            store.add_calendar("work", "Work", "#336699");
            let gateway = Gateway::new(store);

            assert!(matches!(
                gateway.list_calendars(),
                Err(CalendarError::AccessDenied)
            ));
            assert!(matches!(
                gateway.list_events(t0(), t0() + Duration::hours(1)),
                Err(CalendarError::AccessDenied)
            ));
            assert!(matches!(
                gateway.create_event(&make_draft()),
                Err(CalendarError::AccessDenied)
            ));
            assert!(matches!(
                gateway.delete_event("evt-1"),
                Err(CalendarError::AccessDenied)
            ));
            // Nothing reached the store.
            assert_eq!(gateway.store().event_count(), 0);
            assert_eq!(gateway.store().prompt_count(), 0);
        }
    }

    #[test]
    fn test_request_access_when_already_authorized_does_not_prompt() {
        let gateway = authorized_gateway();
        assert!(gateway.request_access().is_ok());
        assert_eq!(gateway.store().prompt_count(), 0);
    }

    #[test]
    fn test_request_access_prompts_once_from_undetermined() {
        let gateway = Gateway::new(MemoryStore::undetermined(true));
        assert!(gateway.request_access().is_ok());
        assert!(gateway.authorization_status().is_authorized());
        // Subsequent requests short-circuit.
        assert!(gateway.request_access().is_ok());
        assert_eq!(gateway.store().prompt_count(), 1);
    }

    #[test]
    fn test_request_access_denied_states_do_not_prompt() {
        for status in [AuthorizationStatus::Denied, AuthorizationStatus::Restricted] {
            let gateway = Gateway::new(MemoryStore::with_status(status));
            assert!(matches!(
                gateway.request_access(),
                Err(CalendarError::AccessDenied)
            ));
            assert_eq!(gateway.store().prompt_count(), 0);
        }
    }

    #[test]
    fn test_inverted_window_is_empty_not_error() {
        let gateway = authorized_gateway();
        gateway.create_event(&make_draft()).unwrap();

        let events = gateway
            .list_events(t0() + Duration::hours(2), t0())
            .unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_window_overlap_is_boundary_inclusive() {
        let gateway = authorized_gateway();
        // Event [T0, T0+3600].
        gateway.create_event(&make_draft()).unwrap();

        // Window [T0+1800, T0+7200] overlaps the second half.
        let hit = gateway
            .list_events(t0() + Duration::seconds(1800), t0() + Duration::seconds(7200))
            .unwrap();
        assert_eq!(hit.len(), 1);

        // Window [T0+3601, T0+7200] starts after the event ends.
        let miss = gateway
            .list_events(t0() + Duration::seconds(3601), t0() + Duration::seconds(7200))
            .unwrap();
        assert!(miss.is_empty());
    }

    #[test]
    fn test_create_then_list_round_trips_all_fields() {
        let gateway = authorized_gateway();
        let draft = make_draft();
        let id = gateway.create_event(&draft).unwrap();

        let events = gateway.list_events(draft.start, draft.end).unwrap();
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.id, id);
        assert_eq!(event.title, draft.title);
        assert_eq!(event.start, draft.start);
        assert_eq!(event.end, draft.end);
        assert_eq!(event.calendar_id, draft.calendar_id);
        assert_eq!(event.location, draft.location);
        assert_eq!(event.notes, draft.notes);
        assert_eq!(event.all_day, draft.all_day);
    }

    #[test]
    fn test_delete_twice_reports_not_found() {
        let gateway = authorized_gateway();
        let id = gateway.create_event(&make_draft()).unwrap();

        assert!(gateway.delete_event(&id).is_ok());
        assert!(matches!(
            gateway.delete_event(&id),
            Err(CalendarError::NotFound)
        ));
    }

    #[test]
    fn test_create_with_unknown_calendar_fails_cleanly() {
        let gateway = authorized_gateway();
        let mut draft = make_draft();
        draft.calendar_id = "no-such-calendar".to_string();

        assert!(matches!(
            gateway.create_event(&draft),
            Err(CalendarError::Failed(_))
        ));

        // No orphaned event in any window.
        let events = gateway
            .list_events(t0() - Duration::days(365), t0() + Duration::days(365))
            .unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_create_rejects_bad_input_before_store() {
        let gateway = authorized_gateway();

        let mut untitled = make_draft();
        untitled.title = String::new();
        assert!(matches!(
            gateway.create_event(&untitled),
            Err(CalendarError::Failed(_))
        ));

        let mut inverted = make_draft();
        inverted.end = inverted.start - Duration::seconds(1);
        assert!(matches!(
            gateway.create_event(&inverted),
            Err(CalendarError::Failed(_))
        ));

        assert_eq!(gateway.store().event_count(), 0);
    }

    #[test]
    fn test_empty_calendar_list_is_not_an_error() {
        let gateway = Gateway::new(MemoryStore::authorized());
        assert!(gateway.list_calendars().unwrap().is_empty());
    }
}
