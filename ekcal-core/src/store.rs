//! The seam between the gateway and a concrete calendar store.

use chrono::{DateTime, Utc};

use crate::auth::AuthorizationStatus;
use crate::calendar::Calendar;
use crate::error::CalendarResult;
use crate::event::{Event, NewEvent};

pub mod memory;

/// Operations a calendar store backend must provide.
///
/// Backends map their own object model into the flat records and surface
/// failures through the shared taxonomy. The [`Gateway`](crate::Gateway)
/// sits in front of any backend and refuses data operations while
/// authorization is not granted, so backends can assume they are only
/// exercised after the gate. A backend whose native store enforces
/// permissions itself should still let those errors through as
/// `AccessDenied`.
pub trait CalendarStore {
    /// Current permission state. Must never prompt the user.
    fn authorization_status(&self) -> AuthorizationStatus;

    /// Request calendar access.
    ///
    /// Blocks on the one-time OS consent prompt when the state is
    /// [`AuthorizationStatus::NotDetermined`]; resolves immediately in every
    /// other state. This is the only blocking suspension point in the system.
    fn request_access(&self) -> CalendarResult<()>;

    /// Every calendar the authorized identity can see, in store order.
    fn calendars(&self) -> CalendarResult<Vec<Calendar>>;

    /// Events whose interval intersects `[start, end]`, boundary-inclusive,
    /// in store order. Recurring series are expanded (or not) exactly as the
    /// underlying store enumerates them.
    fn events_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> CalendarResult<Vec<Event>>;

    /// Create an event and return the store-assigned id.
    ///
    /// The store is the source of truth for the target calendar: an unknown
    /// or non-writable `calendar_id` is rejected, and a failed create leaves
    /// no orphaned event behind.
    fn create_event(&self, draft: &NewEvent) -> CalendarResult<String>;

    /// Permanently remove an event. Unknown ids (including already-deleted
    /// ones) report `NotFound`.
    fn delete_event(&self, event_id: &str) -> CalendarResult<()>;
}
