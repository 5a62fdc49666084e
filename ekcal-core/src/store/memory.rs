//! In-memory calendar store.
//!
//! The executable reference for store semantics: boundary-inclusive window
//! filtering, calendar existence and writability checks on create, and the
//! one-way authorization state machine. Tests build on it; it also works as
//! a scratch backend on platforms without a native store.

use std::collections::HashSet;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::auth::AuthorizationStatus;
use crate::calendar::Calendar;
use crate::error::{CalendarError, CalendarResult};
use crate::event::{Event, NewEvent};
use crate::store::CalendarStore;

pub struct MemoryStore {
    inner: Mutex<Inner>,
}

struct Inner {
    status: AuthorizationStatus,
    /// Scripted user decision for the consent prompt.
    grant_on_prompt: bool,
    prompts: u32,
    calendars: Vec<Calendar>,
    read_only: HashSet<String>,
    events: Vec<Event>,
    next_id: u64,
}

impl MemoryStore {
    pub fn with_status(status: AuthorizationStatus) -> Self {
        MemoryStore {
            inner: Mutex::new(Inner {
                status,
                grant_on_prompt: false,
                prompts: 0,
                calendars: Vec::new(),
                read_only: HashSet::new(),
                events: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// A store whose identity already holds calendar access.
    pub fn authorized() -> Self {
        Self::with_status(AuthorizationStatus::Authorized)
    }

    /// A store that has never prompted; `grant_on_prompt` scripts the user's
    /// one-time decision.
    pub fn undetermined(grant_on_prompt: bool) -> Self {
        let store = Self::with_status(AuthorizationStatus::NotDetermined);
        store.lock().grant_on_prompt = grant_on_prompt;
        store
    }

    pub fn add_calendar(&self, id: &str, title: &str, color: &str) {
        self.lock().calendars.push(Calendar::new(id, title, color));
    }

    pub fn add_read_only_calendar(&self, id: &str, title: &str, color: &str) {
        let mut inner = self.lock();
        inner.calendars.push(Calendar::new(id, title, color));
        inner.read_only.insert(id.to_string());
    }

    /// How many times the consent prompt has been shown.
    pub fn prompt_count(&self) -> u32 {
        self.lock().prompts
    }

    /// Total stored events, for asserting that failed operations mutate
    /// nothing.
    pub fn event_count(&self) -> usize {
        self.lock().events.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::authorized()
    }
}

impl Inner {
    fn ensure_authorized(&self) -> CalendarResult<()> {
        if self.status.is_authorized() {
            Ok(())
        } else {
            Err(CalendarError::AccessDenied)
        }
    }

    /// The calendar a draft targets; empty id means the default calendar
    /// (the first writable one).
    fn target_calendar(&self, id: &str) -> CalendarResult<&Calendar> {
        if id.is_empty() {
            return self
                .calendars
                .iter()
                .find(|c| !self.read_only.contains(&c.id))
                .ok_or_else(|| CalendarError::Failed("no default calendar".to_string()));
        }
        self.calendars
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| CalendarError::Failed(format!("calendar not found: {id}")))
    }
}

impl CalendarStore for MemoryStore {
    fn authorization_status(&self) -> AuthorizationStatus {
        self.lock().status
    }

    fn request_access(&self) -> CalendarResult<()> {
        let mut inner = self.lock();
        match inner.status {
            AuthorizationStatus::Authorized => Ok(()),
            AuthorizationStatus::Denied | AuthorizationStatus::Restricted => {
                // Sink states: the OS will not re-prompt.
                Err(CalendarError::AccessDenied)
            }
            AuthorizationStatus::NotDetermined => {
                inner.prompts += 1;
                if inner.grant_on_prompt {
                    inner.status = AuthorizationStatus::Authorized;
                    Ok(())
                } else {
                    inner.status = AuthorizationStatus::Denied;
                    Err(CalendarError::AccessDenied)
                }
            }
        }
    }

    fn calendars(&self) -> CalendarResult<Vec<Calendar>> {
        let inner = self.lock();
        inner.ensure_authorized()?;
        Ok(inner.calendars.clone())
    }

    fn events_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> CalendarResult<Vec<Event>> {
        let inner = self.lock();
        inner.ensure_authorized()?;
        Ok(inner
            .events
            .iter()
            .filter(|e| e.overlaps(start, end))
            .cloned()
            .collect())
    }

    fn create_event(&self, draft: &NewEvent) -> CalendarResult<String> {
        let mut inner = self.lock();
        inner.ensure_authorized()?;

        let calendar = inner.target_calendar(&draft.calendar_id)?;
        if inner.read_only.contains(&calendar.id) {
            return Err(CalendarError::Failed(format!(
                "calendar is not writable: {}",
                calendar.id
            )));
        }
        let calendar_id = calendar.id.clone();

        let id = format!("evt-{}", inner.next_id);
        inner.next_id += 1;
        inner.events.push(Event {
            id: id.clone(),
            title: draft.title.clone(),
            start: draft.start,
            end: draft.end,
            calendar_id,
            location: draft.location.clone(),
            notes: draft.notes.clone(),
            all_day: draft.all_day,
        });
        Ok(id)
    }

    fn delete_event(&self, event_id: &str) -> CalendarResult<()> {
        let mut inner = self.lock();
        inner.ensure_authorized()?;

        let position = inner.events.iter().position(|e| e.id == event_id);
        match position {
            Some(index) => {
                inner.events.remove(index);
                Ok(())
            }
            None => Err(CalendarError::NotFound),
        }
    }
}
