//! C ABI surface of the bridge.
//!
//! Exports the original symbol set: authorization status/request, calendar
//! and event listing as JSON, event creation and deletion, and `FreeString`
//! as the paired release for every string the bridge hands out. Returned
//! strings are freshly allocated, independently owned NUL-terminated
//! buffers; the caller must release each exactly once via `FreeString`.
//!
//! Result codes: 0 success, 1 access denied, 2 not found, 3 failed.
//! Status codes: 0 not determined, 1 restricted, 2 denied, 3 authorized.
//!
//! Each entry point constructs a fresh gateway over the platform store, so
//! no state (not even the authorization answer) is shared between calls.

// The exported symbols keep the original header's names.
#![allow(non_snake_case)]

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int, c_longlong};

use chrono::{DateTime, Utc};

use ekcal_core::{CalendarStore, Gateway, NewEvent, ResultCode, error::result_code};

use crate::native_gateway;

/// Check the current authorization status without prompting.
#[no_mangle]
pub extern "C" fn GetAuthorizationStatus() -> c_int {
    native_gateway().authorization_status().code()
}

/// Request calendar access, blocking on the consent dialog if the state is
/// still undetermined. Returns 0 if granted, 1 otherwise.
#[no_mangle]
pub extern "C" fn RequestCalendarAccess() -> c_int {
    match native_gateway().request_access() {
        Ok(()) => ResultCode::Success.code(),
        Err(_) => ResultCode::AccessDenied.code(),
    }
}

/// List all calendars as a JSON array. NULL on failure; the caller frees the
/// returned string with `FreeString`.
#[no_mangle]
pub extern "C" fn ListCalendars() -> *mut c_char {
    owned_or_null(list_calendars_json(&native_gateway()))
}

/// List events between two Unix timestamps (seconds) as a JSON array. NULL
/// on failure; the caller frees the returned string with `FreeString`.
#[no_mangle]
pub extern "C" fn ListEvents(start: c_longlong, end: c_longlong) -> *mut c_char {
    owned_or_null(list_events_json(&native_gateway(), start, end))
}

/// Create an event and return its store-assigned id. NULL on failure; the
/// caller frees the returned string with `FreeString`.
///
/// # Safety
///
/// String arguments must be NULL or valid NUL-terminated C strings.
#[no_mangle]
pub unsafe extern "C" fn CreateEvent(
    title: *const c_char,
    start: c_longlong,
    end: c_longlong,
    calendar_id: *const c_char,
    location: *const c_char,
    notes: *const c_char,
    all_day: c_int,
) -> *mut c_char {
    // A missing title or calendar id is caller error; optional fields fall
    // back to empty.
    let Some(title) = cstr_arg(title) else {
        return std::ptr::null_mut();
    };
    let Some(calendar_id) = cstr_arg(calendar_id) else {
        return std::ptr::null_mut();
    };
    let location = cstr_arg(location).unwrap_or("");
    let notes = cstr_arg(notes).unwrap_or("");

    let draft = NewEvent {
        title: title.to_string(),
        start: timestamp(start),
        end: timestamp(end),
        calendar_id: calendar_id.to_string(),
        location: location.to_string(),
        notes: notes.to_string(),
        all_day: all_day != 0,
    };
    owned_or_null(native_gateway().create_event(&draft).ok())
}

/// Delete an event by id, returning a result code.
///
/// # Safety
///
/// `event_id` must be NULL or a valid NUL-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn DeleteEvent(event_id: *const c_char) -> c_int {
    let Some(event_id) = cstr_arg(event_id) else {
        return ResultCode::NotFound.code();
    };
    result_code(&native_gateway().delete_event(event_id)).code()
}

/// Release a string previously returned by this bridge. NULL is a no-op;
/// releasing any other pointer, or the same string twice, is undefined.
///
/// # Safety
///
/// `ptr` must be NULL or a pointer obtained from this bridge that has not
/// been freed yet.
#[no_mangle]
pub unsafe extern "C" fn FreeString(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

// =============================================================================
// Platform-neutral internals (exercised against any store in tests)
// =============================================================================

fn list_calendars_json<S: CalendarStore>(gateway: &Gateway<S>) -> Option<String> {
    let calendars = gateway.list_calendars().ok()?;
    serde_json::to_string(&calendars).ok()
}

fn list_events_json<S: CalendarStore>(
    gateway: &Gateway<S>,
    start: c_longlong,
    end: c_longlong,
) -> Option<String> {
    let events = gateway.list_events(timestamp(start), timestamp(end)).ok()?;
    serde_json::to_string(&events).ok()
}

fn timestamp(seconds: c_longlong) -> DateTime<Utc> {
    // Out-of-range inputs clamp to the epoch rather than wrapping.
    DateTime::from_timestamp(seconds, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

/// Transfer ownership of a string to the caller.
fn owned_or_null(value: Option<String>) -> *mut c_char {
    // JSON and store identifiers never contain NUL, but a hostile store
    // title could; such a string cannot cross a C boundary.
    match value.and_then(|s| CString::new(s).ok()) {
        Some(owned) => owned.into_raw(),
        None => std::ptr::null_mut(),
    }
}

unsafe fn cstr_arg<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}
