//! Core types for the ekcal calendar bridge.
//!
//! This crate provides everything shared between the native backends and the
//! CLI:
//! - `Calendar`, `Event` and `NewEvent`, the flat records crossing the boundary
//! - `AuthorizationStatus` and the error taxonomy / result codes
//! - the `CalendarStore` trait (the seam over a concrete calendar store)
//! - `Gateway`, which enforces the authorization gate in front of any store

pub mod auth;
pub mod calendar;
pub mod error;
pub mod event;
pub mod gateway;
pub mod store;

pub use auth::AuthorizationStatus;
pub use calendar::Calendar;
pub use error::{CalendarError, CalendarResult, ResultCode};
pub use event::{Event, NewEvent};
pub use gateway::Gateway;
pub use store::CalendarStore;
pub use store::memory::MemoryStore;
