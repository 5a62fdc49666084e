//! Native calendar store backends and the C ABI surface.
//!
//! On macOS this bridges to the system EventKit store; everywhere else the
//! backend is a stub that reports access as denied, matching how the
//! original integration degrades off-platform. The `ffi` module exports the
//! bridge's C interface (status/request/list/create/delete plus the paired
//! string release) for callers outside Rust.

pub mod ffi;

#[cfg(target_os = "macos")]
mod store;
#[cfg(not(target_os = "macos"))]
mod unsupported;

#[cfg(target_os = "macos")]
pub use store::EventKitStore;
#[cfg(not(target_os = "macos"))]
pub use unsupported::UnsupportedStore;

use ekcal_core::Gateway;

/// The store backend for the current platform.
#[cfg(target_os = "macos")]
pub type NativeStore = EventKitStore;
#[cfg(not(target_os = "macos"))]
pub type NativeStore = UnsupportedStore;

/// A gateway over a freshly constructed platform store.
///
/// Nothing is cached across gateways; each one talks to the OS store
/// directly and queries the authorization state on demand.
pub fn native_gateway() -> Gateway<NativeStore> {
    Gateway::new(NativeStore::new())
}
