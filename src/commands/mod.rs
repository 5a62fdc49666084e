pub mod add;
pub mod calendars;
pub mod delete;
pub mod events;
pub mod today;

use anyhow::{Result, bail};
use ekcal_core::{AuthorizationStatus, Gateway};
use ekcal_eventkit::{NativeStore, native_gateway};

/// Open a gateway to the platform store, walking the caller through the
/// authorization gate first.
pub fn open_gateway() -> Result<Gateway<NativeStore>> {
    let gateway = native_gateway();

    match gateway.authorization_status() {
        AuthorizationStatus::Authorized => {}
        AuthorizationStatus::Denied => {
            eprintln!("Calendar access was denied.");
            eprintln!();
            eprintln!("To fix this:");
            eprintln!("  1. Open System Settings > Privacy & Security > Calendars");
            eprintln!("  2. Enable access for your terminal app");
            eprintln!();
            bail!("calendar access denied");
        }
        AuthorizationStatus::Restricted => {
            bail!("calendar access is restricted by system policy");
        }
        AuthorizationStatus::NotDetermined => {
            println!("Requesting calendar access...");
            if gateway.request_access().is_err() {
                eprintln!();
                eprintln!(
                    "Access was not granted. Please try again after enabling calendar access."
                );
                bail!("calendar access denied");
            }
        }
    }

    Ok(gateway)
}
