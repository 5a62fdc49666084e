//! Authorization state for the host calendar store.

use serde::{Deserialize, Serialize};

/// OS-granted calendar permission state.
///
/// The OS tracks this outside the process; it can change at any time through
/// the system settings, so callers should query it fresh rather than cache it.
/// The only transition this system can trigger is `NotDetermined` →
/// `Authorized` or `Denied`, via the one-time consent prompt. `Restricted`
/// and `Denied` are sink states from our side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationStatus {
    NotDetermined,
    Restricted,
    Denied,
    Authorized,
}

impl AuthorizationStatus {
    /// Numeric encoding used at the C boundary.
    pub fn code(self) -> i32 {
        match self {
            AuthorizationStatus::NotDetermined => 0,
            AuthorizationStatus::Restricted => 1,
            AuthorizationStatus::Denied => 2,
            AuthorizationStatus::Authorized => 3,
        }
    }

    /// Decode a native status code.
    ///
    /// A newer OS may report values this build does not know (e.g. write-only
    /// access); those read as `Denied` so the gate fails closed.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => AuthorizationStatus::NotDetermined,
            1 => AuthorizationStatus::Restricted,
            3 => AuthorizationStatus::Authorized,
            _ => AuthorizationStatus::Denied,
        }
    }

    pub fn is_authorized(self) -> bool {
        self == AuthorizationStatus::Authorized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for status in [
            AuthorizationStatus::NotDetermined,
            AuthorizationStatus::Restricted,
            AuthorizationStatus::Denied,
            AuthorizationStatus::Authorized,
        ] {
            assert_eq!(AuthorizationStatus::from_code(status.code()), status);
        }
    }

    #[test]
    fn test_unknown_codes_fail_closed() {
        assert_eq!(
            AuthorizationStatus::from_code(4),
            AuthorizationStatus::Denied
        );
        assert_eq!(
            AuthorizationStatus::from_code(-1),
            AuthorizationStatus::Denied
        );
    }
}
