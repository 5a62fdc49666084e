//! Error taxonomy for the calendar bridge.

use thiserror::Error;

/// Errors surfaced by calendar operations.
///
/// Every native-store failure collapses into one of these kinds; no retries,
/// no finer-grained cause analysis.
#[derive(Error, Debug)]
pub enum CalendarError {
    /// Authorization is not currently granted.
    #[error("calendar access denied")]
    AccessDenied,

    /// The referenced event does not exist (or was already deleted).
    #[error("event not found")]
    NotFound,

    /// Any other underlying store failure, including input the store rejects.
    #[error("calendar operation failed: {0}")]
    Failed(String),

    /// No native calendar store on this platform.
    #[error("calendar integration is only supported on macOS")]
    Unsupported,
}

/// Result type alias for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;

/// Numeric result codes used at the C boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ResultCode {
    Success = 0,
    AccessDenied = 1,
    NotFound = 2,
    Failed = 3,
}

impl ResultCode {
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<&CalendarError> for ResultCode {
    fn from(err: &CalendarError) -> Self {
        match err {
            CalendarError::AccessDenied => ResultCode::AccessDenied,
            CalendarError::NotFound => ResultCode::NotFound,
            // The original non-darwin stub had no C surface; unsupported
            // platforms report the generic failure code.
            CalendarError::Failed(_) | CalendarError::Unsupported => ResultCode::Failed,
        }
    }
}

/// Collapse a result into its C-boundary code.
pub fn result_code<T>(result: &CalendarResult<T>) -> ResultCode {
    match result {
        Ok(_) => ResultCode::Success,
        Err(err) => err.into(),
    }
}
