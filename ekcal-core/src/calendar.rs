//! Calendar records.

use serde::{Deserialize, Serialize};

/// A calendar visible to the authorized identity.
///
/// Read-only from the bridge's perspective; lifecycle is owned by the store.
/// `color` is the calendar's display color as lowercase `#rrggbb` hex in
/// sRGB, or the empty string when the native color cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    pub id: String,
    pub title: String,
    pub color: String,
}

impl Calendar {
    pub fn new(id: &str, title: &str, color: &str) -> Self {
        Calendar {
            id: id.to_string(),
            title: title.to_string(),
            color: color.to_string(),
        }
    }
}
