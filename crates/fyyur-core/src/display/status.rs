//! Status and flash message types for operation feedback.

use std::fmt;

use serde::Serialize;

/// A one-line confirmation or failure message.
///
/// The constructors named after an operation produce the exact flash text
/// shown after a listing attempt. Failure messages stay generic whatever the
/// underlying error kind was.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }

    pub fn venue_listed(name: &str) -> Self {
        Self::success(format!("Venue {name} was successfully listed!"))
    }

    pub fn venue_not_listed(name: &str) -> Self {
        Self::failure(format!("An error occurred. Venue {name} could not be listed."))
    }

    pub fn artist_listed(name: &str) -> Self {
        Self::success(format!("Artist {name} was successfully listed!"))
    }

    pub fn artist_not_listed(name: &str) -> Self {
        Self::failure(format!("An error occurred. Artist {name} could not be listed."))
    }

    pub fn show_listed() -> Self {
        Self::success("Show was successfully listed!".to_string())
    }

    pub fn show_not_listed() -> Self {
        Self::failure("An error occurred. Show could not be listed.".to_string())
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}
