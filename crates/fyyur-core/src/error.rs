//! Error types for the booking directory.

use std::path::PathBuf;

use rusqlite::ErrorCode;
use thiserror::Error;

use crate::models::EntityKind;

/// Error type for all directory operations.
///
/// Store failures are split into constraint violations and everything else so
/// callers can tell a rejected insert from an unavailable database, even
/// though the user-facing flash message stays the same for both.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// Missing or malformed input
    #[error("Invalid input for field '{field}': {reason}")]
    ValidationFailed { field: String, reason: String },
    /// NOT NULL, FOREIGN KEY or other constraint rejected by SQLite
    #[error("Constraint violation: {message}")]
    ConstraintViolation {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No row with the given ID
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: EntityKind, id: u64 },
    /// Any other database failure
    #[error("Database error: {message}")]
    StoreUnavailable {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration and runtime errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DirectoryError {
    /// Classifies a rusqlite error, attaching the given message.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        if source.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) {
            Self::ConstraintViolation {
                message: message.to_string(),
                source,
            }
        } else {
            Self::StoreUnavailable {
                message: message.to_string(),
                source,
            }
        }
    }

    /// Creates a validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a not-found error.
    pub fn not_found(entity: EntityKind, id: u64) -> Self {
        Self::NotFound { entity, id }
    }

    /// True for the not-found kind, which the outer layers render as a 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for errors caused by the caller's input rather than the store.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::ValidationFailed { .. } | Self::ConstraintViolation { .. } | Self::NotFound { .. }
        )
    }
}

/// Extension trait for mapping rusqlite results with a message.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| DirectoryError::database_error(message, e))
    }
}

/// Result type alias for directory operations
pub type Result<T> = std::result::Result<T, DirectoryError>;
