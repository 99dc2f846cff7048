//! Result wrapper types for displaying operation outcomes.
//!
//! Creation results lead with the flash message for the listing; updates list
//! which editable fields changed or were cleared; deletions confirm what was
//! removed.

use std::fmt;

use serde::Serialize;

use super::status::OperationStatus;
use crate::models::{Artist, Show, Venue};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use fyyur_core::{display::CreateResult, models::Show};
///
/// let show = Show {
///     id: 1,
///     venue_id: 1,
///     artist_id: 4,
///     start_time: "2019-05-21T21:30:00Z".parse().unwrap(),
/// };
///
/// let result = CreateResult::new(show);
/// assert!(result.to_string().starts_with("Success: Show was successfully listed!"));
/// ```
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl CreateResult<Venue> {
    pub fn status(&self) -> OperationStatus {
        OperationStatus::venue_listed(&self.resource.name)
    }
}

impl CreateResult<Artist> {
    pub fn status(&self) -> OperationStatus {
        OperationStatus::artist_listed(&self.resource.name)
    }
}

impl CreateResult<Show> {
    pub fn status(&self) -> OperationStatus {
        OperationStatus::show_listed()
    }
}

impl fmt::Display for CreateResult<Venue> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Artist> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Show> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// `changes` lists one line per editable field whose value differs from the
/// record before the update.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

/// Describes how one editable field moved between two versions of a record.
pub(crate) fn describe_change(label: &str, before: &str, after: &str) -> Option<String> {
    if before == after {
        None
    } else if after.is_empty() {
        Some(format!("Cleared {label}"))
    } else {
        Some(format!("Changed {label}"))
    }
}

fn write_changes(f: &mut fmt::Formatter<'_>, changes: &[String]) -> fmt::Result {
    if changes.is_empty() {
        writeln!(f)?;
        writeln!(f, "No fields changed.")?;
    } else {
        writeln!(f)?;
        writeln!(f, "Changes made:")?;
        for change in changes {
            writeln!(f, "- {change}")?;
        }
    }
    Ok(())
}

impl fmt::Display for UpdateResult<Venue> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated venue with ID: {}", self.resource.id)?;
        write_changes(f, &self.changes)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<Artist> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated artist with ID: {}", self.resource.id)?;
        write_changes(f, &self.changes)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Venue> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted venue '{}' (ID: {}) and its shows",
            self.resource.name, self.resource.id
        )
    }
}
