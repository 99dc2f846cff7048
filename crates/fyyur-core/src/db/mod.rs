//! Database operations and SQLite management for venues, artists and shows.
//!
//! A [`Database`] is the store handle for one unit of work. Each query module
//! adds methods for one table:
//!
//! - [`venue_queries`]: venue CRUD, search, listing and venue-side shows
//! - [`artist_queries`]: artist CRUD, search and artist-side shows
//! - [`show_queries`]: show creation and the global listing
//!
//! Methods that depend on the current time take it as a parameter so callers
//! decide what "now" means.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod artist_queries;
pub mod migrations;
pub mod show_queries;
pub mod utils;
pub mod venue_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
