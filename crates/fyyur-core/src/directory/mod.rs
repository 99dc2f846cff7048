//! High-level async API for the booking directory.
//!
//! [`Directory`] is the entry point the CLI and MCP server use. It owns the
//! database path and the clock, and turns every call into one unit of work:
//! a fresh [`Database`] handle is opened on the blocking thread pool, the
//! queries run, and the handle is dropped.
//!
//! ```text
//! ┌──────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Handlers     │    │   Operations    │    │    Database     │
//! │ (venue_handlers, │───▶│ (venue_ops,     │───▶│   (via db/)     │
//! │  artist_...,     │    │  artist_ops,    │    │                 │
//! │  show_...)       │    │  show_ops)      │    │                 │
//! └──────────────────┘    └─────────────────┘    └─────────────────┘
//!   View models            Entities               Data Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Directory`] instances
//! - [`venue_ops`], [`artist_ops`], [`show_ops`]: entity-level operations
//!   returning models and `Option` for missing rows
//! - [`venue_handlers`], [`artist_handlers`], [`show_handlers`]: one method per
//!   route, returning view models from [`crate::display`] and turning missing
//!   rows into [`DirectoryError::NotFound`]
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use fyyur_core::{params::Search, DirectoryBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let directory = DirectoryBuilder::new()
//!     .with_database_path(Some("/tmp/fyyur.db"))
//!     .build()
//!     .await?;
//!
//! let results = directory
//!     .search_venues_result(&Search {
//!         search_term: "hop".to_string(),
//!     })
//!     .await?;
//! println!("{results}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use jiff::Timestamp;
use tokio::task;

use crate::{
    db::Database,
    error::{DirectoryError, Result},
};

pub mod artist_handlers;
pub mod artist_ops;
pub mod builder;
pub mod show_handlers;
pub mod show_ops;
pub mod venue_handlers;
pub mod venue_ops;


pub use builder::DirectoryBuilder;

/// Main interface for managing venues, artists and shows.
#[derive(Debug, Clone)]
pub struct Directory {
    pub(crate) db_path: PathBuf,
    fixed_now: Option<Timestamp>,
}

impl Directory {
    pub(crate) fn new(db_path: PathBuf, fixed_now: Option<Timestamp>) -> Self {
        Self { db_path, fixed_now }
    }

    /// Path of the SQLite file this directory works on.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// The reference instant for upcoming/past decisions.
    ///
    /// Read once per operation so a single result never mixes two instants.
    pub fn now(&self) -> Timestamp {
        self.fixed_now.unwrap_or_else(Timestamp::now)
    }

    /// Runs one unit of work against a fresh connection on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, work: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            work(&mut db)
        })
        .await
        .map_err(|e| DirectoryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
