//! Builder for creating and configuring Directory instances.

use std::path::{Path, PathBuf};

use jiff::Timestamp;
use log::debug;
use tokio::task;

use super::Directory;
use crate::{
    db::Database,
    error::{DirectoryError, Result},
};

/// Builder for creating and configuring Directory instances.
#[derive(Debug, Clone)]
pub struct DirectoryBuilder {
    database_path: Option<PathBuf>,
    fixed_now: Option<Timestamp>,
}

impl DirectoryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            fixed_now: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/fyyur/fyyur.db` or `~/.local/share/fyyur/fyyur.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Pins the clock used for upcoming show counts and the past/upcoming
    /// split. Without it every operation reads the system clock.
    pub fn with_fixed_time(mut self, now: Timestamp) -> Self {
        self.fixed_now = Some(now);
        self
    }

    /// Builds the configured directory instance.
    ///
    /// The database file and its parent directory are created if missing,
    /// and the schema is brought up to date.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::FileSystem` if the parent directory can't be
    /// created, `DirectoryError::XdgDirectory` if no default path can be
    /// determined, and a store error if the schema can't be initialized.
    pub async fn build(self) -> Result<Directory> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| DirectoryError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), DirectoryError>(())
        })
        .await
        .map_err(|e| DirectoryError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        debug!("Using database at {}", db_path.display());
        Ok(Directory::new(db_path, self.fixed_now))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("fyyur")
            .place_data_file("fyyur.db")
            .map_err(|e| DirectoryError::XdgDirectory(e.to_string()))
    }
}

impl Default for DirectoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
