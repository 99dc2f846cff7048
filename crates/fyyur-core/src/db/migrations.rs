//! Database schema initialization and migrations.

use log::info;

use crate::error::{DatabaseResultExt, Result};

/// Profile columns added after the first release, with their column
/// definitions. Older databases get them on open.
const PROFILE_COLUMNS: &[(&str, &str, &str)] = &[
    ("venues", "website", "TEXT"),
    ("venues", "seeking_talent", "INTEGER NOT NULL DEFAULT 1"),
    (
        "venues",
        "seeking_description",
        "TEXT NOT NULL DEFAULT 'We are on the lookout for a local artist to play every two weeks. Please call us.'",
    ),
    ("artists", "website", "TEXT"),
    ("artists", "seeking_venue", "INTEGER"),
    ("artists", "seeking_description", "TEXT"),
];

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Foreign keys are off by default in SQLite, per connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        for (table, column, definition) in PROFILE_COLUMNS {
            if self.has_column(table, column)? {
                continue;
            }

            info!("Adding column {column} to {table}");
            self.connection
                .execute(
                    &format!("ALTER TABLE {table} ADD COLUMN {column} {definition}"),
                    [],
                )
                .db_context(&format!("Failed to add {column} column to {table} table"))?;
        }

        Ok(())
    }

    fn has_column(&self, table: &str, column: &str) -> Result<bool> {
        self.connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
                [table, column],
                |row| row.get::<_, i64>(0),
            )
            .map(|count| count > 0)
            .db_context("Failed to inspect table columns")
    }
}
