//! Show creation and the global show listing.

use log::{debug, warn};
use rusqlite::{params, OptionalExtension};

use super::utils::{id_from_row, timestamp_from_row, timestamp_to_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{NewShow, Show, ShowListing},
};

const INSERT_SHOW_SQL: &str =
    "INSERT INTO shows (venue_id, artist_id, start_time) VALUES (?1, ?2, ?3)";
const SELECT_SHOW_SQL: &str =
    "SELECT id, venue_id, artist_id, start_time FROM shows WHERE id = ?1";
const SELECT_SHOW_LISTINGS_SQL: &str = "SELECT v.id, v.name, v.image_link, a.id, a.name, a.image_link, s.start_time FROM shows s JOIN venues v ON v.id = s.venue_id JOIN artists a ON a.id = s.artist_id ORDER BY s.start_time, s.id";

impl super::Database {
    /// Books a show.
    ///
    /// Unknown venue or artist IDs are rejected by the foreign keys and the
    /// insert is rolled back.
    pub fn create_show(&mut self, show: &NewShow) -> Result<Show> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_SHOW_SQL,
            params![
                show.venue_id as i64,
                show.artist_id as i64,
                timestamp_to_column(show.start_time)
            ],
        )
        .inspect_err(|e| {
            warn!(
                "Rolling back insert of show (venue {}, artist {}): {e}",
                show.venue_id, show.artist_id
            )
        })
        .db_context("Failed to insert show")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Created show {id}");

        Ok(Show {
            id,
            venue_id: show.venue_id,
            artist_id: show.artist_id,
            start_time: show.start_time,
        })
    }

    /// Retrieves a show by its ID.
    pub fn get_show(&self, id: u64) -> Result<Option<Show>> {
        self.connection
            .query_row(SELECT_SHOW_SQL, params![id as i64], |row| {
                Ok(Show {
                    id: id_from_row(row, 0)?,
                    venue_id: id_from_row(row, 1)?,
                    artist_id: id_from_row(row, 2)?,
                    start_time: timestamp_from_row(row, 3)?,
                })
            })
            .optional()
            .db_context("Failed to query show")
    }

    /// Lists every show with its venue and artist, ordered by start time.
    pub fn list_shows(&self) -> Result<Vec<ShowListing>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SHOW_LISTINGS_SQL)
            .db_context("Failed to prepare query")?;

        let shows = stmt
            .query_map([], |row| {
                Ok(ShowListing {
                    venue_id: id_from_row(row, 0)?,
                    venue_name: row.get(1)?,
                    venue_image_link: row.get(2)?,
                    artist_id: id_from_row(row, 3)?,
                    artist_name: row.get(4)?,
                    artist_image_link: row.get(5)?,
                    start_time: timestamp_from_row(row, 6)?,
                })
            })
            .db_context("Failed to query shows")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch shows")?;

        Ok(shows)
    }
}
