//! Artist CRUD operations, search and artist-side show queries.
//!
//! Artists have no delete operation.

use jiff::Timestamp;
use log::{debug, warn};
use rusqlite::{params, OptionalExtension};

use super::utils::{
    count_from_row, decode_genres, encode_genres, id_from_row, name_matches, timestamp_from_row,
    timestamp_to_column,
};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Artist, ArtistChanges, ListingEntry, NewArtist, ShowAtVenue, ShowPartition},
};

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, image_link, facebook_link, website, seeking_venue, seeking_description";
const INSERT_ARTIST_SQL: &str = "INSERT INTO artists (name, city, state, phone, genres, image_link, facebook_link, website, seeking_venue, seeking_description) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const UPDATE_ARTIST_SQL: &str = "UPDATE artists SET name = ?1, city = ?2, state = ?3, phone = ?4, genres = ?5, facebook_link = ?6 WHERE id = ?7";
const ARTIST_ENTRIES_SQL: &str = "SELECT a.id, a.name, (SELECT COUNT(*) FROM shows s WHERE s.artist_id = a.id AND s.start_time > ?1) FROM artists a ORDER BY a.id";
const COUNT_UPCOMING_ARTIST_SHOWS_SQL: &str =
    "SELECT COUNT(*) FROM shows WHERE artist_id = ?1 AND start_time > ?2";
const SELECT_ARTIST_SHOWS_SQL: &str = "SELECT v.id, v.name, v.image_link, s.start_time FROM shows s JOIN venues v ON v.id = s.venue_id WHERE s.artist_id = ?1 ORDER BY s.start_time, s.id";

impl super::Database {
    /// Helper function to construct an Artist from a database row
    fn build_artist_from_row(row: &rusqlite::Row) -> rusqlite::Result<Artist> {
        let genres: String = row.get(5)?;

        Ok(Artist {
            id: id_from_row(row, 0)?,
            name: row.get(1)?,
            city: row.get(2)?,
            state: row.get(3)?,
            phone: row.get(4)?,
            genres: decode_genres(&genres),
            image_link: row.get(6)?,
            facebook_link: row.get(7)?,
            website: row.get(8)?,
            seeking_venue: row.get(9)?,
            seeking_description: row.get(10)?,
        })
    }

    /// Inserts a new artist. The insert is rolled back if anything fails.
    pub fn create_artist(&mut self, artist: &NewArtist) -> Result<Artist> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_ARTIST_SQL,
            params![
                artist.name,
                artist.city,
                artist.state,
                artist.phone,
                encode_genres(&artist.genres),
                artist.image_link,
                artist.facebook_link,
                artist.website,
                artist.seeking_venue,
                artist.seeking_description,
            ],
        )
        .inspect_err(|e| warn!("Rolling back insert of artist '{}': {e}", artist.name))
        .db_context("Failed to insert artist")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Created artist {id}");

        Ok(Artist {
            id,
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            genres: artist.genres.clone(),
            image_link: artist.image_link.clone(),
            facebook_link: artist.facebook_link.clone(),
            website: artist.website.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone(),
        })
    }

    /// Retrieves an artist by its ID.
    pub fn get_artist(&self, id: u64) -> Result<Option<Artist>> {
        self.connection
            .query_row(
                &format!("SELECT {ARTIST_COLUMNS} FROM artists WHERE id = ?1"),
                params![id as i64],
                Self::build_artist_from_row,
            )
            .optional()
            .db_context("Failed to query artist")
    }

    /// Lists every artist, ordered by ID.
    pub fn list_artists(&self) -> Result<Vec<Artist>> {
        let mut stmt = self
            .connection
            .prepare(&format!("SELECT {ARTIST_COLUMNS} FROM artists ORDER BY id"))
            .db_context("Failed to prepare query")?;

        let artists = stmt
            .query_map([], Self::build_artist_from_row)
            .db_context("Failed to query artists")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch artists")?;

        Ok(artists)
    }

    /// Overwrites the editable fields of an artist.
    ///
    /// Returns the updated artist, or None if the artist doesn't exist.
    pub fn update_artist(&mut self, id: u64, changes: &ArtistChanges) -> Result<Option<Artist>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let rows_affected = tx
            .execute(
                UPDATE_ARTIST_SQL,
                params![
                    changes.name,
                    changes.city,
                    changes.state,
                    changes.phone,
                    encode_genres(&changes.genres),
                    changes.facebook_link,
                    id as i64
                ],
            )
            .inspect_err(|e| warn!("Rolling back update of artist {id}: {e}"))
            .db_context("Failed to update artist")?;

        if rows_affected == 0 {
            return Ok(None);
        }

        let artist = tx
            .query_row(
                &format!("SELECT {ARTIST_COLUMNS} FROM artists WHERE id = ?1"),
                params![id as i64],
                Self::build_artist_from_row,
            )
            .optional()
            .db_context("Failed to query updated artist")?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Updated artist {id}");

        Ok(artist)
    }

    /// Finds artists whose name contains the term, ignoring case.
    ///
    /// Results are ordered by ID and carry their upcoming show count.
    pub fn search_artists(&self, term: &str, now: Timestamp) -> Result<Vec<ListingEntry>> {
        let mut stmt = self
            .connection
            .prepare(ARTIST_ENTRIES_SQL)
            .db_context("Failed to prepare query")?;

        let entries = stmt
            .query_map(params![timestamp_to_column(now)], |row| {
                Ok(ListingEntry {
                    id: id_from_row(row, 0)?,
                    name: row.get(1)?,
                    num_upcoming_shows: count_from_row(row, 2)?,
                })
            })
            .db_context("Failed to query artists")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch artists")?;

        Ok(entries
            .into_iter()
            .filter(|entry| name_matches(&entry.name, term))
            .collect())
    }

    /// Counts the shows of an artist starting strictly after `now`.
    pub fn count_upcoming_artist_shows(&self, id: u64, now: Timestamp) -> Result<u32> {
        self.connection
            .query_row(
                COUNT_UPCOMING_ARTIST_SHOWS_SQL,
                params![id as i64, timestamp_to_column(now)],
                |row| count_from_row(row, 0),
            )
            .db_context("Failed to count upcoming shows")
    }

    /// Loads every show of an artist, resolved to the current venue record,
    /// and splits them around `now`.
    pub fn artist_shows(&self, id: u64, now: Timestamp) -> Result<ShowPartition<ShowAtVenue>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ARTIST_SHOWS_SQL)
            .db_context("Failed to prepare query")?;

        let shows = stmt
            .query_map(params![id as i64], |row| {
                Ok(ShowAtVenue {
                    venue_id: id_from_row(row, 0)?,
                    venue_name: row.get(1)?,
                    venue_image_link: row.get(2)?,
                    start_time: timestamp_from_row(row, 3)?,
                })
            })
            .db_context("Failed to query artist shows")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch artist shows")?;

        Ok(ShowPartition::split(shows, now))
    }
}
