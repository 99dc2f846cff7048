//! Venue CRUD operations, search and venue-side show queries.

use std::collections::BTreeMap;

use jiff::Timestamp;
use log::{debug, warn};
use rusqlite::{params, OptionalExtension};

use super::utils::{
    count_from_row, decode_genres, encode_genres, id_from_row, name_matches, timestamp_from_row,
    timestamp_to_column,
};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{
        ListingEntry, NewVenue, ShowPartition, ShowWithArtist, Venue, VenueArea, VenueChanges,
    },
};

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, image_link, facebook_link, genres, website, seeking_talent, seeking_description";
const INSERT_VENUE_SQL: &str = "INSERT INTO venues (name, city, state, address, phone, image_link, facebook_link, genres, website, seeking_talent, seeking_description) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";
const UPDATE_VENUE_SQL: &str = "UPDATE venues SET name = ?1, city = ?2, state = ?3, address = ?4, phone = ?5, genres = ?6, facebook_link = ?7 WHERE id = ?8";
const DELETE_VENUE_SQL: &str = "DELETE FROM venues WHERE id = ?1";
const VENUE_ENTRIES_SQL: &str = "SELECT v.id, v.name, v.city, v.state, (SELECT COUNT(*) FROM shows s WHERE s.venue_id = v.id AND s.start_time > ?1) FROM venues v ORDER BY v.id";
const COUNT_UPCOMING_VENUE_SHOWS_SQL: &str =
    "SELECT COUNT(*) FROM shows WHERE venue_id = ?1 AND start_time > ?2";
const SELECT_VENUE_SHOWS_SQL: &str = "SELECT a.id, a.name, a.image_link, s.start_time FROM shows s JOIN artists a ON a.id = s.artist_id WHERE s.venue_id = ?1 ORDER BY s.start_time, s.id";

impl super::Database {
    /// Helper function to construct a Venue from a database row
    fn build_venue_from_row(row: &rusqlite::Row) -> rusqlite::Result<Venue> {
        let genres: String = row.get(8)?;

        Ok(Venue {
            id: id_from_row(row, 0)?,
            name: row.get(1)?,
            city: row.get(2)?,
            state: row.get(3)?,
            address: row.get(4)?,
            phone: row.get(5)?,
            image_link: row.get(6)?,
            facebook_link: row.get(7)?,
            genres: decode_genres(&genres),
            website: row.get(9)?,
            seeking_talent: row.get(10)?,
            seeking_description: row.get(11)?,
        })
    }

    /// Inserts a new venue. The insert is rolled back if anything fails.
    pub fn create_venue(&mut self, venue: &NewVenue) -> Result<Venue> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_VENUE_SQL,
            params![
                venue.name,
                venue.city,
                venue.state,
                venue.address,
                venue.phone,
                venue.image_link,
                venue.facebook_link,
                encode_genres(&venue.genres),
                venue.website,
                venue.seeking_talent,
                venue.seeking_description,
            ],
        )
        .inspect_err(|e| warn!("Rolling back insert of venue '{}': {e}", venue.name))
        .db_context("Failed to insert venue")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Created venue {id}");

        Ok(Venue {
            id,
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            image_link: venue.image_link.clone(),
            facebook_link: venue.facebook_link.clone(),
            genres: venue.genres.clone(),
            website: venue.website.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone(),
        })
    }

    /// Retrieves a venue by its ID.
    pub fn get_venue(&self, id: u64) -> Result<Option<Venue>> {
        self.connection
            .query_row(
                &format!("SELECT {VENUE_COLUMNS} FROM venues WHERE id = ?1"),
                params![id as i64],
                Self::build_venue_from_row,
            )
            .optional()
            .db_context("Failed to query venue")
    }

    /// Lists every venue, ordered by ID.
    pub fn list_venues(&self) -> Result<Vec<Venue>> {
        let mut stmt = self
            .connection
            .prepare(&format!("SELECT {VENUE_COLUMNS} FROM venues ORDER BY id"))
            .db_context("Failed to prepare query")?;

        let venues = stmt
            .query_map([], Self::build_venue_from_row)
            .db_context("Failed to query venues")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch venues")?;

        Ok(venues)
    }

    /// Overwrites the editable fields of a venue.
    ///
    /// Returns the updated venue, or None if the venue doesn't exist.
    pub fn update_venue(&mut self, id: u64, changes: &VenueChanges) -> Result<Option<Venue>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let rows_affected = tx
            .execute(
                UPDATE_VENUE_SQL,
                params![
                    changes.name,
                    changes.city,
                    changes.state,
                    changes.address,
                    changes.phone,
                    encode_genres(&changes.genres),
                    changes.facebook_link,
                    id as i64
                ],
            )
            .inspect_err(|e| warn!("Rolling back update of venue {id}: {e}"))
            .db_context("Failed to update venue")?;

        if rows_affected == 0 {
            return Ok(None);
        }

        let venue = tx
            .query_row(
                &format!("SELECT {VENUE_COLUMNS} FROM venues WHERE id = ?1"),
                params![id as i64],
                Self::build_venue_from_row,
            )
            .optional()
            .db_context("Failed to query updated venue")?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Updated venue {id}");

        Ok(venue)
    }

    /// Deletes a venue and, through the foreign key cascade, its shows.
    ///
    /// Returns false when no venue has the given ID.
    pub fn delete_venue(&mut self, id: u64) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let rows_affected = tx
            .execute(DELETE_VENUE_SQL, params![id as i64])
            .inspect_err(|e| warn!("Rolling back delete of venue {id}: {e}"))
            .db_context("Failed to delete venue")?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Deleted {rows_affected} venue row(s) for ID {id}");

        Ok(rows_affected > 0)
    }

    /// Fetches every venue as a listing entry together with its city and
    /// state.
    fn venue_entries(&self, now: Timestamp) -> Result<Vec<(ListingEntry, String, String)>> {
        let mut stmt = self
            .connection
            .prepare(VENUE_ENTRIES_SQL)
            .db_context("Failed to prepare query")?;

        let entries = stmt
            .query_map(params![timestamp_to_column(now)], |row| {
                let entry = ListingEntry {
                    id: id_from_row(row, 0)?,
                    name: row.get(1)?,
                    num_upcoming_shows: count_from_row(row, 4)?,
                };
                Ok((entry, row.get(2)?, row.get(3)?))
            })
            .db_context("Failed to query venues")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch venues")?;

        Ok(entries)
    }

    /// Groups all venues by city and state.
    ///
    /// Areas are sorted by city, then state; venues within an area by ID.
    pub fn venue_areas(&self, now: Timestamp) -> Result<Vec<VenueArea>> {
        let mut areas: BTreeMap<(String, String), Vec<ListingEntry>> = BTreeMap::new();
        for (entry, city, state) in self.venue_entries(now)? {
            areas.entry((city, state)).or_default().push(entry);
        }

        Ok(areas
            .into_iter()
            .map(|((city, state), venues)| VenueArea {
                city,
                state,
                venues,
            })
            .collect())
    }

    /// Finds venues whose name contains the term, ignoring case.
    ///
    /// Results are ordered by ID and carry their upcoming show count.
    pub fn search_venues(&self, term: &str, now: Timestamp) -> Result<Vec<ListingEntry>> {
        Ok(self
            .venue_entries(now)?
            .into_iter()
            .map(|(entry, _, _)| entry)
            .filter(|entry| name_matches(&entry.name, term))
            .collect())
    }

    /// Counts the shows at a venue starting strictly after `now`.
    pub fn count_upcoming_venue_shows(&self, id: u64, now: Timestamp) -> Result<u32> {
        self.connection
            .query_row(
                COUNT_UPCOMING_VENUE_SHOWS_SQL,
                params![id as i64, timestamp_to_column(now)],
                |row| count_from_row(row, 0),
            )
            .db_context("Failed to count upcoming shows")
    }

    /// Loads every show at a venue, resolved to the current artist record,
    /// and splits them around `now`.
    pub fn venue_shows(&self, id: u64, now: Timestamp) -> Result<ShowPartition<ShowWithArtist>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_VENUE_SHOWS_SQL)
            .db_context("Failed to prepare query")?;

        let shows = stmt
            .query_map(params![id as i64], |row| {
                Ok(ShowWithArtist {
                    artist_id: id_from_row(row, 0)?,
                    artist_name: row.get(1)?,
                    artist_image_link: row.get(2)?,
                    start_time: timestamp_from_row(row, 3)?,
                })
            })
            .db_context("Failed to query venue shows")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch venue shows")?;

        Ok(ShowPartition::split(shows, now))
    }
}
