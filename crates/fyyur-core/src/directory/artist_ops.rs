//! Artist operations for the Directory.

use log::debug;

use super::Directory;
use crate::{
    error::Result,
    models::{Artist, ArtistChanges, ListingEntry, NewArtist, ShowAtVenue, ShowPartition},
    params::{CreateArtist, Id, Search, UpdateArtist},
};

impl Directory {
    /// Validates and inserts a new artist.
    pub async fn create_artist(&self, params: &CreateArtist) -> Result<Artist> {
        let artist = NewArtist::try_from(params.clone())?;

        self.with_database(move |db| db.create_artist(&artist)).await
    }

    /// Retrieves an artist by its ID.
    pub async fn get_artist(&self, params: &Id) -> Result<Option<Artist>> {
        let artist_id = params.id;

        self.with_database(move |db| db.get_artist(artist_id)).await
    }

    /// Lists all artists ordered by ID.
    pub async fn list_artists(&self) -> Result<Vec<Artist>> {
        self.with_database(|db| db.list_artists()).await
    }

    /// Case-insensitive partial-name search over artists.
    pub async fn search_artists(&self, params: &Search) -> Result<Vec<ListingEntry>> {
        let term = params.search_term.clone();
        let now = self.now();
        debug!("Searching artists for '{term}'");

        self.with_database(move |db| db.search_artists(&term, now))
            .await
    }

    /// Loads an artist together with its shows split around now.
    pub async fn get_artist_with_shows(
        &self,
        params: &Id,
    ) -> Result<Option<(Artist, ShowPartition<ShowAtVenue>)>> {
        let artist_id = params.id;
        let now = self.now();

        self.with_database(move |db| {
            let Some(artist) = db.get_artist(artist_id)? else {
                return Ok(None);
            };
            let shows = db.artist_shows(artist_id, now)?;
            Ok(Some((artist, shows)))
        })
        .await
    }

    /// Counts the shows of an artist starting after now.
    pub async fn count_upcoming_artist_shows(&self, params: &Id) -> Result<u32> {
        let artist_id = params.id;
        let now = self.now();

        self.with_database(move |db| db.count_upcoming_artist_shows(artist_id, now))
            .await
    }

    /// Overwrites the editable fields of an artist.
    ///
    /// Same clearing rule as [`Directory::update_venue`].
    pub async fn update_artist(&self, params: &UpdateArtist) -> Result<Option<(Artist, Artist)>> {
        let artist_id = params.id;
        let changes = ArtistChanges::try_from(params.clone())?;

        self.with_database(move |db| {
            let Some(before) = db.get_artist(artist_id)? else {
                return Ok(None);
            };
            let after = db.update_artist(artist_id, &changes)?;
            Ok(after.map(|after| (before, after)))
        })
        .await
    }
}
