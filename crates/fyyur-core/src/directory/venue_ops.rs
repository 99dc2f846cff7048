//! Venue operations for the Directory.

use log::debug;

use super::Directory;
use crate::{
    error::Result,
    models::{
        ListingEntry, NewVenue, ShowPartition, ShowWithArtist, Venue, VenueArea, VenueChanges,
    },
    params::{CreateVenue, Id, Search, UpdateVenue},
};

impl Directory {
    /// Validates and inserts a new venue.
    ///
    /// Missing optional fields get their defaults: `seeking_talent` is true
    /// and `seeking_description` is the standard lookout text.
    pub async fn create_venue(&self, params: &CreateVenue) -> Result<Venue> {
        let venue = NewVenue::try_from(params.clone())?;

        self.with_database(move |db| db.create_venue(&venue)).await
    }

    /// Retrieves a venue by its ID.
    pub async fn get_venue(&self, params: &Id) -> Result<Option<Venue>> {
        let venue_id = params.id;

        self.with_database(move |db| db.get_venue(venue_id)).await
    }

    /// Lists all venues ordered by ID.
    pub async fn list_venues(&self) -> Result<Vec<Venue>> {
        self.with_database(|db| db.list_venues()).await
    }

    /// Groups all venues by city and state with their upcoming show counts.
    pub async fn venue_areas(&self) -> Result<Vec<VenueArea>> {
        let now = self.now();

        self.with_database(move |db| db.venue_areas(now)).await
    }

    /// Case-insensitive partial-name search over venues.
    pub async fn search_venues(&self, params: &Search) -> Result<Vec<ListingEntry>> {
        let term = params.search_term.clone();
        let now = self.now();
        debug!("Searching venues for '{term}'");

        self.with_database(move |db| db.search_venues(&term, now))
            .await
    }

    /// Loads a venue together with its shows split around now.
    ///
    /// Both reads use the same connection so the shows match the venue.
    pub async fn get_venue_with_shows(
        &self,
        params: &Id,
    ) -> Result<Option<(Venue, ShowPartition<ShowWithArtist>)>> {
        let venue_id = params.id;
        let now = self.now();

        self.with_database(move |db| {
            let Some(venue) = db.get_venue(venue_id)? else {
                return Ok(None);
            };
            let shows = db.venue_shows(venue_id, now)?;
            Ok(Some((venue, shows)))
        })
        .await
    }

    /// Counts the shows at a venue starting after now.
    pub async fn count_upcoming_venue_shows(&self, params: &Id) -> Result<u32> {
        let venue_id = params.id;
        let now = self.now();

        self.with_database(move |db| db.count_upcoming_venue_shows(venue_id, now))
            .await
    }

    /// Overwrites the editable fields of a venue.
    ///
    /// Fields missing from `params` are cleared. Returns the venue as it was
    /// before and after the update, or None if the venue doesn't exist.
    pub async fn update_venue(&self, params: &UpdateVenue) -> Result<Option<(Venue, Venue)>> {
        let venue_id = params.id;
        let changes = VenueChanges::try_from(params.clone())?;

        self.with_database(move |db| {
            let Some(before) = db.get_venue(venue_id)? else {
                return Ok(None);
            };
            let after = db.update_venue(venue_id, &changes)?;
            Ok(after.map(|after| (before, after)))
        })
        .await
    }

    /// Deletes a venue and its shows.
    ///
    /// Returns true when a venue was removed.
    pub async fn delete_venue(&self, params: &Id) -> Result<bool> {
        let venue_id = params.id;

        self.with_database(move |db| db.delete_venue(venue_id)).await
    }
}
