//! Venue handlers that return view models for the Directory.

use super::Directory;
use crate::{
    display::{
        models::genre_line, results::describe_change, CreateResult, DeleteResult, SearchResults,
        UpdateResult, VenueAreas, VenueDetail, VenueForm,
    },
    error::{DirectoryError, Result},
    models::{EntityKind, Venue},
    params::{CreateVenue, Id, Search, UpdateVenue},
};

/// Lists the editable fields that differ between two versions of a venue.
fn venue_changes(before: &Venue, after: &Venue) -> Vec<String> {
    [
        describe_change("name", &before.name, &after.name),
        describe_change("city", &before.city, &after.city),
        describe_change("state", &before.state, &after.state),
        describe_change("address", &before.address, &after.address),
        describe_change(
            "phone",
            before.phone.as_deref().unwrap_or_default(),
            after.phone.as_deref().unwrap_or_default(),
        ),
        describe_change(
            "genres",
            &genre_line(&before.genres),
            &genre_line(&after.genres),
        ),
        describe_change(
            "facebook_link",
            before.facebook_link.as_deref().unwrap_or_default(),
            after.facebook_link.as_deref().unwrap_or_default(),
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

impl Directory {
    /// Handle listing venues grouped by city and state.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use fyyur_core::DirectoryBuilder;
    /// # async {
    /// let directory = DirectoryBuilder::new().build().await?;
    /// let areas = directory.list_venue_areas().await?;
    /// for area in &areas {
    ///     println!("{}, {}: {} venues", area.city, area.state, area.venues.len());
    /// }
    /// # Result::<(), fyyur_core::DirectoryError>::Ok(())
    /// # };
    /// ```
    pub async fn list_venue_areas(&self) -> Result<VenueAreas> {
        Ok(VenueAreas(self.venue_areas().await?))
    }

    /// Handle a venue search.
    ///
    /// # Returns
    ///
    /// The matching venues ordered by ID, their count, and the term searched
    /// for. The empty term matches every venue.
    pub async fn search_venues_result(&self, params: &Search) -> Result<SearchResults> {
        let data = self.search_venues(params).await?;
        Ok(SearchResults::new(params.search_term.clone(), data))
    }

    /// Handle showing a venue page.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` if no venue has the given ID.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use fyyur_core::{params::Id, DirectoryBuilder};
    /// # async {
    /// let directory = DirectoryBuilder::new().build().await?;
    /// let venue = directory.show_venue_detail(&Id { id: 1 }).await?;
    /// println!("{} upcoming shows", venue.upcoming_shows_count);
    /// # Result::<(), fyyur_core::DirectoryError>::Ok(())
    /// # };
    /// ```
    pub async fn show_venue_detail(&self, params: &Id) -> Result<VenueDetail> {
        let (venue, shows) = self
            .get_venue_with_shows(params)
            .await?
            .ok_or_else(|| DirectoryError::not_found(EntityKind::Venue, params.id))?;

        Ok(VenueDetail::new(venue, shows))
    }

    /// Handle loading the edit form of a venue.
    pub async fn venue_form(&self, params: &Id) -> Result<VenueForm> {
        self.get_venue(params)
            .await?
            .map(VenueForm::from)
            .ok_or_else(|| DirectoryError::not_found(EntityKind::Venue, params.id))
    }

    /// Handle listing a new venue.
    ///
    /// On success the result carries the "successfully listed" flash message;
    /// callers render [`crate::display::OperationStatus::venue_not_listed`]
    /// on error.
    pub async fn create_venue_result(&self, params: &CreateVenue) -> Result<CreateResult<Venue>> {
        let venue = self.create_venue(params).await?;
        Ok(CreateResult::new(venue))
    }

    /// Handle editing a venue.
    ///
    /// Every editable field is overwritten and omitted fields are cleared.
    /// The result lists each field that changed.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` if no venue has the given ID.
    pub async fn update_venue_result(&self, params: &UpdateVenue) -> Result<UpdateResult<Venue>> {
        let (before, after) = self
            .update_venue(params)
            .await?
            .ok_or_else(|| DirectoryError::not_found(EntityKind::Venue, params.id))?;

        let changes = venue_changes(&before, &after);
        Ok(UpdateResult::with_changes(after, changes))
    }

    /// Handle deleting a venue with get-before-delete, so the result can name
    /// what was removed.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` if no venue has the given ID.
    pub async fn delete_venue_result(&self, params: &Id) -> Result<DeleteResult<Venue>> {
        let venue = self
            .get_venue(params)
            .await?
            .ok_or_else(|| DirectoryError::not_found(EntityKind::Venue, params.id))?;

        if !self.delete_venue(params).await? {
            return Err(DirectoryError::not_found(EntityKind::Venue, params.id));
        }

        Ok(DeleteResult::new(venue))
    }
}
