//! Artist handlers that return view models for the Directory.

use super::Directory;
use crate::{
    display::{
        models::genre_line, results::describe_change, ArtistDetail, ArtistEntries, ArtistForm,
        CreateResult, SearchResults, UpdateResult,
    },
    error::{DirectoryError, Result},
    models::{Artist, EntityKind},
    params::{CreateArtist, Id, Search, UpdateArtist},
};

fn artist_changes(before: &Artist, after: &Artist) -> Vec<String> {
    [
        describe_change("name", &before.name, &after.name),
        describe_change("city", &before.city, &after.city),
        describe_change("state", &before.state, &after.state),
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
    /// Handle listing every artist by ID and name.
    pub async fn list_artist_entries(&self) -> Result<ArtistEntries> {
        Ok(self.list_artists().await?.into_iter().collect())
    }

    /// Handle an artist search. Same contract as the venue search.
    pub async fn search_artists_result(&self, params: &Search) -> Result<SearchResults> {
        let data = self.search_artists(params).await?;
        Ok(SearchResults::new(params.search_term.clone(), data))
    }

    /// Handle showing an artist page.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` if no artist has the given ID.
    pub async fn show_artist_detail(&self, params: &Id) -> Result<ArtistDetail> {
        let (artist, shows) = self
            .get_artist_with_shows(params)
            .await?
            .ok_or_else(|| DirectoryError::not_found(EntityKind::Artist, params.id))?;

        Ok(ArtistDetail::new(artist, shows))
    }

    pub async fn artist_form(&self, params: &Id) -> Result<ArtistForm> {
        self.get_artist(params)
            .await?
            .map(ArtistForm::from)
            .ok_or_else(|| DirectoryError::not_found(EntityKind::Artist, params.id))
    }

    pub async fn create_artist_result(
        &self,
        params: &CreateArtist,
    ) -> Result<CreateResult<Artist>> {
        let artist = self.create_artist(params).await?;
        Ok(CreateResult::new(artist))
    }

    /// Handle editing an artist. Omitted editable fields are cleared.
    pub async fn update_artist_result(
        &self,
        params: &UpdateArtist,
    ) -> Result<UpdateResult<Artist>> {
        let (before, after) = self
            .update_artist(params)
            .await?
            .ok_or_else(|| DirectoryError::not_found(EntityKind::Artist, params.id))?;

        let changes = artist_changes(&before, &after);
        Ok(UpdateResult::with_changes(after, changes))
    }
}
