//! Show operations for the Directory.

use super::Directory;
use crate::{
    error::Result,
    models::{NewShow, Show, ShowListing},
    params::{CreateShow, Id},
};

impl Directory {
    /// Parses the start time and books a show.
    ///
    /// Unknown venue or artist IDs surface as a constraint violation.
    pub async fn create_show(&self, params: &CreateShow) -> Result<Show> {
        let show = NewShow::try_from(params)?;

        self.with_database(move |db| db.create_show(&show)).await
    }

    /// Retrieves a show by its ID.
    pub async fn get_show(&self, params: &Id) -> Result<Option<Show>> {
        let show_id = params.id;

        self.with_database(move |db| db.get_show(show_id)).await
    }

    /// Lists every show with its venue and artist.
    pub async fn list_shows(&self) -> Result<Vec<ShowListing>> {
        self.with_database(|db| db.list_shows()).await
    }
}
