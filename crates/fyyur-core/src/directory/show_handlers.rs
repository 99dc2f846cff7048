//! Show handlers that return view models for the Directory.

use super::Directory;
use crate::{
    display::{CreateResult, ShowListings},
    error::Result,
    models::Show,
    params::CreateShow,
};

impl Directory {
    /// Handle the global show listing, ordered by start time.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use fyyur_core::DirectoryBuilder;
    /// # async {
    /// let directory = DirectoryBuilder::new().build().await?;
    /// let shows = directory.list_show_listings().await?;
    /// println!("{shows}");
    /// # Result::<(), fyyur_core::DirectoryError>::Ok(())
    /// # };
    /// ```
    pub async fn list_show_listings(&self) -> Result<ShowListings> {
        Ok(ShowListings(self.list_shows().await?))
    }

    /// Handle booking a show.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::ValidationFailed` for an unparseable start
    /// time and `DirectoryError::ConstraintViolation` when the venue or
    /// artist doesn't exist.
    pub async fn create_show_result(&self, params: &CreateShow) -> Result<CreateResult<Show>> {
        let show = self.create_show(params).await?;
        Ok(CreateResult::new(show))
    }
}
