//! Data models for venues, artists and shows.
//!
//! This module contains the persisted entities of the booking directory and
//! the derived types the query layer produces from them. Markdown `Display`
//! implementations live in [`crate::display::models`], and the flattened view
//! models handed to templates live in [`crate::display`].
//!
//! # Entities
//!
//! - [`Venue`] and [`Artist`] carry profile data and a list of genres.
//! - [`Show`] links one venue and one artist at a start time.
//!
//! # Derived types
//!
//! - [`ListingEntry`]: id, name and upcoming show count, used by the venue
//!   listing and by both searches.
//! - [`ShowPartition`]: shows split into past and upcoming relative to a
//!   reference instant.
//! - [`ShowWithArtist`], [`ShowAtVenue`], [`ShowListing`]: show summaries from
//!   the venue side, the artist side and the global listing.
//!
//! # Examples
//!
//! ```rust
//! use fyyur_core::models::{ShowPartition, ShowWithArtist};
//! use jiff::Timestamp;
//!
//! let now: Timestamp = "2024-06-01T12:00:00Z".parse().unwrap();
//! let show = ShowWithArtist {
//!     artist_id: 1,
//!     artist_name: "Guns N Petals".to_string(),
//!     artist_image_link: None,
//!     start_time: now,
//! };
//!
//! // A show starting exactly now is upcoming
//! let partition = ShowPartition::split(vec![show], now);
//! assert_eq!(partition.past_count(), 0);
//! assert_eq!(partition.upcoming_count(), 1);
//! ```

pub mod artist;
pub mod requests;
pub mod show;
pub mod summary;
pub mod venue;


use std::fmt;

use serde::{Deserialize, Serialize};

pub use artist::Artist;
pub use requests::{ArtistChanges, NewArtist, NewShow, NewVenue, VenueChanges};
pub use show::Show;
pub use summary::{
    ListingEntry, Scheduled, ShowAtVenue, ShowListing, ShowPartition, ShowWithArtist, VenueArea,
};
pub use venue::{Venue, DEFAULT_VENUE_SEEKING_DESCRIPTION};

/// The kinds of persisted records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Venue,
    Artist,
    Show,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Venue => "Venue",
            EntityKind::Artist => "Artist",
            EntityKind::Show => "Show",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
