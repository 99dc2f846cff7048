//! Venue model definition.

use serde::{Deserialize, Serialize};

/// Text stored for a venue that did not describe what it is looking for.
pub const DEFAULT_VENUE_SEEKING_DESCRIPTION: &str =
    "We are on the lookout for a local artist to play every two weeks. Please call us.";

/// A place that hosts shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Venue {
    /// Unique identifier for the venue
    pub id: u64,

    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,

    /// Genres in the order they were entered
    #[serde(default)]
    pub genres: Vec<String>,

    pub website: Option<String>,

    /// Whether the venue is looking for artists to book
    pub seeking_talent: bool,

    pub seeking_description: String,
}
