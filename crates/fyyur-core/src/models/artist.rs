//! Artist model definition.

use serde::{Deserialize, Serialize};

/// A performer that can be booked at venues.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    /// Unique identifier for the artist
    pub id: u64,

    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,

    /// Genres in the order they were entered
    #[serde(default)]
    pub genres: Vec<String>,

    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,

    /// Whether the artist is looking for venues; unset when never answered
    pub seeking_venue: Option<bool>,

    pub seeking_description: Option<String>,
}
