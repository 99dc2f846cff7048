//! Parameter structures for directory operations
//!
//! These structures are shared by every interface (CLI, MCP) without
//! framework-specific derives beyond serde. Interface layers wrap or convert
//! into them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema generation for the MCP tools is available behind the `schema`
//! feature.
//!
//! Creation parameters are validated and resolved into the storage requests
//! in [`crate::models::requests`]; update parameters are resolved the same
//! way, with every omitted editable field becoming empty.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_venue, show_artist, delete_venue and the edit forms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the record to operate on
    pub id: u64,
}

/// Parameters for searching venues or artists by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Search {
    /// Case-insensitive partial name; empty matches everything
    #[serde(default)]
    pub search_term: String,
}

/// Parameters for listing a new venue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateVenue {
    /// Name of the venue (required)
    pub name: String,
    /// City (required)
    pub city: String,
    /// State (required)
    pub state: String,
    /// Street address (required)
    pub address: String,
    /// Genres played at the venue (at least one)
    pub genres: Vec<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    /// Whether the venue is looking for talent (defaults to true)
    pub seeking_talent: Option<bool>,
    /// What the venue is looking for (defaults to a standard text)
    pub seeking_description: Option<String>,
}

/// Parameters for listing a new artist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateArtist {
    /// Name of the artist (required)
    pub name: String,
    /// City (required)
    pub city: String,
    /// State (required)
    pub state: String,
    /// Genres the artist plays (at least one)
    pub genres: Vec<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: Option<bool>,
    pub seeking_description: Option<String>,
}

/// Parameters for booking a show.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateShow {
    /// ID of an existing venue
    pub venue_id: u64,
    /// ID of an existing artist
    pub artist_id: u64,
    /// Start time, RFC 3339 (`2019-05-21T21:30:00Z`) or a local date-time
    /// without offset (`2019-05-21T21:30:00`)
    pub start_time: String,
}

/// Parameters for editing a venue.
///
/// Every editable field is overwritten. A field left out becomes empty; it is
/// not kept at its previous value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateVenue {
    /// Venue ID to update (required)
    pub id: u64,
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Option<Vec<String>>,
    pub facebook_link: Option<String>,
}

/// Parameters for editing an artist.
///
/// Same overwrite rule as [`UpdateVenue`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateArtist {
    /// Artist ID to update (required)
    pub id: u64,
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub genres: Option<Vec<String>>,
    pub facebook_link: Option<String>,
}
