//! Validated requests handed to the storage layer.
//!
//! Parameters from [`crate::params`] are converted into these types with
//! `TryFrom`, which performs the presence checks and applies the documented
//! defaults. The database layer never sees unvalidated input.

use jiff::{civil::DateTime, tz::TimeZone, Timestamp};

use super::DEFAULT_VENUE_SEEKING_DESCRIPTION;
use crate::{
    error::{DirectoryError, Result},
    params::{CreateArtist, CreateShow, CreateVenue, UpdateArtist, UpdateVenue},
};

/// A venue ready to be inserted, with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

/// An artist ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: Option<bool>,
    pub seeking_description: Option<String>,
}

/// A show ready to be inserted, with its start time parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShow {
    pub venue_id: u64,
    pub artist_id: u64,
    pub start_time: Timestamp,
}

/// Full overwrite of a venue's editable fields.
///
/// Fields missing from the update parameters are already resolved to empty
/// values here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueChanges {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
}

/// Full overwrite of an artist's editable fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtistChanges {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
}

fn require(field: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(DirectoryError::invalid_input(field, "This field is required"));
    }
    Ok(value)
}

/// Blank optional inputs are stored as NULL.
fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Genres are stored comma-delimited, so a genre may not contain a comma.
fn check_genres(genres: &[String]) -> Result<()> {
    if let Some(genre) = genres.iter().find(|g| g.contains(',')) {
        return Err(DirectoryError::invalid_input(
            "genres",
            format!("Genre '{genre}' must not contain a comma"),
        ));
    }
    Ok(())
}

fn require_genres(genres: Vec<String>) -> Result<Vec<String>> {
    if genres.iter().all(|g| g.trim().is_empty()) {
        return Err(DirectoryError::invalid_input(
            "genres",
            "At least one genre is required",
        ));
    }
    check_genres(&genres)?;
    Ok(genres)
}

/// Parses a show start time and truncates it to microsecond precision.
///
/// Input with an offset or `Z` is an exact instant. Input without an offset
/// is read as a wall-clock time in the system time zone.
pub fn parse_start_time(raw: &str) -> Result<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DirectoryError::invalid_input(
            "start_time",
            "This field is required",
        ));
    }

    let instant = match raw.parse::<Timestamp>() {
        Ok(ts) => ts,
        Err(_) => {
            let civil = raw.parse::<DateTime>().map_err(|e| {
                DirectoryError::invalid_input("start_time", format!("Cannot parse '{raw}': {e}"))
            })?;
            civil
                .to_zoned(TimeZone::system())
                .map_err(|e| {
                    DirectoryError::invalid_input(
                        "start_time",
                        format!("Cannot place '{raw}' in the local time zone: {e}"),
                    )
                })?
                .timestamp()
        }
    };

    Timestamp::from_microsecond(instant.as_microsecond()).map_err(|e| {
        DirectoryError::invalid_input("start_time", format!("Start time out of range: {e}"))
    })
}

impl TryFrom<CreateVenue> for NewVenue {
    type Error = DirectoryError;

    fn try_from(params: CreateVenue) -> Result<Self> {
        Ok(Self {
            name: require("name", params.name)?,
            city: require("city", params.city)?,
            state: require("state", params.state)?,
            address: require("address", params.address)?,
            genres: require_genres(params.genres)?,
            phone: optional(params.phone),
            image_link: optional(params.image_link),
            facebook_link: optional(params.facebook_link),
            website: optional(params.website),
            seeking_talent: params.seeking_talent.unwrap_or(true),
            seeking_description: optional(params.seeking_description)
                .unwrap_or_else(|| DEFAULT_VENUE_SEEKING_DESCRIPTION.to_string()),
        })
    }
}

impl TryFrom<CreateArtist> for NewArtist {
    type Error = DirectoryError;

    fn try_from(params: CreateArtist) -> Result<Self> {
        Ok(Self {
            name: require("name", params.name)?,
            city: require("city", params.city)?,
            state: require("state", params.state)?,
            genres: require_genres(params.genres)?,
            phone: optional(params.phone),
            image_link: optional(params.image_link),
            facebook_link: optional(params.facebook_link),
            website: optional(params.website),
            seeking_venue: params.seeking_venue,
            seeking_description: optional(params.seeking_description),
        })
    }
}

impl TryFrom<&CreateShow> for NewShow {
    type Error = DirectoryError;

    fn try_from(params: &CreateShow) -> Result<Self> {
        Ok(Self {
            venue_id: params.venue_id,
            artist_id: params.artist_id,
            start_time: parse_start_time(&params.start_time)?,
        })
    }
}

impl TryFrom<UpdateVenue> for VenueChanges {
    type Error = DirectoryError;

    fn try_from(params: UpdateVenue) -> Result<Self> {
        let genres = params.genres.unwrap_or_default();
        check_genres(&genres)?;

        Ok(Self {
            name: params.name.unwrap_or_default(),
            city: params.city.unwrap_or_default(),
            state: params.state.unwrap_or_default(),
            address: params.address.unwrap_or_default(),
            phone: params.phone.unwrap_or_default(),
            genres,
            facebook_link: params.facebook_link.unwrap_or_default(),
        })
    }
}

impl TryFrom<UpdateArtist> for ArtistChanges {
    type Error = DirectoryError;

    fn try_from(params: UpdateArtist) -> Result<Self> {
        let genres = params.genres.unwrap_or_default();
        check_genres(&genres)?;

        Ok(Self {
            name: params.name.unwrap_or_default(),
            city: params.city.unwrap_or_default(),
            state: params.state.unwrap_or_default(),
            phone: params.phone.unwrap_or_default(),
            genres,
            facebook_link: params.facebook_link.unwrap_or_default(),
        })
    }
}
