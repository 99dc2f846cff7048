//! Show summaries, listing entries and the past/upcoming partition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Compact entry used by the venue listing and by venue/artist search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListingEntry {
    pub id: u64,
    pub name: String,
    /// Shows starting strictly after the time of the query
    pub num_upcoming_shows: u32,
}

/// Venues sharing a city and state in the venue listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<ListingEntry>,
}

/// Anything with a start time that can be placed on the past/upcoming line.
pub trait Scheduled {
    fn start_time(&self) -> Timestamp;
}

/// A show seen from the venue side: who is playing and when.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowWithArtist {
    pub artist_id: u64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// A show seen from the artist side: where it is and when.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowAtVenue {
    pub venue_id: u64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// A show in the global listing, resolved against both sides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowListing {
    pub venue_id: u64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: u64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}

impl Scheduled for ShowWithArtist {
    fn start_time(&self) -> Timestamp {
        self.start_time
    }
}

impl Scheduled for ShowAtVenue {
    fn start_time(&self) -> Timestamp {
        self.start_time
    }
}

impl Scheduled for ShowListing {
    fn start_time(&self) -> Timestamp {
        self.start_time
    }
}

/// Shows of one venue or artist split around a reference instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowPartition<T> {
    /// Shows that started strictly before the reference instant
    pub past: Vec<T>,
    /// Shows starting at or after the reference instant
    pub upcoming: Vec<T>,
}

impl<T: Scheduled> ShowPartition<T> {
    /// Splits shows around `now`, keeping their relative order.
    ///
    /// A show starting exactly at `now` is upcoming. Note this differs from
    /// [`ListingEntry::num_upcoming_shows`], which only counts shows strictly
    /// after `now`.
    pub fn split(shows: Vec<T>, now: Timestamp) -> Self {
        let (past, upcoming) = shows.into_iter().partition(|show| show.start_time() < now);
        Self { past, upcoming }
    }
}

impl<T> ShowPartition<T> {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }
}

impl<T> Default for ShowPartition<T> {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            upcoming: Vec::new(),
        }
    }
}
