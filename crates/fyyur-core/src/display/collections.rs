//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper serializes as the bare list (or the search object) that a
//! listing template consumes, and displays as markdown with a message for the
//! empty case.

use std::{fmt, ops::Index};

use serde::Serialize;

use crate::models::{Artist, ListingEntry, ShowListing, VenueArea};

/// Venues grouped by city and state.
///
/// # Examples
///
/// ```rust
/// use fyyur_core::{
///     display::VenueAreas,
///     models::{ListingEntry, VenueArea},
/// };
///
/// let areas = VenueAreas(vec![VenueArea {
///     city: "San Francisco".to_string(),
///     state: "CA".to_string(),
///     venues: vec![ListingEntry {
///         id: 1,
///         name: "The Musical Hop".to_string(),
///         num_upcoming_shows: 0,
///     }],
/// }]);
///
/// let output = format!("{}", areas);
/// assert!(output.contains("## San Francisco, CA"));
/// assert!(output.contains("The Musical Hop"));
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct VenueAreas(pub Vec<VenueArea>);

impl VenueAreas {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of areas in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the areas.
    pub fn iter(&self) -> std::slice::Iter<'_, VenueArea> {
        self.0.iter()
    }

    /// Total number of venues across all areas.
    pub fn venue_count(&self) -> usize {
        self.0.iter().map(|area| area.venues.len()).sum()
    }
}

impl Index<usize> for VenueAreas {
    type Output = VenueArea;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a VenueAreas {
    type Item = &'a VenueArea;
    type IntoIter = std::slice::Iter<'a, VenueArea>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for VenueAreas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No venues found.")
        } else {
            for area in &self.0 {
                write!(f, "{area}")?;
            }
            Ok(())
        }
    }
}

/// Row of the artist listing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ArtistEntry {
    pub id: u64,
    pub name: String,
}

impl From<Artist> for ArtistEntry {
    fn from(artist: Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
        }
    }
}

/// Every artist by ID and name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ArtistEntries(pub Vec<ArtistEntry>);

impl ArtistEntries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArtistEntry> {
        self.0.iter()
    }
}

impl Index<usize> for ArtistEntries {
    type Output = ArtistEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl FromIterator<Artist> for ArtistEntries {
    fn from_iter<I: IntoIterator<Item = Artist>>(iter: I) -> Self {
        Self(iter.into_iter().map(ArtistEntry::from).collect())
    }
}

impl fmt::Display for ArtistEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No artists found.");
        }
        for artist in &self.0 {
            writeln!(f, "- {} (ID: {})", artist.name, artist.id)?;
        }
        Ok(())
    }
}

/// Every show with its venue and artist, in start time order.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(transparent)]
pub struct ShowListings(pub Vec<ShowListing>);

impl ShowListings {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShowListing> {
        self.0.iter()
    }
}

impl Index<usize> for ShowListings {
    type Output = ShowListing;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for ShowListings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No shows found.");
        }
        for show in &self.0 {
            write!(f, "{show}")?;
        }
        Ok(())
    }
}

/// Result of a venue or artist search.
///
/// `count` always equals the length of `data`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<ListingEntry>,
    pub search_term: String,
}

impl SearchResults {
    pub fn new(search_term: impl Into<String>, data: Vec<ListingEntry>) -> Self {
        Self {
            count: data.len(),
            data,
            search_term: search_term.into(),
        }
    }
}

impl fmt::Display for SearchResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.count == 1 { "" } else { "s" };
        writeln!(
            f,
            "Found {} result{plural} for \"{}\"",
            self.count, self.search_term
        )?;

        if !self.data.is_empty() {
            writeln!(f)?;
            for entry in &self.data {
                write!(f, "{entry}")?;
            }
        }

        Ok(())
    }
}
