//! Flattened view models for single venues and artists.
//!
//! Detail views combine the profile with its past/upcoming show partition.
//! Form views carry the values used to pre-populate an edit form. Every view
//! serializes to the flat shape a template expects and displays as markdown.

use std::fmt;

use serde::Serialize;

use super::models::{genre_line, write_field};
use crate::models::{Artist, ShowAtVenue, ShowPartition, ShowWithArtist, Venue};

/// A venue page: profile, shows on both sides of now, and their counts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VenueDetail {
    pub id: u64,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: String,
    pub image_link: Option<String>,
    pub past_shows: Vec<ShowWithArtist>,
    pub upcoming_shows: Vec<ShowWithArtist>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetail {
    pub fn new(venue: Venue, shows: ShowPartition<ShowWithArtist>) -> Self {
        Self {
            past_shows_count: shows.past_count(),
            upcoming_shows_count: shows.upcoming_count(),
            past_shows: shows.past,
            upcoming_shows: shows.upcoming,
            id: venue.id,
            name: venue.name,
            genres: venue.genres,
            address: venue.address,
            city: venue.city,
            state: venue.state,
            phone: venue.phone,
            website: venue.website,
            facebook_link: venue.facebook_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            image_link: venue.image_link,
        }
    }
}

/// An artist page: profile, shows on both sides of now, and their counts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ArtistDetail {
    pub id: u64,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: Option<bool>,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ShowAtVenue>,
    pub upcoming_shows: Vec<ShowAtVenue>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetail {
    pub fn new(artist: Artist, shows: ShowPartition<ShowAtVenue>) -> Self {
        Self {
            past_shows_count: shows.past_count(),
            upcoming_shows_count: shows.upcoming_count(),
            past_shows: shows.past,
            upcoming_shows: shows.upcoming,
            id: artist.id,
            name: artist.name,
            genres: artist.genres,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            website: artist.website,
            facebook_link: artist.facebook_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            image_link: artist.image_link,
        }
    }
}

/// Current values of a venue for its edit form.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VenueForm {
    pub id: u64,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: String,
    pub image_link: Option<String>,
}

impl From<Venue> for VenueForm {
    fn from(venue: Venue) -> Self {
        Self {
            id: venue.id,
            name: venue.name,
            genres: venue.genres,
            address: venue.address,
            city: venue.city,
            state: venue.state,
            phone: venue.phone,
            website: venue.website,
            facebook_link: venue.facebook_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            image_link: venue.image_link,
        }
    }
}

/// Current values of an artist for its edit form.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ArtistForm {
    pub id: u64,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: Option<bool>,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
}

impl From<Artist> for ArtistForm {
    fn from(artist: Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            genres: artist.genres,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            website: artist.website,
            facebook_link: artist.facebook_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            image_link: artist.image_link,
        }
    }
}

fn write_shows<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    heading: &str,
    count: usize,
    shows: &[T],
) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "## {heading} ({count})")?;
    writeln!(f)?;
    if shows.is_empty() {
        writeln!(f, "No {} shows.", heading.to_lowercase())?;
    } else {
        for show in shows {
            write!(f, "{show}")?;
        }
    }
    Ok(())
}

impl fmt::Display for VenueDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        write_field(f, "Genres", Some(&genre_line(&self.genres)))?;
        write_field(f, "Address", Some(&self.address))?;
        writeln!(f, "- Location: {}, {}", self.city, self.state)?;
        write_field(f, "Phone", self.phone.as_deref())?;
        write_field(f, "Website", self.website.as_deref())?;
        write_field(f, "Facebook", self.facebook_link.as_deref())?;

        if self.seeking_talent {
            writeln!(f)?;
            writeln!(f, "**Seeking talent**: {}", self.seeking_description)?;
        }

        write_shows(f, "Upcoming", self.upcoming_shows_count, &self.upcoming_shows)?;
        write_shows(f, "Past", self.past_shows_count, &self.past_shows)
    }
}

impl fmt::Display for ArtistDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        write_field(f, "Genres", Some(&genre_line(&self.genres)))?;
        writeln!(f, "- Location: {}, {}", self.city, self.state)?;
        write_field(f, "Phone", self.phone.as_deref())?;
        write_field(f, "Website", self.website.as_deref())?;
        write_field(f, "Facebook", self.facebook_link.as_deref())?;

        if self.seeking_venue == Some(true) {
            writeln!(f)?;
            match &self.seeking_description {
                Some(desc) => writeln!(f, "**Seeking venues**: {desc}")?,
                None => writeln!(f, "**Seeking venues**")?,
            }
        }

        write_shows(f, "Upcoming", self.upcoming_shows_count, &self.upcoming_shows)?;
        write_shows(f, "Past", self.past_shows_count, &self.past_shows)
    }
}

/// Renders a form field whose current value may be blank.
fn write_form_field(f: &mut fmt::Formatter<'_>, label: &str, value: &str) -> fmt::Result {
    if value.is_empty() {
        writeln!(f, "- {label}: _(empty)_")
    } else {
        writeln!(f, "- {label}: {value}")
    }
}

impl fmt::Display for VenueForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Edit venue {}", self.id)?;
        writeln!(f)?;
        write_form_field(f, "Name", &self.name)?;
        write_form_field(f, "City", &self.city)?;
        write_form_field(f, "State", &self.state)?;
        write_form_field(f, "Address", &self.address)?;
        write_form_field(f, "Phone", self.phone.as_deref().unwrap_or_default())?;
        write_form_field(f, "Genres", &genre_line(&self.genres))?;
        write_form_field(
            f,
            "Facebook link",
            self.facebook_link.as_deref().unwrap_or_default(),
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Every field above is overwritten on update; fields left out are cleared."
        )
    }
}

impl fmt::Display for ArtistForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Edit artist {}", self.id)?;
        writeln!(f)?;
        write_form_field(f, "Name", &self.name)?;
        write_form_field(f, "City", &self.city)?;
        write_form_field(f, "State", &self.state)?;
        write_form_field(f, "Phone", self.phone.as_deref().unwrap_or_default())?;
        write_form_field(f, "Genres", &genre_line(&self.genres))?;
        write_form_field(
            f,
            "Facebook link",
            self.facebook_link.as_deref().unwrap_or_default(),
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Every field above is overwritten on update; fields left out are cleared."
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::DEFAULT_VENUE_SEEKING_DESCRIPTION;

    fn venue() -> Venue {
        Venue {
            id: 3,
            name: "Park Square Live Music & Coffee".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "34 Whiskey Moore Ave".to_string(),
            phone: Some("415-000-1234".to_string()),
            image_link: None,
            facebook_link: None,
            genres: vec!["Rock n Roll".to_string(), " Jazz".to_string()],
            website: None,
            seeking_talent: false,
            seeking_description: DEFAULT_VENUE_SEEKING_DESCRIPTION.to_string(),
        }
    }

    fn show(artist_id: u64, raw: &str) -> ShowWithArtist {
        ShowWithArtist {
            artist_id,
            artist_name: "The Wild Sax Band".to_string(),
            artist_image_link: None,
            start_time: raw.parse::<Timestamp>().unwrap(),
        }
    }

    #[test]
    fn test_venue_detail_counts_and_json_shape() {
        let now: Timestamp = "2024-06-01T00:00:00Z".parse().unwrap();
        let shows = ShowPartition::split(
            vec![
                show(6, "2019-06-15T23:00:00Z"),
                show(6, "2035-04-01T20:00:00Z"),
                show(6, "2035-04-08T20:00:00Z"),
            ],
            now,
        );

        let detail = VenueDetail::new(venue(), shows);
        assert_eq!(detail.past_shows_count, 1);
        assert_eq!(detail.upcoming_shows_count, 2);

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["genres"][1], " Jazz");
        assert_eq!(json["upcoming_shows"][0]["artist_name"], "The Wild Sax Band");
        assert_eq!(json["past_shows_count"], 1);

        let output = detail.to_string();
        assert!(output.contains("## Upcoming (2)"));
        assert!(output.contains("## Past (1)"));
        assert!(!output.contains("Seeking talent"));
    }

    #[test]
    fn test_venue_detail_without_shows() {
        let detail = VenueDetail::new(venue(), ShowPartition::default());
        let output = detail.to_string();

        assert!(output.contains("No upcoming shows."));
        assert!(output.contains("No past shows."));
    }

    #[test]
    fn test_venue_form_shows_cleared_fields() {
        let form = VenueForm::from(Venue {
            phone: Some(String::new()),
            genres: vec![],
            ..venue()
        });
        let output = form.to_string();

        assert!(output.contains("# Edit venue 3"));
        assert!(output.contains("- Phone: _(empty)_"));
        assert!(output.contains("- Genres: _(empty)_"));
        assert!(output.contains("- Address: 34 Whiskey Moore Ave"));
    }
}
