//! Display implementations for domain models.
//!
//! All output is markdown so the terminal renderer can style it. Show start
//! times use the medium date format here; detail pages use the full format.

use std::fmt;

use super::datetime::ShowTime;
use crate::models::{
    Artist, ListingEntry, Show, ShowAtVenue, ShowListing, ShowWithArtist, Venue, VenueArea,
};

/// Writes a `- Label: value` line when the value is present and non-empty.
pub(crate) fn write_field(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: Option<&str>,
) -> fmt::Result {
    match value {
        Some(value) if !value.is_empty() => writeln!(f, "- {label}: {value}"),
        _ => Ok(()),
    }
}

/// Genres joined for a single markdown line, kept exactly as stored.
pub(crate) fn genre_line(genres: &[String]) -> String {
    genres.join(", ")
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        write_field(f, "Genres", Some(&genre_line(&self.genres)))?;
        write_field(f, "Address", Some(&self.address))?;
        writeln!(f, "- Location: {}, {}", self.city, self.state)?;
        write_field(f, "Phone", self.phone.as_deref())?;
        write_field(f, "Website", self.website.as_deref())?;
        write_field(f, "Facebook", self.facebook_link.as_deref())?;
        write_field(f, "Image", self.image_link.as_deref())?;

        writeln!(f)?;
        if self.seeking_talent {
            writeln!(f, "**Seeking talent**: {}", self.seeking_description)?;
        } else {
            writeln!(f, "Not currently seeking talent.")?;
        }

        Ok(())
    }
}

impl fmt::Display for Artist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        write_field(f, "Genres", Some(&genre_line(&self.genres)))?;
        writeln!(f, "- Location: {}, {}", self.city, self.state)?;
        write_field(f, "Phone", self.phone.as_deref())?;
        write_field(f, "Website", self.website.as_deref())?;
        write_field(f, "Facebook", self.facebook_link.as_deref())?;
        write_field(f, "Image", self.image_link.as_deref())?;

        match self.seeking_venue {
            Some(true) => {
                writeln!(f)?;
                match &self.seeking_description {
                    Some(desc) => writeln!(f, "**Seeking venues**: {desc}")?,
                    None => writeln!(f, "**Seeking venues**")?,
                }
            }
            Some(false) => {
                writeln!(f)?;
                writeln!(f, "Not currently seeking venues.")?;
            }
            None => {}
        }

        Ok(())
    }
}

impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- Show {}: artist {} at venue {}, {}",
            self.id,
            self.artist_id,
            self.venue_id,
            ShowTime::medium(&self.start_time)
        )
    }
}

impl fmt::Display for ListingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.num_upcoming_shows == 1 { "" } else { "s" };
        writeln!(
            f,
            "- {} (ID: {}), {} upcoming show{plural}",
            self.name, self.id, self.num_upcoming_shows
        )
    }
}

impl fmt::Display for VenueArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}, {}", self.city, self.state)?;
        writeln!(f)?;
        for venue in &self.venues {
            write!(f, "{venue}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ShowWithArtist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} (artist {}): {}",
            self.artist_name,
            self.artist_id,
            ShowTime::full(&self.start_time)
        )
    }
}

impl fmt::Display for ShowAtVenue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} (venue {}): {}",
            self.venue_name,
            self.venue_id,
            ShowTime::full(&self.start_time)
        )
    }
}

impl fmt::Display for ShowListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** at **{}**, {}",
            self.artist_name,
            self.venue_name,
            ShowTime::medium(&self.start_time)
        )?;
        writeln!(
            f,
            "  - Artist ID {}, venue ID {}",
            self.artist_id, self.venue_id
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Artist, ListingEntry, Venue, DEFAULT_VENUE_SEEKING_DESCRIPTION};

    fn venue() -> Venue {
        Venue {
            id: 1,
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: Some("123-123-1234".to_string()),
            image_link: None,
            facebook_link: Some("https://www.facebook.com/TheMusicalHop".to_string()),
            genres: vec!["Jazz".to_string(), " Reggae".to_string()],
            website: None,
            seeking_talent: true,
            seeking_description: DEFAULT_VENUE_SEEKING_DESCRIPTION.to_string(),
        }
    }

    #[test]
    fn test_venue_display() {
        let output = venue().to_string();

        assert!(output.contains("# 1. The Musical Hop"));
        assert!(output.contains("- Genres: Jazz,  Reggae"));
        assert!(output.contains("- Location: San Francisco, CA"));
        assert!(output.contains("- Phone: 123-123-1234"));
        assert!(!output.contains("Website"));
        assert!(output.contains(DEFAULT_VENUE_SEEKING_DESCRIPTION));
    }

    #[test]
    fn test_venue_display_with_wiped_phone() {
        let output = Venue {
            phone: Some(String::new()),
            seeking_talent: false,
            ..venue()
        }
        .to_string();

        assert!(!output.contains("Phone"));
        assert!(output.contains("Not currently seeking talent."));
    }

    #[test]
    fn test_artist_display_without_seeking_answer() {
        let artist = Artist {
            id: 5,
            name: "Matt Quevedo".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            phone: None,
            genres: vec!["Jazz".to_string()],
            image_link: None,
            facebook_link: None,
            website: None,
            seeking_venue: None,
            seeking_description: None,
        };
        let output = artist.to_string();

        assert!(output.contains("# 5. Matt Quevedo"));
        assert!(!output.contains("eeking"));
    }

    #[test]
    fn test_listing_entry_pluralizes() {
        let one = ListingEntry {
            id: 1,
            name: "The Musical Hop".to_string(),
            num_upcoming_shows: 1,
        };
        assert!(one.to_string().contains("1 upcoming show\n"));

        let none = ListingEntry {
            num_upcoming_shows: 0,
            ..one
        };
        assert!(none.to_string().contains("0 upcoming shows"));
    }
}
