#![allow(dead_code)]

use fyyur_core::{
    models::{NewArtist, NewShow, NewVenue, DEFAULT_VENUE_SEEKING_DESCRIPTION},
    Database, Directory, DirectoryBuilder,
};
use jiff::Timestamp;
use tempfile::{NamedTempFile, TempDir};

/// Reference instant used by every test that needs a clock.
pub const NOW: &str = "2024-06-01T20:00:00Z";

pub fn now() -> Timestamp {
    at(NOW)
}

pub fn at(raw: &str) -> Timestamp {
    raw.parse().expect("Invalid test timestamp")
}

/// Helper function to create a temporary database for testing
pub fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

/// Helper function to create a test directory with the clock pinned to NOW
pub async fn create_test_directory() -> (TempDir, Directory) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let directory = DirectoryBuilder::new()
        .with_database_path(Some(&db_path))
        .with_fixed_time(now())
        .build()
        .await
        .expect("Failed to create directory");
    (temp_dir, directory)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn musical_hop() -> NewVenue {
    NewVenue {
        name: "The Musical Hop".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: Some("123-123-1234".to_string()),
        image_link: Some("https://images.unsplash.com/photo-1543900694-133f37abaaa5".to_string()),
        facebook_link: Some("https://www.facebook.com/TheMusicalHop".to_string()),
        genres: strings(&["Jazz", "Reggae", "Swing", "Classical", "Folk"]),
        website: Some("https://www.themusicalhop.com".to_string()),
        seeking_talent: true,
        seeking_description: "We are on the lookout for a local artist to play every two weeks. Please call us.".to_string(),
    }
}

pub fn dueling_pianos() -> NewVenue {
    NewVenue {
        name: "The Dueling Pianos Bar".to_string(),
        city: "New York".to_string(),
        state: "NY".to_string(),
        address: "335 Delancey Street".to_string(),
        phone: Some("914-003-1132".to_string()),
        image_link: None,
        facebook_link: Some("https://www.facebook.com/theduelingpianos".to_string()),
        genres: strings(&["Classical", "R&B", "Hip-Hop"]),
        website: Some("https://www.theduelingpianos.com".to_string()),
        seeking_talent: false,
        seeking_description: DEFAULT_VENUE_SEEKING_DESCRIPTION.to_string(),
    }
}

pub fn park_square() -> NewVenue {
    NewVenue {
        name: "Park Square Live Music & Coffee".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        address: "34 Whiskey Moore Ave".to_string(),
        phone: Some("415-000-1234".to_string()),
        image_link: None,
        facebook_link: None,
        genres: strings(&["Rock n Roll", "Jazz", "Classical", "Folk"]),
        website: Some("https://www.parksquarelivemusicandcoffee.com".to_string()),
        seeking_talent: false,
        seeking_description: DEFAULT_VENUE_SEEKING_DESCRIPTION.to_string(),
    }
}

pub fn guns_n_petals() -> NewArtist {
    NewArtist {
        name: "Guns N Petals".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: Some("326-123-5000".to_string()),
        genres: strings(&["Rock n Roll"]),
        image_link: None,
        facebook_link: Some("https://www.facebook.com/GunsNPetals".to_string()),
        website: Some("https://www.gunsnpetalsband.com".to_string()),
        seeking_venue: Some(true),
        seeking_description: Some(
            "Looking for shows to perform at in the San Francisco Bay Area!".to_string(),
        ),
    }
}

pub fn matt_quevedo() -> NewArtist {
    NewArtist {
        name: "Matt Quevedo".to_string(),
        city: "New York".to_string(),
        state: "NY".to_string(),
        phone: Some("300-400-5000".to_string()),
        genres: strings(&["Jazz"]),
        image_link: None,
        facebook_link: Some("https://www.facebook.com/mattquevedo923251523".to_string()),
        website: None,
        seeking_venue: Some(false),
        seeking_description: None,
    }
}

pub fn wild_sax_band() -> NewArtist {
    NewArtist {
        name: "The Wild Sax Band".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: Some("432-325-5432".to_string()),
        genres: strings(&["Jazz", "Classical"]),
        image_link: None,
        facebook_link: None,
        website: None,
        seeking_venue: None,
        seeking_description: None,
    }
}

pub fn show(venue_id: u64, artist_id: u64, start_time: &str) -> NewShow {
    NewShow {
        venue_id,
        artist_id,
        start_time: at(start_time),
    }
}
