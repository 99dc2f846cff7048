mod common;

use common::{
    at, create_test_db, dueling_pianos, guns_n_petals, matt_quevedo, musical_hop, now,
    park_square, show, wild_sax_band, NOW,
};
use fyyur_core::{
    models::{ArtistChanges, VenueChanges, DEFAULT_VENUE_SEEKING_DESCRIPTION},
    Database, DirectoryError,
};
use rusqlite::Connection;
use tempfile::NamedTempFile;

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert!(db.list_venues().expect("Failed to list venues").is_empty());
    assert!(db.list_shows().expect("Failed to list shows").is_empty());
}

#[test]
fn test_reopening_keeps_data() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    {
        let mut db = Database::new(temp_file.path()).expect("Failed to open database");
        db.create_venue(&musical_hop()).expect("Failed to create venue");
    }

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert_eq!(db.list_venues().unwrap().len(), 1);
}

#[test]
fn test_create_and_get_venue() {
    let (_temp_file, mut db) = create_test_db();

    let created = db.create_venue(&musical_hop()).expect("Failed to create venue");
    assert!(created.id > 0);

    let venue = db
        .get_venue(created.id)
        .expect("Failed to get venue")
        .expect("Venue should exist");

    assert_eq!(venue, created);
    assert_eq!(venue.genres, vec!["Jazz", "Reggae", "Swing", "Classical", "Folk"]);
    assert_eq!(venue.website.as_deref(), Some("https://www.themusicalhop.com"));
    assert!(venue.seeking_talent);
}

#[test]
fn test_create_and_get_artist() {
    let (_temp_file, mut db) = create_test_db();

    let created = db.create_artist(&matt_quevedo()).expect("Failed to create artist");
    let artist = db
        .get_artist(created.id)
        .expect("Failed to get artist")
        .expect("Artist should exist");

    assert_eq!(artist, created);
    assert_eq!(artist.seeking_venue, Some(false));
    assert_eq!(artist.seeking_description, None);

    let unanswered = db.create_artist(&wild_sax_band()).unwrap();
    let unanswered = db.get_artist(unanswered.id).unwrap().unwrap();
    assert_eq!(unanswered.seeking_venue, None);
}

#[test]
fn test_get_missing_rows() {
    let (_temp_file, db) = create_test_db();

    assert!(db.get_venue(1).unwrap().is_none());
    assert!(db.get_artist(1).unwrap().is_none());
    assert!(db.get_show(1).unwrap().is_none());
}

#[test]
fn test_genres_keep_surrounding_whitespace() {
    let (_temp_file, mut db) = create_test_db();

    let mut venue = park_square();
    venue.genres = vec!["Rock n Roll".to_string(), " Jazz".to_string()];
    let created = db.create_venue(&venue).unwrap();

    let stored = db.get_venue(created.id).unwrap().unwrap();
    assert_eq!(stored.genres, vec!["Rock n Roll", " Jazz"]);
}

#[test]
fn test_search_venues() {
    let (_temp_file, mut db) = create_test_db();

    let hop = db.create_venue(&musical_hop()).unwrap();
    db.create_venue(&dueling_pianos()).unwrap();
    let park = db.create_venue(&park_square()).unwrap();

    let found = db.search_venues("Hop", now()).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "The Musical Hop");

    for term in ["music", "MUSIC", "Music"] {
        let ids: Vec<u64> = db
            .search_venues(term, now())
            .unwrap()
            .iter()
            .map(|entry| entry.id)
            .collect();
        assert_eq!(ids, vec![hop.id, park.id], "term {term}");
    }

    assert!(db.search_venues("zzz", now()).unwrap().is_empty());
    assert_eq!(db.search_venues("", now()).unwrap().len(), 3);
}

#[test]
fn test_search_artists() {
    let (_temp_file, mut db) = create_test_db();

    db.create_artist(&guns_n_petals()).unwrap();
    let matt = db.create_artist(&matt_quevedo()).unwrap();
    let sax = db.create_artist(&wild_sax_band()).unwrap();

    let found = db.search_artists("A", now()).unwrap();
    assert_eq!(found.len(), 3);

    let found = db.search_artists("band", now()).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, sax.id);

    let found = db.search_artists("quev", now()).unwrap();
    assert_eq!(found[0].id, matt.id);
}

#[test]
fn test_upcoming_counts_are_strictly_after_now() {
    let (_temp_file, mut db) = create_test_db();

    let hop = db.create_venue(&musical_hop()).unwrap();
    let bar = db.create_venue(&dueling_pianos()).unwrap();
    let artist = db.create_artist(&guns_n_petals()).unwrap();

    db.create_show(&show(hop.id, artist.id, "2019-05-21T21:30:00Z")).unwrap();
    db.create_show(&show(hop.id, artist.id, NOW)).unwrap();
    db.create_show(&show(hop.id, artist.id, "2024-06-01T20:00:00.000001Z")).unwrap();
    db.create_show(&show(hop.id, artist.id, "2035-04-01T20:00:00Z")).unwrap();

    assert_eq!(db.count_upcoming_venue_shows(hop.id, now()).unwrap(), 2);
    assert_eq!(db.count_upcoming_venue_shows(bar.id, now()).unwrap(), 0);
    assert_eq!(db.count_upcoming_artist_shows(artist.id, now()).unwrap(), 2);

    let entries = db.search_venues("", now()).unwrap();
    assert_eq!(entries[0].num_upcoming_shows, 2);
    assert_eq!(entries[1].num_upcoming_shows, 0);
}

#[test]
fn test_venue_shows_partition_and_order() {
    let (_temp_file, mut db) = create_test_db();

    let hop = db.create_venue(&musical_hop()).unwrap();
    let petals = db.create_artist(&guns_n_petals()).unwrap();
    let sax = db.create_artist(&wild_sax_band()).unwrap();

    // Inserted out of order on purpose
    db.create_show(&show(hop.id, sax.id, "2035-04-15T20:00:00Z")).unwrap();
    db.create_show(&show(hop.id, petals.id, "2019-05-21T21:30:00Z")).unwrap();
    db.create_show(&show(hop.id, sax.id, NOW)).unwrap();
    db.create_show(&show(hop.id, petals.id, "2035-04-01T20:00:00Z")).unwrap();

    let shows = db.venue_shows(hop.id, now()).unwrap();

    assert_eq!(shows.past_count(), 1);
    assert_eq!(shows.past[0].artist_name, "Guns N Petals");

    let upcoming: Vec<_> = shows.upcoming.iter().map(|s| s.start_time).collect();
    assert_eq!(
        upcoming,
        vec![now(), at("2035-04-01T20:00:00Z"), at("2035-04-15T20:00:00Z")]
    );

    let artist_shows = db.artist_shows(sax.id, now()).unwrap();
    assert_eq!(artist_shows.past_count(), 0);
    assert_eq!(artist_shows.upcoming_count(), 2);
    assert_eq!(artist_shows.upcoming[0].venue_name, "The Musical Hop");
}

#[test]
fn test_venue_areas() {
    let (_temp_file, mut db) = create_test_db();

    let hop = db.create_venue(&musical_hop()).unwrap();
    let bar = db.create_venue(&dueling_pianos()).unwrap();
    let park = db.create_venue(&park_square()).unwrap();

    let areas = db.venue_areas(now()).unwrap();

    assert_eq!(areas.len(), 2);
    assert_eq!((areas[0].city.as_str(), areas[0].state.as_str()), ("New York", "NY"));
    assert_eq!(areas[0].venues[0].id, bar.id);
    let sf: Vec<u64> = areas[1].venues.iter().map(|v| v.id).collect();
    assert_eq!(sf, vec![hop.id, park.id]);
}

#[test]
fn test_list_shows_joins_current_records() {
    let (_temp_file, mut db) = create_test_db();

    let hop = db.create_venue(&musical_hop()).unwrap();
    let park = db.create_venue(&park_square()).unwrap();
    let petals = db.create_artist(&guns_n_petals()).unwrap();
    let matt = db.create_artist(&matt_quevedo()).unwrap();

    db.create_show(&show(park.id, matt.id, "2019-06-15T23:00:00Z")).unwrap();
    db.create_show(&show(hop.id, petals.id, "2019-05-21T21:30:00Z")).unwrap();

    db.update_venue(
        hop.id,
        &VenueChanges {
            name: "The Musical Hop II".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: "123-123-1234".to_string(),
            genres: vec!["Jazz".to_string()],
            facebook_link: String::new(),
        },
    )
    .unwrap();

    let shows = db.list_shows().unwrap();
    assert_eq!(shows.len(), 2);
    assert_eq!(shows[0].venue_name, "The Musical Hop II");
    assert_eq!(shows[0].artist_name, "Guns N Petals");
    assert_eq!(shows[1].venue_id, park.id);
    assert_eq!(shows[1].artist_id, matt.id);
}

#[test]
fn test_duplicate_shows_are_allowed() {
    let (_temp_file, mut db) = create_test_db();

    let hop = db.create_venue(&musical_hop()).unwrap();
    let petals = db.create_artist(&guns_n_petals()).unwrap();

    let first = db.create_show(&show(hop.id, petals.id, NOW)).unwrap();
    let second = db.create_show(&show(hop.id, petals.id, NOW)).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(db.get_show(second.id).unwrap(), Some(second));
}

#[test]
fn test_update_venue_overwrites_editable_fields() {
    let (_temp_file, mut db) = create_test_db();

    let hop = db.create_venue(&musical_hop()).unwrap();

    let updated = db
        .update_venue(
            hop.id,
            &VenueChanges {
                name: "The Musical Hop".to_string(),
                ..Default::default()
            },
        )
        .expect("Failed to update venue")
        .expect("Venue should exist");

    assert_eq!(updated.city, "");
    assert_eq!(updated.address, "");
    assert_eq!(updated.phone.as_deref(), Some(""));
    assert!(updated.genres.is_empty());
    assert_eq!(updated.facebook_link.as_deref(), Some(""));

    // Not editable, so untouched
    assert_eq!(updated.website, hop.website);
    assert_eq!(updated.image_link, hop.image_link);
    assert_eq!(updated.seeking_description, hop.seeking_description);

    assert_eq!(db.get_venue(hop.id).unwrap(), Some(updated));
}

#[test]
fn test_update_missing_rows() {
    let (_temp_file, mut db) = create_test_db();

    assert!(db.update_venue(7, &VenueChanges::default()).unwrap().is_none());
    assert!(db.update_artist(7, &ArtistChanges::default()).unwrap().is_none());
}

#[test]
fn test_update_artist() {
    let (_temp_file, mut db) = create_test_db();

    let petals = db.create_artist(&guns_n_petals()).unwrap();
    let updated = db
        .update_artist(
            petals.id,
            &ArtistChanges {
                name: "Guns N Petals".to_string(),
                city: "Oakland".to_string(),
                state: "CA".to_string(),
                phone: "326-123-5000".to_string(),
                genres: vec!["Rock n Roll".to_string(), "Punk".to_string()],
                facebook_link: String::new(),
            },
        )
        .unwrap()
        .unwrap();

    assert_eq!(updated.city, "Oakland");
    assert_eq!(updated.genres, vec!["Rock n Roll", "Punk"]);
    assert_eq!(updated.seeking_venue, Some(true));
    assert_eq!(updated.website, petals.website);
}

#[test]
fn test_delete_venue_cascades() {
    let (_temp_file, mut db) = create_test_db();

    let hop = db.create_venue(&musical_hop()).unwrap();
    let bar = db.create_venue(&dueling_pianos()).unwrap();
    let petals = db.create_artist(&guns_n_petals()).unwrap();

    db.create_show(&show(hop.id, petals.id, "2035-04-01T20:00:00Z")).unwrap();
    let kept = db.create_show(&show(bar.id, petals.id, "2035-04-08T20:00:00Z")).unwrap();

    assert!(db.delete_venue(hop.id).expect("Failed to delete venue"));

    assert!(db.get_venue(hop.id).unwrap().is_none());
    let shows = db.list_shows().unwrap();
    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].venue_id, kept.venue_id);
    assert_eq!(db.count_upcoming_artist_shows(petals.id, now()).unwrap(), 1);

    assert!(!db.delete_venue(hop.id).unwrap());
}

#[test]
fn test_show_with_unknown_foreign_keys_is_rejected() {
    let (_temp_file, mut db) = create_test_db();

    let hop = db.create_venue(&musical_hop()).unwrap();
    let petals = db.create_artist(&guns_n_petals()).unwrap();

    let err = db.create_show(&show(hop.id, 999, NOW)).unwrap_err();
    assert!(matches!(err, DirectoryError::ConstraintViolation { .. }));

    let err = db.create_show(&show(999, petals.id, NOW)).unwrap_err();
    assert!(matches!(err, DirectoryError::ConstraintViolation { .. }));
    assert!(err.is_client_error());

    assert!(db.list_shows().unwrap().is_empty());
}

#[test]
fn test_legacy_database_gets_profile_columns() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    {
        let conn = Connection::open(temp_file.path()).unwrap();
        conn.execute_batch(
            "CREATE TABLE venues (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                city TEXT NOT NULL,
                state TEXT NOT NULL,
                address TEXT NOT NULL,
                phone TEXT,
                image_link TEXT,
                facebook_link TEXT,
                genres TEXT NOT NULL
            );
            CREATE TABLE artists (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                city TEXT NOT NULL,
                state TEXT NOT NULL,
                phone TEXT,
                genres TEXT NOT NULL,
                image_link TEXT,
                facebook_link TEXT
            );
            INSERT INTO venues (name, city, state, address, genres)
                VALUES ('The Musical Hop', 'San Francisco', 'CA', '1015 Folsom Street', 'Jazz,Reggae');
            INSERT INTO artists (name, city, state, genres)
                VALUES ('Guns N Petals', 'San Francisco', 'CA', 'Rock n Roll');",
        )
        .unwrap();
    }

    let db = Database::new(temp_file.path()).expect("Failed to migrate database");

    let venue = db.get_venue(1).unwrap().expect("Venue should survive");
    assert_eq!(venue.genres, vec!["Jazz", "Reggae"]);
    assert!(venue.seeking_talent);
    assert_eq!(venue.seeking_description, DEFAULT_VENUE_SEEKING_DESCRIPTION);
    assert_eq!(venue.website, None);

    let artist = db.get_artist(1).unwrap().expect("Artist should survive");
    assert_eq!(artist.seeking_venue, None);
    assert_eq!(artist.website, None);
}
