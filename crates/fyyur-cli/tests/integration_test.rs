//! Integration tests comparing CLI output with the core Display implementations
//!
//! The CLI and the MCP tools print the same view models, so output from the
//! binary must match what the core renders for the same records.

use std::process::Command;

use fyyur_core::{
    params::{CreateArtist, CreateShow, Id},
    Directory, DirectoryBuilder,
};
use tempfile::TempDir;

/// Helper function to create a test directory with a temporary database
async fn create_test_directory() -> (Directory, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let directory = DirectoryBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create directory");

    (directory, temp_dir)
}

/// Run a CLI command and capture its output
fn run_cli_command(db_path: &str, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fyyur"));
    cmd.arg("--no-color").arg("--database-file").arg(db_path);

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[tokio::test]
async fn test_venue_detail_display_consistency() {
    let (directory, temp_dir) = create_test_directory().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    run_cli_command(
        db_str,
        &[
            "venue",
            "create",
            "The Dueling Pianos Bar",
            "--city",
            "New York",
            "--state",
            "NY",
            "--address",
            "335 Delancey Street",
            "--genres",
            "Classical,R&B,Hip-Hop",
            "--seeking-talent",
            "false",
        ],
    );

    let cli_output = run_cli_command(db_str, &["venue", "show", "1"]);
    let detail = directory
        .show_venue_detail(&Id { id: 1 })
        .await
        .expect("Venue should exist");

    assert_eq!(cli_output, detail.to_string());
    assert!(!cli_output.contains("Seeking talent"));
}

#[tokio::test]
async fn test_artist_listing_display_consistency() {
    let (directory, temp_dir) = create_test_directory().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    for name in ["Matt Quevedo", "The Wild Sax Band"] {
        directory
            .create_artist(&CreateArtist {
                name: name.to_string(),
                city: "New York".to_string(),
                state: "NY".to_string(),
                genres: vec!["Jazz".to_string()],
                ..Default::default()
            })
            .await
            .expect("Failed to create artist");
    }

    let cli_output = run_cli_command(db_str, &["artist", "list"]);
    let entries = directory
        .list_artist_entries()
        .await
        .expect("Failed to list artists");

    assert_eq!(cli_output, format!("# Artists\n\n{entries}"));
    assert!(cli_output.contains("- Matt Quevedo (ID: 1)"));
    assert!(cli_output.contains("- The Wild Sax Band (ID: 2)"));
}

#[tokio::test]
async fn test_show_created_in_core_visible_from_cli() {
    let (directory, temp_dir) = create_test_directory().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    run_cli_command(
        db_str,
        &[
            "venue",
            "create",
            "Park Square Live Music & Coffee",
            "--city",
            "San Francisco",
            "--state",
            "CA",
            "--address",
            "34 Whiskey Moore Ave",
            "--genres",
            "Rock n Roll,Jazz",
        ],
    );
    run_cli_command(
        db_str,
        &[
            "artist",
            "create",
            "The Wild Sax Band",
            "--city",
            "San Francisco",
            "--state",
            "CA",
            "--genres",
            "Jazz,Classical",
        ],
    );

    directory
        .create_show(&CreateShow {
            venue_id: 1,
            artist_id: 1,
            start_time: "2035-04-01T20:00:00Z".to_string(),
        })
        .await
        .expect("Failed to create show");

    let cli_output = run_cli_command(db_str, &["show", "list"]);
    let listings = directory
        .list_show_listings()
        .await
        .expect("Failed to list shows");

    assert_eq!(cli_output, format!("# Shows\n\n{listings}"));
    assert!(cli_output.contains("**The Wild Sax Band** at **Park Square Live Music & Coffee**"));
}

#[tokio::test]
async fn test_search_json_matches_view_model() {
    let (directory, temp_dir) = create_test_directory().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    directory
        .create_artist(&CreateArtist {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            genres: vec!["Rock n Roll".to_string()],
            ..Default::default()
        })
        .await
        .expect("Failed to create artist");

    let cli_output = run_cli_command(db_str, &["--json", "artist", "search", "A"]);
    let results = directory
        .search_artists_result(&fyyur_core::Search {
            search_term: "A".to_string(),
        })
        .await
        .expect("Failed to search artists");

    let from_cli: serde_json::Value =
        serde_json::from_str(&cli_output).expect("CLI output is not valid JSON");
    let from_core = serde_json::to_value(&results).expect("Failed to serialize results");
    assert_eq!(from_cli, from_core);
    assert_eq!(from_cli["count"], 1);
}
