//! Core library for the Fyyur booking directory.
//!
//! Venues and artists are listed with profile data, and shows book an artist
//! at a venue at a start time. This crate holds the SQLite schema, the query
//! layer with its aggregates (upcoming show counts, the past/upcoming split,
//! case-insensitive name search), the async [`Directory`] API, and the view
//! models the outer interfaces render.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): persisted entities and derived summaries
//! - **View Models** ([`display`]): flattened, serializable views with
//!   markdown [`std::fmt::Display`] implementations
//! - **Terminal Rendering**: styled markdown output via the CLI's renderer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use fyyur_core::{params::CreateVenue, DirectoryBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let directory = DirectoryBuilder::new()
//!     .with_database_path(Some("fyyur.db"))
//!     .build()
//!     .await?;
//!
//! let result = directory
//!     .create_venue_result(&CreateVenue {
//!         name: "The Musical Hop".to_string(),
//!         city: "San Francisco".to_string(),
//!         state: "CA".to_string(),
//!         address: "1015 Folsom Street".to_string(),
//!         genres: vec!["Jazz".to_string(), "Reggae".to_string()],
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{result}");
//!
//! for area in &directory.list_venue_areas().await? {
//!     println!("{}, {}", area.city, area.state);
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod directory;
pub mod display;
pub mod error;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use db::Database;
pub use directory::{Directory, DirectoryBuilder};
pub use display::{
    ArtistDetail, ArtistEntries, ArtistForm, CreateResult, DeleteResult, OperationStatus,
    SearchResults, ShowListings, UpdateResult, VenueAreas, VenueDetail, VenueForm,
};
pub use error::{DirectoryError, Result};
pub use models::{Artist, EntityKind, ListingEntry, Show, ShowPartition, Venue, VenueArea};
pub use params::{CreateArtist, CreateShow, CreateVenue, Id, Search, UpdateArtist, UpdateVenue};
