//! Presentation adapter: view models and markdown display.
//!
//! Entities and aggregates from the query layer are turned into flat view
//! models here. Every view model derives `Serialize` so it can be handed to a
//! template or printed as JSON, and implements `Display` as markdown for the
//! terminal renderer and the MCP tools.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  View Models &  │    │   Formatted     │
//! │ (Venue, Artist, │───▶│  Result Types   │───▶│    Output       │
//! │  ShowPartition) │    │                 │    │ (Terminal/MCP)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Genres are always handed on as the individual stored strings, with any
//! surrounding whitespace kept.
//!
//! ## Module Organization
//!
//! - [`views`]: Single-record views (VenueDetail, ArtistDetail, VenueForm,
//!   ArtistForm)
//! - [`collections`]: Listings (VenueAreas, ArtistEntries, ShowListings,
//!   SearchResults)
//! - [`results`]: Operation result types (CreateResult, UpdateResult,
//!   DeleteResult)
//! - [`status`]: Flash messages (OperationStatus)
//! - [`datetime`]: Start time formats
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use fyyur_core::display::{OperationStatus, SearchResults};
//!
//! let results = SearchResults::new("zzz", vec![]);
//! assert_eq!(results.count, 0);
//!
//! let flash = OperationStatus::venue_not_listed("The Musical Hop");
//! assert_eq!(
//!     flash.to_string(),
//!     "Error: An error occurred. Venue The Musical Hop could not be listed.\n"
//! );
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;
pub mod views;

// Re-export commonly used types for convenience
pub use collections::{ArtistEntries, ArtistEntry, SearchResults, ShowListings, VenueAreas};
pub use datetime::{DateFormat, ShowTime};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
pub use views::{ArtistDetail, ArtistForm, VenueDetail, VenueForm};
