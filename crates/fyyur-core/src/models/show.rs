//! Show model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A booking of one artist at one venue at a start time.
///
/// Duplicate bookings for the same venue, artist and time are allowed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Show {
    /// Unique identifier for the show
    pub id: u64,

    /// Venue hosting the show
    pub venue_id: u64,

    /// Artist performing
    pub artist_id: u64,

    /// Start of the show (UTC, microsecond precision)
    pub start_time: Timestamp,
}
