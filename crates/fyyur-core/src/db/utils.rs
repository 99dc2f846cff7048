//! Column encoding helpers shared by the query modules.

use jiff::Timestamp;
use rusqlite::{types::Type, Row};

/// Joins genres for the comma-delimited `genres` column.
pub(crate) fn encode_genres(genres: &[String]) -> String {
    genres.join(",")
}

/// Splits the `genres` column back into individual genres.
///
/// Whitespace around each genre is kept as stored. An empty column is an
/// empty list.
pub(crate) fn decode_genres(stored: &str) -> Vec<String> {
    if stored.is_empty() {
        Vec::new()
    } else {
        stored.split(',').map(String::from).collect()
    }
}

/// Case-insensitive substring match used by venue and artist search.
///
/// Matching anywhere in the name already covers prefix and suffix matches.
/// The empty term matches every name.
pub(crate) fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

/// Storage form of a start time.
pub(crate) fn timestamp_to_column(ts: Timestamp) -> i64 {
    ts.as_microsecond()
}

/// Reads a start time stored as microseconds since the epoch.
pub(crate) fn timestamp_from_row(row: &Row, idx: usize) -> rusqlite::Result<Timestamp> {
    let micros: i64 = row.get(idx)?;
    Timestamp::from_microsecond(micros)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, Box::new(e)))
}

/// Reads an SQLite integer rowid as an ID.
pub(crate) fn id_from_row(row: &Row, idx: usize) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(idx)? as u64)
}

/// Reads an integer count column.
pub(crate) fn count_from_row(row: &Row, idx: usize) -> rusqlite::Result<u32> {
    Ok(row.get::<_, i64>(idx)?.max(0) as u32)
}
