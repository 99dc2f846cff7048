//! DateTime display utilities.
//!
//! Show start times are rendered in the system time zone, either in the long
//! form used on venue and artist pages or the compact form used in listings.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp, Zoned};
use serde::{Deserialize, Serialize};

/// Named formats for show start times.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    /// `Tuesday May, 21, 2019 at 9:30PM`
    Full,
    /// `Tue 05, 21, 2019 9:30PM`
    #[default]
    Medium,
}

impl DateFormat {
    fn pattern(self) -> &'static str {
        match self {
            DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
            DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
        }
    }

    /// Formats an already zoned date-time.
    pub fn format_zoned(self, zoned: &Zoned) -> String {
        zoned.strftime(self.pattern()).to_string()
    }
}

/// A show start time paired with the format to render it in.
///
/// ```rust
/// use fyyur_core::display::{DateFormat, ShowTime};
/// use jiff::Timestamp;
///
/// let start: Timestamp = "2019-05-21T21:30:00Z".parse().unwrap();
/// let rendered = ShowTime::new(&start, DateFormat::Full).to_string();
/// assert!(rendered.contains("2019 at"));
/// ```
pub struct ShowTime<'a> {
    pub timestamp: &'a Timestamp,
    pub format: DateFormat,
}

impl<'a> ShowTime<'a> {
    pub fn new(timestamp: &'a Timestamp, format: DateFormat) -> Self {
        Self { timestamp, format }
    }

    pub fn full(timestamp: &'a Timestamp) -> Self {
        Self::new(timestamp, DateFormat::Full)
    }

    pub fn medium(timestamp: &'a Timestamp) -> Self {
        Self::new(timestamp, DateFormat::Medium)
    }
}

impl<'a> fmt::Display for ShowTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zoned = self.timestamp.to_zoned(TimeZone::system());
        f.write_str(&self.format.format_zoned(&zoned))
    }
}
