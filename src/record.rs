//! Parsed transcript record.
//!
//! This module provides [`Record`], one structured chat message produced by
//! the transcript parser, and [`HourBucket`], the one-hour window label used
//! by the activity heatmap and the "most active time" statistic.
//!
//! # Overview
//!
//! A record consists of:
//! - `timestamp` - resolved with a single format for the whole transcript
//! - `sender` - display name, or [`GROUP_NOTIFICATION`] for system events
//! - `body` - message text, or [`MEDIA_OMITTED`] for stripped attachments
//!
//! Calendar fields (year, month name, weekday, hour bucket, ...) are derived
//! from the timestamp on demand, so they can never disagree with it.
//!
//! # Examples
//!
//! ```
//! use chatlens::Record;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(14, 5, 0)
//!     .unwrap();
//! let record = Record::new(ts, "Alice", "Hello there");
//!
//! assert_eq!(record.month_name(), "February");
//! assert_eq!(record.day_name(), "Thursday");
//! assert_eq!(record.hour_bucket().label(), "14-15");
//! assert_eq!(record.word_count(), 2);
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize, Serializer};

/// Sender used for joins, leaves, title changes and other system events.
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Body WhatsApp writes in place of an attachment when exporting without media.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// Selector meaning "no sender filter".
pub const OVERALL: &str = "Overall";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A single parsed chat message.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | When the message was sent (export-local time) |
/// | `sender` | `String` | Display name or [`GROUP_NOTIFICATION`] |
/// | `body` | `String` | Message text or [`MEDIA_OMITTED`] |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// When the message was sent.
    pub timestamp: NaiveDateTime,

    /// Display name of the author, or the system sentinel.
    pub sender: String,

    /// Message text.
    ///
    /// May contain newlines when continuation merging is enabled in the parser.
    pub body: String,
}

impl Record {
    /// Creates a new record.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            body: body.into(),
        }
    }

    /// Creates a system/group-notification record.
    pub fn notification(timestamp: NaiveDateTime, body: impl Into<String>) -> Self {
        Self::new(timestamp, GROUP_NOTIFICATION, body)
    }

    // =========================================================================
    // Classification
    // =========================================================================

    /// Returns `true` for system/group-notification events.
    pub fn is_notification(&self) -> bool {
        self.sender == GROUP_NOTIFICATION
    }

    /// Returns `true` if the body is the omitted-media placeholder.
    pub fn is_media(&self) -> bool {
        self.body.trim() == MEDIA_OMITTED
    }

    /// Returns `true` for human-written text: neither a notification nor a
    /// media placeholder.
    pub fn is_text(&self) -> bool {
        !self.is_notification() && !self.is_media()
    }

    /// Number of whitespace-separated tokens in the body.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }

    // =========================================================================
    // Derived calendar fields
    // =========================================================================

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    /// Month number, 1-12.
    pub fn month(&self) -> u32 {
        self.timestamp.month()
    }

    /// English month name, e.g. `"February"`.
    pub fn month_name(&self) -> &'static str {
        month_name(self.month())
    }

    /// Day of month, 1-31.
    pub fn day(&self) -> u32 {
        self.timestamp.day()
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday()
    }

    /// English weekday name, e.g. `"Thursday"`.
    pub fn day_name(&self) -> &'static str {
        weekday_name(self.weekday())
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Minute, 0-59.
    pub fn minute(&self) -> u32 {
        self.timestamp.minute()
    }

    /// Calendar date without the time.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// One-hour window this record falls into.
    pub fn hour_bucket(&self) -> HourBucket {
        HourBucket::from_hour(self.hour())
    }
}

/// English name for a month number. Out-of-range values map to `""`.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[(month - 1) as usize],
        _ => "",
    }
}

/// English name for a weekday.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// A one-hour window of the day, labelled `"H-H+1"`.
///
/// Hour 0 is labelled `"00-1"` and hour 23 `"23-00"`; every other hour `h`
/// is `"h-(h+1)"` without zero padding. There are exactly 24 buckets.
///
/// ```
/// use chatlens::HourBucket;
///
/// assert_eq!(HourBucket::from_hour(0).label(), "00-1");
/// assert_eq!(HourBucket::from_hour(9).label(), "9-10");
/// assert_eq!(HourBucket::from_hour(23).label(), "23-00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourBucket(u8);

impl HourBucket {
    /// Number of distinct buckets.
    pub const COUNT: usize = 24;

    /// Bucket for an hour of day. Hours above 23 wrap around.
    pub fn from_hour(hour: u32) -> Self {
        HourBucket((hour % 24) as u8)
    }

    /// All buckets in hour order.
    pub fn all() -> impl Iterator<Item = HourBucket> {
        (0..24u8).map(HourBucket)
    }

    /// Starting hour of the window.
    pub fn hour(self) -> u32 {
        u32::from(self.0)
    }

    /// Position of the bucket in `0..COUNT`.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Display label.
    pub fn label(self) -> String {
        match self.0 {
            23 => "23-00".to_string(),
            0 => "00-1".to_string(),
            h => format!("{}-{}", h, h + 1),
        }
    }
}

impl fmt::Display for HourBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl Serialize for HourBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}
