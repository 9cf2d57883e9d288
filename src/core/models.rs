//! Typed outputs of the reducers.
//!
//! Every reducer returns one of these concrete shapes. Field names are the
//! keys clients read from the JSON report.

use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::record::HourBucket;

/// Headline counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BasicStats {
    pub total_messages: usize,
    pub total_words: usize,
    pub media_shared: usize,
    pub links_shared: usize,
}

/// One sender's share of all messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub name: String,
    /// Percent of total messages, two decimals
    pub percent: f64,
}

/// A token from the common-words table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
    /// Percent of all eligible tokens, two decimals
    pub percent: f64,
}

/// An emoji from the emoji table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmojiFrequency {
    pub emoji: String,
    pub count: usize,
    /// Percent of all emoji occurrences, two decimals
    pub percent: f64,
}

/// Messages in one calendar month, labelled `"Month-Year"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    pub time: String,
    pub message: usize,
}

/// Messages on one calendar date, serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub only_date: NaiveDate,
    pub message: usize,
}

/// Messages on one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayCount {
    pub day: String,
    pub count: usize,
}

/// Mean words per message for one sender.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AverageLength {
    pub user: String,
    /// Two decimals
    pub avg_length: f64,
}

/// Sentiment label counts for one `YYYY-MM` month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentPoint {
    pub month_year: String,
    #[serde(rename = "Positive")]
    pub positive: usize,
    #[serde(rename = "Negative")]
    pub negative: usize,
    #[serde(rename = "Neutral")]
    pub neutral: usize,
}

/// Day-name × hour-bucket message counts.
///
/// Rows are the weekdays present in the data, Monday first. Columns are the
/// hour buckets present in the data, in hour order. Every cell is filled;
/// combinations that never occur hold zero.
///
/// ```
/// use chatlens::core::models::Heatmap;
///
/// let heatmap = Heatmap::default();
/// assert!(heatmap.is_empty());
/// assert_eq!(heatmap.get("Monday", "14-15"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    /// Row labels
    pub days: Vec<String>,
    /// Column labels
    pub buckets: Vec<HourBucket>,
    /// `counts[row][column]`
    pub counts: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Returns `true` if the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Count for a day name and bucket label, or `None` if either axis
    /// does not contain it.
    pub fn get(&self, day: &str, bucket: &str) -> Option<usize> {
        let row = self.days.iter().position(|d| d == day)?;
        let col = self.buckets.iter().position(|b| b.label() == bucket)?;
        Some(self.counts[row][col])
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

/// The busiest hour bucket, or "not available" for an empty selection.
///
/// Serializes as the bucket label or `"N/A"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MostActiveTime {
    Bucket(HourBucket),
    NotAvailable,
}

impl MostActiveTime {
    /// The label clients display.
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MostActiveTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MostActiveTime::Bucket(bucket) => write!(f, "{bucket}"),
            MostActiveTime::NotAvailable => f.write_str("N/A"),
        }
    }
}

impl Serialize for MostActiveTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
