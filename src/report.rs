//! Response bodies.
//!
//! [`AnalysisReport`] is the full bundle returned for a transcript;
//! [`ErrorBody`] is what a caller sees when the request fails.

use serde::Serialize;

use crate::core::models::{
    AverageLength, BasicStats, DailyPoint, EmojiFrequency, Heatmap, MonthlyPoint, MostActiveTime,
    SentimentPoint, UserShare, WeekdayCount, WordFrequency,
};
use crate::error::{ChatlensError, Result};

/// Every statistic computed for one request.
///
/// Serializes to the JSON object clients consume; field names are the keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Senders in sorted order, system sender removed, `"Overall"` first
    pub user_list: Vec<String>,
    pub stats: BasicStats,
    /// Always computed over every sender
    pub most_active_users_percent: Vec<UserShare>,
    /// `data:` URI, or `null` when no word survived stop-word removal
    pub wordcloud: Option<String>,
    pub common_words: Vec<WordFrequency>,
    pub emoji_stats: Vec<EmojiFrequency>,
    pub monthly_timeline: Vec<MonthlyPoint>,
    pub daily_timeline: Vec<DailyPoint>,
    pub weekly_activity: Vec<WeekdayCount>,
    pub activity_heatmap: Heatmap,
    pub avg_message_length: Vec<AverageLength>,
    pub sentiment_timeline: Vec<SentimentPoint>,
    pub most_active_time: MostActiveTime,
}

impl AnalysisReport {
    /// Serializes to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Json`] if serialization fails.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Body returned instead of a report when a request fails.
///
/// ```
/// use chatlens::report::ErrorBody;
/// use chatlens::ChatlensError;
///
/// let body = ErrorBody::from_error(&ChatlensError::MissingFile);
/// assert_eq!(body.error, "No file part");
/// assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"error":"No file part"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    /// Builds the caller-facing body. Internal faults get an opaque message.
    pub fn from_error(err: &ChatlensError) -> Self {
        Self {
            error: err.user_message(),
        }
    }
}

impl From<&ChatlensError> for ErrorBody {
    fn from(err: &ChatlensError) -> Self {
        Self::from_error(err)
    }
}
