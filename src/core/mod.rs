//! Aggregation pipeline.
//!
//! This module contains:
//! - [`filter`] - Sender and date selection
//! - [`models`] - Typed reducer outputs
//! - [`frequency`] - Ranked counting and percentages
//! - [`stats`] - Basic counters, most-active users, average message length
//! - [`timeline`] - Monthly/daily timelines, weekday activity, heatmap, busiest hour
//! - [`lexical`] - Common words, word cloud, emoji usage
//! - [`sentiment`] - Monthly sentiment trend
//!
//! Every reducer is a pure function over `&[Record]`. None of them depends on
//! another's output, so they can run in any order.
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::core::{apply_filters, basic_stats, most_active_time, FilterConfig};
//! use chatlens::parse;
//!
//! let records = parse("[01/02/2024, 14:05:09] Alice: Hi Bob\n");
//! let selected = apply_filters(&records, &FilterConfig::new().with_user("Alice"));
//!
//! assert_eq!(basic_stats(&selected).total_words, 2);
//! assert_eq!(most_active_time(&selected).label(), "14-15");
//! ```

pub mod filter;
pub mod frequency;
pub mod lexical;
pub mod models;
pub mod sentiment;
pub mod stats;
pub mod timeline;

pub use filter::{FilterConfig, apply_date_range, apply_filters};
pub use lexical::{common_words, eligible_tokens, emoji_stats, word_cloud};
pub use models::{
    AverageLength, BasicStats, DailyPoint, EmojiFrequency, Heatmap, MonthlyPoint, MostActiveTime,
    SentimentPoint, UserShare, WeekdayCount, WordFrequency,
};
pub use sentiment::{SentimentLabel, Thresholds, sentiment_timeline};
pub use stats::{average_message_length, basic_stats, most_active_users};
pub use timeline::{
    activity_heatmap, daily_timeline, most_active_time, monthly_timeline, weekly_activity,
};
