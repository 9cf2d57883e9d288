//! # Chatlens
//!
//! A Rust library for turning exported WhatsApp chat transcripts into
//! descriptive statistics.
//!
//! ## Overview
//!
//! Chatlens reads the plain-text export WhatsApp produces (Android and iOS
//! line shapes, 12- and 24-hour clocks, day-first or month-first dates) and
//! computes:
//! - message, word, media and link counts
//! - per-user activity shares and average message length
//! - monthly and daily timelines, weekday activity, a day × hour heatmap
//! - common words, emoji usage and a word-cloud image
//! - a monthly sentiment trend
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let raw = "[01/02/24, 09:00:00] Alice: Hi Bob\n\
//!                [01/02/24, 09:05:00] Bob: <Media omitted>\n";
//!
//!     let records = parse(raw);
//!     assert_eq!(records.len(), 2);
//!
//!     let report = Analyzer::new().analyze(&records, &FilterConfig::new())?;
//!     assert_eq!(report.stats.total_messages, 2);
//!     assert_eq!(report.stats.media_shared, 1);
//!     assert_eq!(report.stats.total_words, 2);
//!
//!     println!("{}", report.to_json(true)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - transcript text → [`Record`]s
//!   - [`parse`], [`TranscriptParser`](parser::TranscriptParser)
//! - [`parsing`] - line grammars and timestamp formats
//! - [`record`] - [`Record`], [`HourBucket`] and the sentinel values
//! - [`core`] - the reducers and [`FilterConfig`](core::FilterConfig)
//! - [`capabilities`] - word-cloud, sentiment and emoji traits with default implementations
//! - [`stopwords`] - [`StopWords`]
//! - [`analyzer`] - [`Analyzer`], runs every reducer for one request
//! - [`report`] - [`AnalysisReport`](report::AnalysisReport), [`ErrorBody`](report::ErrorBody)
//! - [`service`] - request validation and status codes
//! - [`config`] - parser and analyzer configuration
//! - [`error`] - [`ChatlensError`], [`Result`]
//! - [`prelude`] - convenient re-exports

pub mod analyzer;
pub mod capabilities;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod parser;
pub mod parsing;
pub mod record;
pub mod report;
pub mod service;
pub mod stopwords;

// Re-export the main types at the crate root for convenience
pub use analyzer::Analyzer;
pub use error::{ChatlensError, Result};
pub use parser::parse;
pub use record::{HourBucket, Record};
pub use stopwords::StopWords;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Records
    pub use crate::record::{GROUP_NOTIFICATION, HourBucket, MEDIA_OMITTED, OVERALL, Record};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parser::{TranscriptParser, parse};

    // Configuration
    pub use crate::config::{AnalyzerConfig, CloudConfig, ParserConfig};

    // Filtering
    pub use crate::core::filter::{FilterConfig, apply_filters};

    // Analysis
    pub use crate::analyzer::Analyzer;
    pub use crate::report::{AnalysisReport, ErrorBody};
    pub use crate::stopwords::StopWords;

    // Capabilities
    pub use crate::capabilities::{
        CloudRenderer, EmojiClassifier, LexiconScorer, SentimentScorer, SvgCloudRenderer,
        UnicodeEmoji,
    };
}
