//! Configuration types for the parser and the analyzer.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - how transcript lines are turned into records
//! - [`AnalyzerConfig`] - table sizes, sentiment thresholds, stop words
//! - [`CloudConfig`] - word-cloud canvas settings
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalyzerConfig, ParserConfig};
//! use chatlens::parser::TranscriptParser;
//!
//! let parser = TranscriptParser::with_config(
//!     ParserConfig::new().with_notifications(true),
//! );
//!
//! let analyzer_config = AnalyzerConfig::new()
//!     .with_top_words(20)
//!     .with_stop_words_path("stop_hinglish.txt");
//! # let _ = (parser, analyzer_config);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for transcript parsing.
///
/// The defaults reproduce a strict line-by-line reading: every line that
/// matches the selected grammar becomes a record and everything else is
/// dropped.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
///
/// let config = ParserConfig::new()
///     .with_notifications(true)
///     .with_merge_continuations(true);
/// assert!(config.notifications);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Keep timestamped lines without a `Sender:` separator as
    /// group-notification records (default: false)
    pub notifications: bool,

    /// Append unmatched lines to the previous record's body (default: false)
    pub merge_continuations: bool,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether system lines become group-notification records.
    #[must_use]
    pub fn with_notifications(mut self, enabled: bool) -> Self {
        self.notifications = enabled;
        self
    }

    /// Sets whether multi-line message bodies are reassembled.
    #[must_use]
    pub fn with_merge_continuations(mut self, enabled: bool) -> Self {
        self.merge_continuations = enabled;
        self
    }
}

/// Word-cloud canvas settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudConfig {
    /// Canvas width in pixels (default: 500)
    pub width: u32,

    /// Canvas height in pixels (default: 500)
    pub height: u32,

    /// Smallest font size in pixels (default: 10)
    pub min_font_size: u32,

    /// Largest font size in pixels (default: 64)
    pub max_font_size: u32,

    /// Maximum number of distinct words drawn (default: 200)
    pub max_words: usize,

    /// Background fill (default: "white")
    pub background: String,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            min_font_size: 10,
            max_font_size: 64,
            max_words: 200,
            background: "white".to_string(),
        }
    }
}

impl CloudConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the canvas size.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the maximum number of words drawn.
    #[must_use]
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }
}

/// Configuration for the aggregation pass.
///
/// # Example
///
/// ```rust
/// use chatlens::config::AnalyzerConfig;
///
/// let config = AnalyzerConfig::default();
/// assert_eq!(config.top_words, 10);
/// assert_eq!(config.positive_threshold, 0.05);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Rows in the common-words table (default: 10)
    pub top_words: usize,

    /// Rows in the emoji table (default: 10)
    pub top_emojis: usize,

    /// Compound score above which a message is Positive (default: 0.05)
    pub positive_threshold: f64,

    /// Compound score below which a message is Negative (default: -0.05)
    pub negative_threshold: f64,

    /// Stop-word file; `None` uses the built-in list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_words_path: Option<PathBuf>,

    /// Word-cloud canvas settings
    #[serde(default)]
    pub cloud: CloudConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_words: 10,
            top_emojis: 10,
            positive_threshold: 0.05,
            negative_threshold: -0.05,
            stop_words_path: None,
            cloud: CloudConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of rows in the common-words table.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the number of rows in the emoji table.
    #[must_use]
    pub fn with_top_emojis(mut self, n: usize) -> Self {
        self.top_emojis = n;
        self
    }

    /// Sets the sentiment label thresholds.
    #[must_use]
    pub fn with_sentiment_thresholds(mut self, positive: f64, negative: f64) -> Self {
        self.positive_threshold = positive;
        self.negative_threshold = negative;
        self
    }

    /// Reads stop words from this file instead of the built-in list.
    #[must_use]
    pub fn with_stop_words_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stop_words_path = Some(path.into());
        self
    }

    /// Sets the word-cloud canvas settings.
    #[must_use]
    pub fn with_cloud(mut self, cloud: CloudConfig) -> Self {
        self.cloud = cloud;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_defaults() {
        let config = ParserConfig::default();
        assert!(!config.notifications);
        assert!(!config.merge_continuations);
    }

    #[test]
    fn test_parser_config_builder() {
        let config = ParserConfig::new()
            .with_notifications(true)
            .with_merge_continuations(true);
        assert!(config.notifications);
        assert!(config.merge_continuations);
    }

    #[test]
    fn test_analyzer_config_defaults() {
        let config = AnalyzerConfig::new();
        assert_eq!(config.top_words, 10);
        assert_eq!(config.top_emojis, 10);
        assert!((config.positive_threshold - 0.05).abs() < f64::EPSILON);
        assert!((config.negative_threshold + 0.05).abs() < f64::EPSILON);
        assert!(config.stop_words_path.is_none());
        assert_eq!(config.cloud.width, 500);
    }

    #[test]
    fn test_analyzer_config_builder() {
        let config = AnalyzerConfig::new()
            .with_top_words(5)
            .with_top_emojis(3)
            .with_sentiment_thresholds(0.2, -0.2)
            .with_stop_words_path("words.txt")
            .with_cloud(CloudConfig::new().with_size(800, 400).with_max_words(50));

        assert_eq!(config.top_words, 5);
        assert_eq!(config.top_emojis, 3);
        assert_eq!(config.stop_words_path, Some(PathBuf::from("words.txt")));
        assert_eq!(config.cloud.width, 800);
        assert_eq!(config.cloud.max_words, 50);
    }

    #[test]
    fn test_config_serde() {
        let config = AnalyzerConfig::new().with_top_words(7);
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("stop_words_path"));
        let back: AnalyzerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.top_words, 7);
        assert_eq!(back.cloud, config.cloud);
        assert!(back.stop_words_path.is_none());
    }
}
