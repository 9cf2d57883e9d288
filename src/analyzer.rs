//! One-request analysis over a parsed transcript.
//!
//! [`Analyzer`] owns the state shared by every request (stop words, the
//! word-cloud renderer, the sentiment scorer and the emoji classifier). It is
//! built once at startup and then only read, so one instance can serve
//! requests from many threads.
//!
//! # Example
//!
//! ```rust
//! use chatlens::Analyzer;
//! use chatlens::core::FilterConfig;
//!
//! # fn main() -> chatlens::Result<()> {
//! let analyzer = Analyzer::new();
//! let report = analyzer.analyze_text(
//!     "01/02/24, 9:00 AM - Alice: pizza tonight?\n\
//!      01/02/24, 9:05 AM - Bob: yes pizza 🍕",
//!     &FilterConfig::new(),
//! )?;
//!
//! assert_eq!(report.user_list, ["Overall", "Alice", "Bob"]);
//! assert_eq!(report.common_words[0].word, "pizza");
//! assert_eq!(report.most_active_time.label(), "9-10");
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;
use std::collections::BTreeSet;

use tracing::debug;

use crate::capabilities::{
    CloudRenderer, EmojiClassifier, LexiconScorer, SentimentScorer, SvgCloudRenderer, UnicodeEmoji,
};
use crate::config::{AnalyzerConfig, ParserConfig};
use crate::core::{
    FilterConfig, Thresholds, activity_heatmap, apply_date_range, apply_filters,
    average_message_length, basic_stats, common_words, daily_timeline, emoji_stats,
    most_active_time, most_active_users, monthly_timeline, sentiment_timeline, weekly_activity,
    word_cloud,
};
use crate::error::{ChatlensError, Result};
use crate::parser::TranscriptParser;
use crate::record::{GROUP_NOTIFICATION, OVERALL, Record};
use crate::report::AnalysisReport;
use crate::stopwords::StopWords;

/// Parses transcripts and runs every reducer over them.
pub struct Analyzer {
    config: AnalyzerConfig,
    parser: TranscriptParser,
    stop_words: Cow<'static, StopWords>,
    renderer: Box<dyn CloudRenderer>,
    scorer: Box<dyn SentimentScorer>,
    emoji: Box<dyn EmojiClassifier>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("config", &self.config)
            .field("parser", &self.parser)
            .field("stop_words", &self.stop_words.len())
            .finish_non_exhaustive()
    }
}

impl Analyzer {
    /// Creates an analyzer with default configuration and the built-in
    /// capabilities.
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Creates an analyzer from configuration.
    ///
    /// A configured stop-word file is read here, once; if it cannot be read
    /// the list degrades to empty. Without a file the process-wide list is
    /// used.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        let stop_words = match &config.stop_words_path {
            Some(path) => Cow::Owned(StopWords::load(path)),
            None => Cow::Borrowed(StopWords::global()),
        };
        Self {
            renderer: Box::new(SvgCloudRenderer::new(config.cloud.clone())),
            scorer: Box::new(LexiconScorer::new()),
            emoji: Box::new(UnicodeEmoji),
            parser: TranscriptParser::new(),
            stop_words,
            config,
        }
    }

    /// Uses a custom parser configuration.
    #[must_use]
    pub fn with_parser_config(mut self, config: ParserConfig) -> Self {
        self.parser = TranscriptParser::with_config(config);
        self
    }

    /// Replaces the stop-word list.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = Cow::Owned(stop_words);
        self
    }

    /// Replaces the word-cloud renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: impl CloudRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Replaces the sentiment scorer.
    #[must_use]
    pub fn with_scorer(mut self, scorer: impl SentimentScorer + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    /// Replaces the emoji classifier.
    #[must_use]
    pub fn with_emoji(mut self, classifier: impl EmojiClassifier + 'static) -> Self {
        self.emoji = Box::new(classifier);
        self
    }

    /// Returns the analysis configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Returns the transcript parser.
    pub fn parser(&self) -> &TranscriptParser {
        &self.parser
    }

    /// Returns the stop-word list in use.
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Parses a transcript and analyzes it.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Unprocessable`] when the transcript yields no
    /// records, or whatever [`analyze`](Self::analyze) returns.
    pub fn analyze_text(&self, raw: &str, filter: &FilterConfig) -> Result<AnalysisReport> {
        let records = self.parser.parse_str(raw);
        if records.is_empty() {
            return Err(ChatlensError::Unprocessable);
        }
        self.analyze(&records, filter)
    }

    /// Runs every reducer over `records`.
    ///
    /// The filter narrows the records every reducer sees, with one exception:
    /// the most-active-users table ignores the sender selection and always
    /// covers everyone in the date range.
    ///
    /// # Errors
    ///
    /// Only the word-cloud renderer can fail.
    pub fn analyze(&self, records: &[Record], filter: &FilterConfig) -> Result<AnalysisReport> {
        let selected = apply_filters(records, filter);
        let everyone = apply_date_range(records, filter);
        debug!(
            total = records.len(),
            selected = selected.len(),
            user = filter.user().unwrap_or(OVERALL),
            "running reducers"
        );

        let thresholds = Thresholds {
            positive: self.config.positive_threshold,
            negative: self.config.negative_threshold,
        };

        Ok(AnalysisReport {
            user_list: user_list(records),
            stats: basic_stats(&selected),
            most_active_users_percent: most_active_users(&everyone),
            wordcloud: word_cloud(&selected, &self.stop_words, self.renderer.as_ref())?,
            common_words: common_words(&selected, &self.stop_words, self.config.top_words),
            emoji_stats: emoji_stats(&selected, self.emoji.as_ref(), self.config.top_emojis),
            monthly_timeline: monthly_timeline(&selected),
            daily_timeline: daily_timeline(&selected),
            weekly_activity: weekly_activity(&selected),
            activity_heatmap: activity_heatmap(&selected),
            avg_message_length: average_message_length(&selected),
            sentiment_timeline: sentiment_timeline(&selected, self.scorer.as_ref(), thresholds),
            most_active_time: most_active_time(&selected),
        })
    }
}

/// Distinct senders in sorted order, system sender removed, `"Overall"`
/// first.
///
/// ```
/// use chatlens::analyzer::user_list;
/// use chatlens::parse;
///
/// let records = parse("[01/02/24, 09:00:00] Zoe: hi\n[01/02/24, 09:01:00] Adam: hey\n");
/// assert_eq!(user_list(&records), ["Overall", "Adam", "Zoe"]);
/// ```
pub fn user_list(records: &[Record]) -> Vec<String> {
    let senders: BTreeSet<&str> = records
        .iter()
        .map(|r| r.sender.as_str())
        .filter(|&s| s != GROUP_NOTIFICATION)
        .collect();
    std::iter::once(OVERALL)
        .chain(senders)
        .map(str::to_string)
        .collect()
}
