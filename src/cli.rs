//! Command-line interface definition using clap.
//!
//! [`Args`] describes the `chatlens` binary. The binary plays the transport
//! role: it reads the transcript file, runs the analysis and prints either
//! the report or the error body as JSON.
//!
//! ```rust
//! use chatlens::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatlens", "chat.txt", "--user", "Alice", "--compact"]);
//! assert_eq!(args.user, "Alice");
//! assert!(args.compact);
//! assert!(args.filter_config().unwrap().user().is_some());
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::config::{AnalyzerConfig, ParserConfig};
use crate::core::FilterConfig;
use crate::error::Result;
use crate::record::OVERALL;

/// Descriptive statistics for WhatsApp chat exports.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice -o alice.json
    chatlens chat.txt --after 2024-01-01 --before 2024-06-30 --compact
    chatlens chat.txt --notifications --merge-continuations
    chatlens chat.txt --stop-words stop_hinglish.txt")]
pub struct Args {
    /// Path to the exported transcript (.txt)
    pub input: PathBuf,

    /// Analyze one sender, or everyone with "Overall"
    #[arg(short, long, value_name = "NAME", default_value = OVERALL)]
    pub user: String,

    /// Write the report here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Whitespace-separated stop-word file (default: built-in list)
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Keep system events (joins, leaves, ...) as group_notification records
    #[arg(long)]
    pub notifications: bool,

    /// Append lines without a timestamp to the previous message
    #[arg(long)]
    pub merge_continuations: bool,

    /// Only messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Log parser and reducer decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parser options from the flags.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new()
            .with_notifications(self.notifications)
            .with_merge_continuations(self.merge_continuations)
    }

    /// Analysis options from the flags.
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        match &self.stop_words {
            Some(path) => AnalyzerConfig::new().with_stop_words_path(path),
            None => AnalyzerConfig::new(),
        }
    }

    /// Record selection from the flags.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`](crate::ChatlensError::InvalidDate)
    /// for a malformed `--after` or `--before`.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut filter = FilterConfig::new().with_user(self.user.as_str());
        if let Some(after) = &self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(before) = &self.before {
            filter = filter.with_date_to(before)?;
        }
        Ok(filter)
    }
}
