//! WhatsApp transcript parser.
//!
//! Turns raw export text into an ordered list of [`Record`]s.
//!
//! Supported line shapes (see [`LineGrammar`]):
//! - `[11/07/25, 15:23:54] Sender: Message`
//! - `11/07/25, 3:23 PM - Sender: Message`
//! - `11/07/25, 15:23 - Sender: Message`
//!
//! # Algorithm
//!
//! 1. Each grammar is tried in priority order against every line; the first
//!    grammar matching at least one line is used for the whole transcript.
//! 2. The captured timestamps are resolved as a batch: the first
//!    [`TimestampFormat`](crate::parsing::TimestampFormat) that parses all
//!    of them is committed.
//! 3. Records are emitted in line order.
//!
//! Parsing never fails. A transcript that matches no grammar, or whose
//! timestamps fit no single format, produces an empty list.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::parse;
//!
//! let records = parse("[01/02/24, 09:00:00] Alice: Hello there\n\
//!                      [01/02/24, 09:05:00] Bob: <Media omitted>\n");
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].sender, "Alice");
//! assert!(records[1].is_media());
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::ParserConfig;
use crate::error::Result;
use crate::parsing::{GrammarMatcher, LineGrammar, join_stamp, resolve_batch};
use crate::record::{GROUP_NOTIFICATION, Record};

/// Parses a transcript with the default configuration.
pub fn parse(raw: &str) -> Vec<Record> {
    TranscriptParser::new().parse_str(raw)
}

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
/// use chatlens::parser::TranscriptParser;
///
/// let parser = TranscriptParser::with_config(ParserConfig::new().with_notifications(true));
/// let records = parser.parse_str(
///     "11/07/25, 15:23 - Alice: hi\n11/07/25, 15:24 - Bob joined using this group's invite link",
/// );
/// assert_eq!(records.len(), 2);
/// assert!(records[1].is_notification());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

/// A matched line before its timestamp is resolved.
struct PendingRecord<'a> {
    stamp: String,
    sender: &'a str,
    body: String,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses a transcript file.
    ///
    /// Only reading the file can fail; see [`parse_str`](Self::parse_str).
    pub fn parse_file(&self, path: &Path) -> Result<Vec<Record>> {
        let content = fs::read_to_string(path)?;
        Ok(self.parse_str(&content))
    }

    /// Parses transcript text. Returns an empty list when nothing is
    /// recognised.
    pub fn parse_str(&self, raw: &str) -> Vec<Record> {
        let lines: Vec<&str> = raw.lines().map(clean_line).collect();

        for grammar in LineGrammar::all() {
            let Some(pending) = self.collect(grammar.matcher(), &lines) else {
                continue;
            };
            debug!(
                grammar = grammar.name(),
                lines = lines.len(),
                matched = pending.len(),
                "line grammar selected"
            );
            return resolve(pending);
        }

        debug!(lines = lines.len(), "no line grammar matched");
        Vec::new()
    }

    /// Applies one grammar to every line. Returns `None` if no line is a
    /// message line in this grammar.
    fn collect<'a>(
        &self,
        matcher: &GrammarMatcher,
        lines: &[&'a str],
    ) -> Option<Vec<PendingRecord<'a>>> {
        let mut pending: Vec<PendingRecord<'a>> = Vec::new();
        let mut messages = 0usize;
        // Blank lines seen since the last non-blank continuation
        let mut blanks = 0usize;

        for &line in lines {
            if let Some(m) = matcher.message(line) {
                messages += 1;
                blanks = 0;
                pending.push(PendingRecord {
                    stamp: join_stamp(m.date, m.time),
                    sender: m.sender,
                    body: m.body.to_string(),
                });
                continue;
            }

            if self.config.notifications {
                if let Some(n) = matcher.notification(line) {
                    blanks = 0;
                    pending.push(PendingRecord {
                        stamp: join_stamp(n.date, n.time),
                        sender: GROUP_NOTIFICATION,
                        body: n.text.to_string(),
                    });
                    continue;
                }
            }

            if !self.config.merge_continuations {
                continue;
            }
            // Orphan lines before the first record are dropped
            let Some(last) = pending.last_mut() else {
                continue;
            };
            if line.trim().is_empty() {
                blanks += 1;
                continue;
            }
            for _ in 0..=blanks {
                last.body.push('\n');
            }
            last.body.push_str(line);
            blanks = 0;
        }

        (messages > 0).then_some(pending)
    }
}

/// Commits one timestamp format for the batch and builds the records.
fn resolve(pending: Vec<PendingRecord<'_>>) -> Vec<Record> {
    let stamps: Vec<&str> = pending.iter().map(|p| p.stamp.as_str()).collect();

    let Some((format, timestamps)) = resolve_batch(&stamps) else {
        debug!(count = stamps.len(), "no timestamp format fits the whole batch");
        return Vec::new();
    };
    debug!(format = format.as_str(), "timestamp format committed");

    pending
        .into_iter()
        .zip(timestamps)
        .map(|(p, timestamp)| Record::new(timestamp, p.sender, p.body))
        .collect()
}

/// Strips the byte-order mark and direction marks some exports put at the
/// start of lines.
fn clean_line(line: &str) -> &str {
    line.trim_start_matches(['\u{feff}', '\u{200e}', '\u{200f}'])
}
