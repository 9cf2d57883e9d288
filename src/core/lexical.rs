//! Word and emoji reducers.

use super::frequency::{percent, rank};
use super::models::{EmojiFrequency, WordFrequency};
use crate::capabilities::{CloudRenderer, EmojiClassifier};
use crate::error::Result;
use crate::record::Record;
use crate::stopwords::StopWords;

/// Lower-cased whitespace tokens of text records, stop words removed.
///
/// Notifications and media placeholders contribute nothing.
///
/// ```
/// use chatlens::core::lexical::eligible_tokens;
/// use chatlens::{Record, StopWords};
/// use chrono::NaiveDate;
///
/// let ts = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let records = vec![
///     Record::new(ts, "Alice", "The Pizza is HOT"),
///     Record::new(ts, "Bob", "<Media omitted>"),
/// ];
/// let stop = StopWords::from_text("the is");
///
/// assert_eq!(eligible_tokens(&records, &stop), ["pizza", "hot"]);
/// ```
pub fn eligible_tokens(records: &[Record], stop_words: &StopWords) -> Vec<String> {
    records
        .iter()
        .filter(|r| r.is_text())
        .flat_map(|r| {
            r.body
                .to_lowercase()
                .split_whitespace()
                .filter(|token| !stop_words.contains(token))
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// The `top` most frequent eligible tokens with their share of all eligible
/// tokens. Empty when nothing is left after stop-word removal.
pub fn common_words(records: &[Record], stop_words: &StopWords, top: usize) -> Vec<WordFrequency> {
    let tokens = eligible_tokens(records, stop_words);
    let total = tokens.len();
    rank(tokens)
        .into_iter()
        .take(top)
        .map(|(word, count)| WordFrequency {
            word,
            count,
            percent: percent(count, total),
        })
        .collect()
}

/// Renders the eligible tokens as an embeddable `data:` URI.
///
/// Returns `Ok(None)` when no token survives stop-word removal or the
/// renderer draws nothing.
///
/// # Errors
///
/// Propagates renderer failures.
pub fn word_cloud(
    records: &[Record],
    stop_words: &StopWords,
    renderer: &dyn CloudRenderer,
) -> Result<Option<String>> {
    let tokens = eligible_tokens(records, stop_words);
    if tokens.is_empty() {
        return Ok(None);
    }
    Ok(renderer.render(&tokens)?.map(|image| image.to_data_uri()))
}

/// The `top` most frequent emoji characters with their share of all emoji
/// occurrences.
///
/// Every record is scanned, media placeholders and notifications included.
pub fn emoji_stats(
    records: &[Record],
    classifier: &dyn EmojiClassifier,
    top: usize,
) -> Vec<EmojiFrequency> {
    let emojis: Vec<char> = records
        .iter()
        .flat_map(|r| r.body.chars())
        .filter(|&c| classifier.is_emoji(c))
        .collect();
    let total = emojis.len();
    rank(emojis)
        .into_iter()
        .take(top)
        .map(|(emoji, count)| EmojiFrequency {
            emoji: emoji.to_string(),
            count,
            percent: percent(count, total),
        })
        .collect()
}
