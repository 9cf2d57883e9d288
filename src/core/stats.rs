//! Counters and per-sender reducers.

use std::collections::HashMap;

use super::frequency::{percent, rank, round2};
use super::models::{AverageLength, BasicStats, UserShare};
use crate::record::Record;

/// Message, word, media and link counts.
///
/// Words are whitespace tokens of text bodies; media placeholders are counted
/// in `media_shared` only. Links are whitespace tokens containing `http`.
///
/// ```
/// use chatlens::core::stats::basic_stats;
/// use chatlens::Record;
/// use chrono::NaiveDate;
///
/// let ts = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let records = vec![
///     Record::new(ts, "Alice", "Hi Bob"),
///     Record::new(ts, "Bob", "<Media omitted>"),
/// ];
///
/// let stats = basic_stats(&records);
/// assert_eq!(stats.total_messages, 2);
/// assert_eq!(stats.total_words, 2);
/// assert_eq!(stats.media_shared, 1);
/// assert_eq!(stats.links_shared, 0);
/// ```
pub fn basic_stats(records: &[Record]) -> BasicStats {
    let mut stats = BasicStats {
        total_messages: records.len(),
        ..BasicStats::default()
    };

    for record in records {
        if record.is_media() {
            stats.media_shared += 1;
            continue;
        }
        for token in record.body.split_whitespace() {
            stats.total_words += 1;
            if token.contains("http") {
                stats.links_shared += 1;
            }
        }
    }

    stats
}

/// Every sender's share of all messages, most active first.
///
/// The system sender is included when present; callers that want it gone
/// must remove it before calling.
pub fn most_active_users(records: &[Record]) -> Vec<UserShare> {
    let total = records.len();
    rank(records.iter().map(|r| r.sender.as_str()))
        .into_iter()
        .map(|(name, count)| UserShare {
            name: name.to_string(),
            percent: percent(count, total),
        })
        .collect()
}

/// Mean words per text message for each sender, longest first.
///
/// Notifications and media placeholders are skipped. Senders tied on length
/// keep first-appearance order.
pub fn average_message_length(records: &[Record]) -> Vec<AverageLength> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(&str, usize, usize)> = Vec::new();

    for record in records.iter().filter(|r| r.is_text()) {
        let words = record.word_count();
        match index.get(record.sender.as_str()) {
            Some(&i) => {
                totals[i].1 += words;
                totals[i].2 += 1;
            }
            None => {
                index.insert(record.sender.as_str(), totals.len());
                totals.push((record.sender.as_str(), words, 1));
            }
        }
    }

    let mut averages: Vec<AverageLength> = totals
        .into_iter()
        .map(|(user, words, messages)| AverageLength {
            user: user.to_string(),
            avg_length: round2(words as f64 / messages as f64),
        })
        .collect();
    averages.sort_by(|a, b| b.avg_length.total_cmp(&a.avg_length));
    averages
}
