//! Monthly sentiment trend.

use std::collections::BTreeMap;

use serde::Serialize;

use super::models::SentimentPoint;
use crate::capabilities::SentimentScorer;
use crate::record::Record;

/// Polarity label of one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

/// Score boundaries for the labels. Scores strictly above `positive` are
/// Positive, strictly below `negative` Negative, anything else Neutral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub positive: f64,
    pub negative: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            positive: 0.05,
            negative: -0.05,
        }
    }
}

impl Thresholds {
    /// Labels a compound score.
    ///
    /// ```
    /// use chatlens::core::sentiment::{SentimentLabel, Thresholds};
    ///
    /// let t = Thresholds::default();
    /// assert_eq!(t.classify(0.06), SentimentLabel::Positive);
    /// assert_eq!(t.classify(0.05), SentimentLabel::Neutral);
    /// assert_eq!(t.classify(-0.05), SentimentLabel::Neutral);
    /// assert_eq!(t.classify(-0.5), SentimentLabel::Negative);
    /// ```
    pub fn classify(&self, score: f64) -> SentimentLabel {
        if score > self.positive {
            SentimentLabel::Positive
        } else if score < self.negative {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// Label counts per `YYYY-MM` month, oldest first.
///
/// Only text records are scored; notifications and media placeholders are
/// skipped. Each month reports all three labels, zero when absent.
pub fn sentiment_timeline(
    records: &[Record],
    scorer: &dyn SentimentScorer,
    thresholds: Thresholds,
) -> Vec<SentimentPoint> {
    let mut months: BTreeMap<String, SentimentPoint> = BTreeMap::new();

    for record in records.iter().filter(|r| r.is_text()) {
        let month_year = record.timestamp.format("%Y-%m").to_string();
        let point = months
            .entry(month_year)
            .or_insert_with_key(|key| SentimentPoint {
                month_year: key.clone(),
                positive: 0,
                negative: 0,
                neutral: 0,
            });
        match thresholds.classify(scorer.compound(&record.body)) {
            SentimentLabel::Positive => point.positive += 1,
            SentimentLabel::Negative => point.negative += 1,
            SentimentLabel::Neutral => point.neutral += 1,
        }
    }

    months.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec(m: u32, sender: &str, body: &str) -> Record {
        let ts = NaiveDate::from_ymd_opt(2024, m, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Record::new(ts, sender, body)
    }

    fn keyword_scorer(text: &str) -> f64 {
        if text.contains("good") {
            0.8
        } else if text.contains("bad") {
            -0.8
        } else {
            0.0
        }
    }

    #[test]
    fn test_timeline_groups_by_month() {
        let records = vec![
            rec(3, "Alice", "good"),
            rec(1, "Alice", "good"),
            rec(1, "Bob", "bad"),
            rec(1, "Bob", "meh"),
            rec(1, "Bob", "<Media omitted>"),
            rec(3, "group_notification", "bad news"),
        ];
        let timeline = sentiment_timeline(&records, &keyword_scorer, Thresholds::default());
        assert_eq!(
            timeline,
            vec![
                SentimentPoint {
                    month_year: "2024-01".into(),
                    positive: 1,
                    negative: 1,
                    neutral: 1,
                },
                SentimentPoint {
                    month_year: "2024-03".into(),
                    positive: 1,
                    negative: 0,
                    neutral: 0,
                },
            ]
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        let records = vec![rec(1, "Alice", "x")];
        let at_boundary = |_: &str| 0.05;
        let timeline = sentiment_timeline(&records, &at_boundary, Thresholds::default());
        assert_eq!(timeline[0].neutral, 1);
    }

    #[test]
    fn test_custom_thresholds() {
        let records = vec![rec(1, "Alice", "x")];
        let mild = |_: &str| 0.3;
        let strict = Thresholds {
            positive: 0.5,
            negative: -0.5,
        };
        assert_eq!(sentiment_timeline(&records, &mild, strict)[0].neutral, 1);
    }

    #[test]
    fn test_empty() {
        assert!(sentiment_timeline(&[], &keyword_scorer, Thresholds::default()).is_empty());
    }
}
