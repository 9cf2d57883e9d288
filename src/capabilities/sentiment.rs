//! Lexicon-based sentiment scoring.
//!
//! A small valence dictionary in the style of rule-based social-media
//! scorers: each known word carries a valence in `[-4, 4]`, boosters scale
//! the next sentiment word, negations flip the sign of words that follow
//! within a short window, and exclamation marks push the total away from
//! zero. The raw sum is squashed into `[-1, 1]` with `s / sqrt(s² + α)`.

use std::collections::HashMap;

use super::SentimentScorer;

/// Normalisation constant for the compound score.
const ALPHA: f64 = 15.0;

/// Scale applied to a word inside a negation window.
const NEGATION_SCALAR: f64 = -0.74;

/// Added per exclamation mark, up to four.
const EXCLAMATION_BOOST: f64 = 0.292;

/// Words after a negation that are still affected by it.
const NEGATION_WINDOW: usize = 3;

const VALENCES: &[(&str, f64)] = &[
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("awesome", 3.1),
    ("amazing", 2.8),
    ("great", 3.1),
    ("good", 1.9),
    ("nice", 1.8),
    ("best", 3.2),
    ("better", 1.9),
    ("happy", 2.7),
    ("glad", 2.0),
    ("excited", 1.4),
    ("fun", 2.3),
    ("funny", 1.9),
    ("cool", 1.3),
    ("congrats", 2.4),
    ("congratulations", 2.9),
    ("thanks", 1.9),
    ("thank", 1.5),
    ("welcome", 2.0),
    ("beautiful", 2.9),
    ("perfect", 2.7),
    ("wonderful", 2.7),
    ("yay", 2.4),
    ("haha", 1.6),
    ("hahaha", 1.6),
    ("lol", 1.8),
    ("lmao", 2.0),
    ("like", 1.5),
    ("win", 2.8),
    ("won", 2.7),
    ("enjoy", 2.2),
    ("sweet", 2.0),
    ("proud", 2.1),
    ("badhiya", 2.0),
    ("accha", 1.5),
    ("mast", 2.0),
    (":)", 2.0),
    (":d", 2.3),
    ("<3", 1.9),
    ("bad", -2.5),
    ("worse", -2.1),
    ("worst", -3.1),
    ("sad", -2.1),
    ("angry", -2.3),
    ("hate", -2.7),
    ("hated", -3.2),
    ("terrible", -2.1),
    ("awful", -2.0),
    ("horrible", -2.5),
    ("sorry", -0.3),
    ("sick", -1.7),
    ("tired", -1.9),
    ("boring", -1.3),
    ("annoying", -1.8),
    ("upset", -1.6),
    ("cry", -2.1),
    ("crying", -2.1),
    ("miss", -0.6),
    ("problem", -1.7),
    ("wrong", -2.1),
    ("fail", -2.5),
    ("failed", -2.3),
    ("lost", -1.3),
    ("stupid", -2.4),
    ("ugly", -2.3),
    ("hurt", -2.4),
    ("pain", -2.3),
    ("kill", -3.7),
    ("dead", -3.3),
    ("bakwas", -2.0),
    ("bekar", -1.8),
    (":(", -1.9),
];

const BOOSTERS: &[(&str, f64)] = &[
    ("very", 0.293),
    ("really", 0.293),
    ("so", 0.293),
    ("extremely", 0.293),
    ("super", 0.293),
    ("totally", 0.293),
    ("bahut", 0.293),
    ("kinda", -0.293),
    ("slightly", -0.293),
    ("barely", -0.293),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "dont", "don't", "didnt", "didn't", "isnt", "isn't", "wasnt", "wasn't",
    "cant", "can't", "wont", "won't", "nothing", "nahi", "nhi", "mat",
];

/// Rule-based scorer over a built-in valence lexicon.
///
/// ```
/// use chatlens::capabilities::{LexiconScorer, SentimentScorer};
///
/// let scorer = LexiconScorer::new();
/// assert!(scorer.compound("this is great") > 0.05);
/// assert!(scorer.compound("this is not great") < -0.05);
/// assert_eq!(scorer.compound("see you at five"), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    valences: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    /// Creates a scorer with the built-in lexicon.
    pub fn new() -> Self {
        Self {
            valences: VALENCES.iter().copied().collect(),
            boosters: BOOSTERS.iter().copied().collect(),
        }
    }

    /// Adds or overrides a word valence.
    #[must_use]
    pub fn with_word(mut self, word: &'static str, valence: f64) -> Self {
        self.valences.insert(word, valence);
        self
    }

    /// Raw valence sum before normalisation.
    fn raw_score(&self, text: &str) -> f64 {
        let mut total = 0.0;
        let mut boost = 0.0;
        let mut since_negation: Option<usize> = None;

        for raw in text.split_whitespace() {
            let token = normalize_token(raw);
            if token.is_empty() {
                continue;
            }

            if NEGATIONS.contains(&token.as_str()) {
                since_negation = Some(0);
                continue;
            }

            if let Some(&b) = self.boosters.get(token.as_str()) {
                boost += b;
                continue;
            }

            if let Some(&valence) = self.valences.get(token.as_str()) {
                let mut score = valence + boost * valence.signum();
                if since_negation.is_some_and(|n| n < NEGATION_WINDOW) {
                    score *= NEGATION_SCALAR;
                }
                total += score;
                boost = 0.0;
            }

            since_negation = since_negation.map(|n| n + 1);
        }

        let exclamations = text.chars().filter(|&c| c == '!').count().min(4);
        if total != 0.0 {
            total += (exclamations as f64 * EXCLAMATION_BOOST).copysign(total);
        }
        total
    }
}

impl SentimentScorer for LexiconScorer {
    fn compound(&self, text: &str) -> f64 {
        let score = self.raw_score(text);
        if score == 0.0 {
            return 0.0;
        }
        (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
    }
}

/// Lower-cases a token and strips surrounding punctuation, keeping
/// emoticons such as `:)` intact.
fn normalize_token(raw: &str) -> String {
    let lower = raw.to_lowercase();
    if VALENCES.iter().any(|(w, _)| *w == lower) {
        return lower;
    }
    lower
        .trim_matches(|c: char| c.is_ascii_punctuation() && c != '\'')
        .to_string()
}
