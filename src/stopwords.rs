//! Stop-word list used by the lexical reducers.
//!
//! The list is static configuration: it is read once at startup and shared
//! for the lifetime of the process. A missing or unreadable file degrades to
//! an empty list instead of failing startup.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::error::Result;

const BUILTIN: &str = include_str!("../data/stop_words.txt");

static GLOBAL: OnceLock<StopWords> = OnceLock::new();

/// A set of lower-cased tokens excluded from word statistics.
///
/// ```
/// use chatlens::StopWords;
///
/// let words = StopWords::from_text("the a an\nTHE");
/// assert_eq!(words.len(), 3);
/// assert!(words.contains("the"));
/// assert!(!words.contains("hello"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An empty list; nothing is filtered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The list shipped with the crate (English plus common Hinglish).
    pub fn builtin() -> Self {
        Self::from_text(BUILTIN)
    }

    /// Builds a list from whitespace-separated words.
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    /// Reads a whitespace-separated word file.
    pub fn try_load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    /// Reads a word file, falling back to an empty list if it cannot be read.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(words) => {
                debug!(path = %path.display(), count = words.len(), "stop words loaded");
                words
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "stop words unavailable, using empty list");
                Self::empty()
            }
        }
    }

    /// Installs the process-wide list. Returns `false` if one was already
    /// installed; the first list wins.
    pub fn init_global(words: StopWords) -> bool {
        GLOBAL.set(words).is_ok()
    }

    /// The process-wide list, initialised to [`builtin`](Self::builtin) on
    /// first use if [`init_global`](Self::init_global) was never called.
    pub fn global() -> &'static StopWords {
        GLOBAL.get_or_init(StopWords::builtin)
    }

    /// Returns `true` if `token` is a stop word. `token` must already be
    /// lower-cased.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no word is filtered.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|w| w.into().to_lowercase()).collect(),
        }
    }
}
