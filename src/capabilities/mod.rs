//! Black-box capabilities the reducers call into.
//!
//! The aggregation pipeline does not know how a word cloud is drawn, how a
//! sentence is scored for sentiment or which characters count as emoji. It
//! talks to these traits instead:
//!
//! | Trait | Default implementation |
//! |-------|------------------------|
//! | [`CloudRenderer`] | [`SvgCloudRenderer`] |
//! | [`SentimentScorer`] | [`LexiconScorer`] |
//! | [`EmojiClassifier`] | [`UnicodeEmoji`] |
//!
//! Closures work as scorers and classifiers, which keeps tests short:
//!
//! ```
//! use chatlens::capabilities::{EmojiClassifier, SentimentScorer};
//!
//! let always_happy = |_: &str| 0.9;
//! assert_eq!(always_happy.compound("anything"), 0.9);
//!
//! let only_hearts = |c: char| c == '❤';
//! assert!(only_hearts.is_emoji('❤'));
//! ```

pub mod cloud;
pub mod emoji;
pub mod sentiment;

pub use cloud::SvgCloudRenderer;
pub use emoji::UnicodeEmoji;
pub use sentiment::LexiconScorer;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::Result;

/// An encoded image with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    /// MIME type, e.g. `image/svg+xml`
    pub mime: &'static str,
    /// Encoded image bytes
    pub bytes: Vec<u8>,
}

impl RenderedImage {
    /// Creates an image from its MIME type and bytes.
    pub fn new(mime: &'static str, bytes: Vec<u8>) -> Self {
        Self { mime, bytes }
    }

    /// Embeddable `data:` URI with base64 payload.
    ///
    /// ```
    /// use chatlens::capabilities::RenderedImage;
    ///
    /// let image = RenderedImage::new("image/png", vec![1, 2, 3]);
    /// assert_eq!(image.to_data_uri(), "data:image/png;base64,AQID");
    /// ```
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// Draws a word cloud from a token stream.
///
/// `tokens` is every eligible word occurrence in order (repeats included);
/// frequency weighting is the renderer's business. Returns `Ok(None)` when
/// there is nothing to draw.
pub trait CloudRenderer: Send + Sync {
    fn render(&self, tokens: &[String]) -> Result<Option<RenderedImage>>;
}

/// Scores the polarity of a text as a compound value in `[-1, 1]`.
pub trait SentimentScorer: Send + Sync {
    fn compound(&self, text: &str) -> f64;
}

impl<F> SentimentScorer for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn compound(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Decides whether a single character is an emoji.
pub trait EmojiClassifier: Send + Sync {
    fn is_emoji(&self, ch: char) -> bool;
}

impl<F> EmojiClassifier for F
where
    F: Fn(char) -> bool + Send + Sync,
{
    fn is_emoji(&self, ch: char) -> bool {
        self(ch)
    }
}
