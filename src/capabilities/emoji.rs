//! Emoji classification from Unicode properties.

use std::sync::LazyLock;

use regex::Regex;

use super::EmojiClassifier;

static EMOJI_CHAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[[\p{Extended_Pictographic}\p{Emoji_Presentation}]--\p{Emoji_Modifier}]$")
        .expect("emoji pattern is valid")
});

/// Classifies a character as emoji when it has the `Extended_Pictographic`
/// or `Emoji_Presentation` property. ASCII is never an emoji, so `#`, `*`
/// and digits (which carry the plain `Emoji` property) are excluded.
///
/// Joiners, variation selectors and skin-tone modifiers are not emoji on
/// their own; a ZWJ sequence counts once per pictograph it contains.
///
/// ```
/// use chatlens::capabilities::{EmojiClassifier, UnicodeEmoji};
///
/// assert!(UnicodeEmoji.is_emoji('😂'));
/// assert!(UnicodeEmoji.is_emoji('❤'));
/// assert!(!UnicodeEmoji.is_emoji('a'));
/// assert!(!UnicodeEmoji.is_emoji('7'));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeEmoji;

impl EmojiClassifier for UnicodeEmoji {
    fn is_emoji(&self, ch: char) -> bool {
        if ch.is_ascii() {
            return false;
        }
        let mut buf = [0u8; 4];
        EMOJI_CHAR.is_match(ch.encode_utf8(&mut buf))
    }
}
