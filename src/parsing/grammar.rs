//! Line grammars for WhatsApp transcript exports.
//!
//! WhatsApp writes one message per line, prefixed by a timestamp whose shape
//! depends on platform and locale. Each shape is a [`LineGrammar`]; the
//! parser tries them in [`LineGrammar::all`] order and keeps the first one
//! that matches at least one line of the transcript.

use std::sync::LazyLock;

use regex::Regex;

/// Recognised line shapes, most specific first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineGrammar {
    /// iOS export, bracketed 24-hour time with seconds
    /// Example: `[11/07/25, 15:23:54] Alice: Hello`
    ///
    /// A trailing AM/PM inside the brackets is accepted as well.
    Bracketed,
    /// Android export with a 12-hour clock
    /// Example: `11/07/25, 3:23 PM - Alice: Hello`
    DashedMeridiem,
    /// Android export with a 24-hour clock
    /// Example: `11/07/25, 15:23 - Alice: Hello`
    Dashed24h,
}

impl LineGrammar {
    /// All grammars in priority order.
    pub fn all() -> &'static [LineGrammar] {
        &[
            LineGrammar::Bracketed,
            LineGrammar::DashedMeridiem,
            LineGrammar::Dashed24h,
        ]
    }

    /// Short name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            LineGrammar::Bracketed => "bracketed",
            LineGrammar::DashedMeridiem => "dashed-meridiem",
            LineGrammar::Dashed24h => "dashed-24h",
        }
    }

    /// Timestamp prefix shared by message and notification lines.
    /// Captures the date and the time.
    fn prefix(self) -> &'static str {
        match self {
            // [11/07/25, 15:23:54]
            LineGrammar::Bracketed => {
                r"^\[(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}:\d{2}(?:\s?[APap][Mm])?)\]\s"
            }
            // 11/07/25, 3:23 PM -
            LineGrammar::DashedMeridiem => {
                r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}\s?[APap][Mm])\s-\s"
            }
            // 11/07/25, 15:23 -
            LineGrammar::Dashed24h => r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2})\s-\s",
        }
    }

    /// Regex for a message line: date, time, sender, body.
    pub fn message_pattern(self) -> String {
        format!(r"{}([^:]+):\s(.*)$", self.prefix())
    }

    /// Regex for a system line without a sender: date, time, text.
    pub fn notification_pattern(self) -> String {
        format!(r"{}(.+)$", self.prefix())
    }

    /// Compiled matcher for this grammar.
    pub fn matcher(self) -> &'static GrammarMatcher {
        let idx = match self {
            LineGrammar::Bracketed => 0,
            LineGrammar::DashedMeridiem => 1,
            LineGrammar::Dashed24h => 2,
        };
        &MATCHERS[idx]
    }
}

static MATCHERS: LazyLock<Vec<GrammarMatcher>> = LazyLock::new(|| {
    LineGrammar::all()
        .iter()
        .map(|&g| GrammarMatcher::new(g))
        .collect()
});

/// Pieces of a matched message line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageLine<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub sender: &'a str,
    pub body: &'a str,
}

/// Pieces of a matched system line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationLine<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub text: &'a str,
}

/// Compiled regexes for one grammar.
pub struct GrammarMatcher {
    grammar: LineGrammar,
    message: Regex,
    notification: Regex,
}

impl GrammarMatcher {
    fn new(grammar: LineGrammar) -> Self {
        Self {
            grammar,
            message: Regex::new(&grammar.message_pattern()).expect("message pattern is valid"),
            notification: Regex::new(&grammar.notification_pattern())
                .expect("notification pattern is valid"),
        }
    }

    /// The grammar this matcher implements.
    pub fn grammar(&self) -> LineGrammar {
        self.grammar
    }

    /// Splits a message line into its four parts.
    pub fn message<'a>(&self, line: &'a str) -> Option<MessageLine<'a>> {
        let caps = self.message.captures(line)?;
        Some(MessageLine {
            date: caps.get(1).map_or("", |m| m.as_str()),
            time: caps.get(2).map_or("", |m| m.as_str()),
            sender: caps.get(3).map_or("", |m| m.as_str().trim()),
            body: caps.get(4).map_or("", |m| m.as_str()),
        })
    }

    /// Splits a timestamped line that carries no sender.
    pub fn notification<'a>(&self, line: &'a str) -> Option<NotificationLine<'a>> {
        let caps = self.notification.captures(line)?;
        Some(NotificationLine {
            date: caps.get(1).map_or("", |m| m.as_str()),
            time: caps.get(2).map_or("", |m| m.as_str()),
            text: caps.get(3).map_or("", |m| m.as_str().trim()),
        })
    }

    /// Returns `true` if the line is a message line in this grammar.
    pub fn is_message(&self, line: &str) -> bool {
        self.message.is_match(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracketed_message() {
        let m = LineGrammar::Bracketed
            .matcher()
            .message("[11/07/25, 15:23:54] Alice: Hello there")
            .unwrap();
        assert_eq!(m.date, "11/07/25");
        assert_eq!(m.time, "15:23:54");
        assert_eq!(m.sender, "Alice");
        assert_eq!(m.body, "Hello there");
    }

    #[test]
    fn test_bracketed_with_meridiem() {
        let m = LineGrammar::Bracketed
            .matcher()
            .message("[1/15/24, 10:30:45 AM] Bob: Morning")
            .unwrap();
        assert_eq!(m.time, "10:30:45 AM");
        assert_eq!(m.sender, "Bob");
    }

    #[test]
    fn test_dashed_meridiem_message() {
        let m = LineGrammar::DashedMeridiem
            .matcher()
            .message("11/07/2025, 3:23 pm - Bob: See you")
            .unwrap();
        assert_eq!(m.date, "11/07/2025");
        assert_eq!(m.time, "3:23 pm");
        assert_eq!(m.body, "See you");
    }

    #[test]
    fn test_dashed_24h_message() {
        let m = LineGrammar::Dashed24h
            .matcher()
            .message("11/07/25, 15:23 - Carol: ok")
            .unwrap();
        assert_eq!(m.time, "15:23");
        assert_eq!(m.sender, "Carol");
    }

    #[test]
    fn test_body_keeps_later_colons() {
        let m = LineGrammar::Dashed24h
            .matcher()
            .message("11/07/25, 15:23 - Carol: meeting at 10:30: room B")
            .unwrap();
        assert_eq!(m.sender, "Carol");
        assert_eq!(m.body, "meeting at 10:30: room B");
    }

    #[test]
    fn test_body_with_url() {
        let m = LineGrammar::Bracketed
            .matcher()
            .message("[11/07/25, 15:23:54] Dan: https://example.com/a")
            .unwrap();
        assert_eq!(m.sender, "Dan");
        assert_eq!(m.body, "https://example.com/a");
    }

    #[test]
    fn test_colon_without_space_is_not_a_sender() {
        let line = "11/07/25, 15:24 - Bob joined via https://chat.example.com/x";
        let matcher = LineGrammar::Dashed24h.matcher();
        assert!(!matcher.is_message(line));
        assert!(!matcher.is_message("11/07/25, 15:24 - Bob:hi"));
        assert_eq!(
            matcher.notification(line).unwrap().text,
            "Bob joined via https://chat.example.com/x"
        );
    }

    #[test]
    fn test_grammars_are_disjoint() {
        let dashed_12 = "11/07/25, 3:23 PM - Bob: hi";
        let dashed_24 = "11/07/25, 15:23 - Bob: hi";
        let bracketed = "[11/07/25, 15:23:54] Bob: hi";

        assert!(!LineGrammar::Dashed24h.matcher().is_message(dashed_12));
        assert!(!LineGrammar::DashedMeridiem.matcher().is_message(dashed_24));
        assert!(!LineGrammar::Bracketed.matcher().is_message(dashed_24));
        assert!(!LineGrammar::Dashed24h.matcher().is_message(bracketed));
    }

    #[test]
    fn test_notification_line() {
        let matcher = LineGrammar::Dashed24h.matcher();
        let line = "11/07/25, 15:23 - Bob joined using this group's invite link";
        assert!(!matcher.is_message(line));
        let n = matcher.notification(line).unwrap();
        assert_eq!(n.date, "11/07/25");
        assert_eq!(n.text, "Bob joined using this group's invite link");
    }

    #[test]
    fn test_unrelated_line_does_not_match() {
        for grammar in LineGrammar::all() {
            let matcher = grammar.matcher();
            assert!(matcher.message("just some text").is_none());
            assert!(matcher.notification("just some text").is_none());
            assert_eq!(matcher.grammar(), *grammar);
        }
    }

    #[test]
    fn test_narrow_space_before_meridiem() {
        let m = LineGrammar::DashedMeridiem
            .matcher()
            .message("11/07/25, 3:23\u{202f}PM - Bob: hi")
            .unwrap();
        assert_eq!(m.time, "3:23\u{202f}PM");
    }
}
