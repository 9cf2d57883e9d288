//! Building blocks of the transcript parser.
//!
//! - [`grammar`] - line shapes and their compiled matchers
//! - [`timestamp`] - batch timestamp format resolution
//!
//! The parser itself lives in [`crate::parser`].

pub mod grammar;
pub mod timestamp;

pub use grammar::{GrammarMatcher, LineGrammar, MessageLine, NotificationLine};
pub use timestamp::{TimestampFormat, join_stamp, resolve_batch};
