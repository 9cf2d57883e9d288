//! Batch timestamp resolution.
//!
//! Date strings in an export are ambiguous on their own (`01/02/24` is either
//! the first of February or the second of January), so a single format is
//! chosen for the whole transcript: the first [`TimestampFormat`] that parses
//! every extracted timestamp.

use chrono::NaiveDateTime;

/// One candidate `chrono` format for a joined `"<date> <time>"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimestampFormat(&'static str);

const FORMATS: &[TimestampFormat] = &[
    // [11/07/25, 15:23:54]
    TimestampFormat("%d/%m/%y %H:%M:%S"),
    TimestampFormat("%d/%m/%Y %H:%M:%S"),
    TimestampFormat("%m/%d/%y %H:%M:%S"),
    TimestampFormat("%m/%d/%Y %H:%M:%S"),
    // [7/11/25, 3:23:54 PM]
    TimestampFormat("%d/%m/%y %I:%M:%S %p"),
    TimestampFormat("%d/%m/%Y %I:%M:%S %p"),
    TimestampFormat("%m/%d/%y %I:%M:%S %p"),
    TimestampFormat("%m/%d/%Y %I:%M:%S %p"),
    // 11/07/25, 3:23 PM
    TimestampFormat("%d/%m/%y %I:%M %p"),
    TimestampFormat("%d/%m/%Y %I:%M %p"),
    TimestampFormat("%m/%d/%y %I:%M %p"),
    TimestampFormat("%m/%d/%Y %I:%M %p"),
    // 11/07/25, 15:23
    TimestampFormat("%d/%m/%y %H:%M"),
    TimestampFormat("%d/%m/%Y %H:%M"),
    TimestampFormat("%m/%d/%y %H:%M"),
    TimestampFormat("%m/%d/%Y %H:%M"),
];

impl TimestampFormat {
    /// All candidate formats in priority order: day-first before month-first,
    /// two-digit years before four-digit years.
    pub fn all() -> &'static [TimestampFormat] {
        FORMATS
    }

    /// The `chrono` format string.
    pub fn as_str(self) -> &'static str {
        self.0
    }

    /// Returns `true` for the `%Y` variants.
    pub fn is_four_digit_year(self) -> bool {
        self.0.contains("%Y")
    }

    /// Parses one joined timestamp.
    ///
    /// `chrono` reads `%Y` as any number of digits, so the four-digit
    /// variants check the width of the year field first.
    pub fn parse(self, stamp: &str) -> Option<NaiveDateTime> {
        if self.is_four_digit_year() && year_width(stamp) != Some(4) {
            return None;
        }
        NaiveDateTime::parse_from_str(stamp, self.0).ok()
    }

    /// Parses every stamp, or nothing.
    pub fn parse_all<S: AsRef<str>>(self, stamps: &[S]) -> Option<Vec<NaiveDateTime>> {
        stamps.iter().map(|s| self.parse(s.as_ref())).collect()
    }
}

/// Picks the first format that parses every stamp and returns the parsed
/// values in input order.
///
/// Returns `None` for an empty batch or when no single format fits all
/// stamps, even if some format parses a prefix of them.
pub fn resolve_batch<S: AsRef<str>>(
    stamps: &[S],
) -> Option<(TimestampFormat, Vec<NaiveDateTime>)> {
    if stamps.is_empty() {
        return None;
    }
    TimestampFormat::all()
        .iter()
        .find_map(|&format| format.parse_all(stamps).map(|parsed| (format, parsed)))
}

/// Digits in the year field of a joined `"<date> <time>"` stamp.
fn year_width(stamp: &str) -> Option<usize> {
    let date = stamp.split(' ').next()?;
    date.rsplit('/').next().map(str::len)
}

/// Joins a captured date and time into the string the formats expect.
///
/// Exports put narrow or non-breaking spaces before AM/PM; those are folded
/// into ASCII spaces.
pub fn join_stamp(date: &str, time: &str) -> String {
    let mut stamp = String::with_capacity(date.len() + time.len() + 1);
    stamp.push_str(date);
    stamp.push(' ');
    stamp.extend(time.chars().map(|c| if c.is_whitespace() { ' ' } else { c }));
    stamp
}
