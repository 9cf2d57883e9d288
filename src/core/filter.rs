//! Select records by sender and date range.
//!
//! This module provides [`FilterConfig`] for defining the caller's selection
//! and [`apply_filters`] for building the filtered subset the reducers run on.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Sender | [`with_user`](FilterConfig::with_user) | Records from one sender, or `"Overall"` for everyone |
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Records on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Records on or before date |
//!
//! # Examples
//!
//! ```
//! use chatlens::core::filter::{FilterConfig, apply_filters};
//! use chatlens::Record;
//! use chrono::NaiveDate;
//!
//! # fn main() -> chatlens::Result<()> {
//! let at = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let records = vec![
//!     Record::new(at(1), "Alice", "Hello"),
//!     Record::new(at(2), "Bob", "Hi there"),
//!     Record::new(at(20), "Alice", "How are you?"),
//! ];
//!
//! let config = FilterConfig::new()
//!     .with_user("Alice")
//!     .with_date_to("2024-06-10")?;
//! let filtered = apply_filters(&records, &config);
//!
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].body, "Hello");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Sender matching is exact; display names are case-sensitive
//! - `"Overall"` clears the sender filter
//! - Multiple filters are combined with AND logic

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{ChatlensError, Result};
use crate::record::{OVERALL, Record};

/// The caller's record selection.
///
/// # Examples
///
/// ```
/// use chatlens::core::filter::FilterConfig;
///
/// assert!(FilterConfig::new().is_overall());
/// assert!(FilterConfig::new().with_user("Overall").is_overall());
/// assert_eq!(FilterConfig::new().with_user("Bob").user(), Some("Bob"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only records from this sender. `None` means everyone.
    pub user: Option<String>,

    /// Include only records on or after this timestamp.
    pub after: Option<NaiveDateTime>,

    /// Include only records on or before this timestamp.
    pub before: Option<NaiveDateTime>,
}

impl FilterConfig {
    /// Creates an empty selection; every record passes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects one sender. [`OVERALL`] clears the selection.
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        let user = user.into();
        self.user = (user != OVERALL).then_some(user);
        self
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.after = Some(parse_date(date_str)?.and_time(NaiveTime::MIN));
        Ok(self)
    }

    /// Sets the end date filter (inclusive of the whole day). Date format:
    /// `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        let date = parse_date(date_str)?;
        let end = date
            .succ_opt()
            .map_or(NaiveDateTime::MAX, |next| {
                next.and_time(NaiveTime::MIN) - chrono::Duration::nanoseconds(1)
            });
        self.before = Some(end);
        Ok(self)
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, ts: NaiveDateTime) -> Self {
        self.after = Some(ts);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, ts: NaiveDateTime) -> Self {
        self.before = Some(ts);
        self
    }

    /// The selected sender, or `None` for "Overall".
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns `true` if no sender is selected.
    pub fn is_overall(&self) -> bool {
        self.user.is_none()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        !self.is_overall() || self.has_date_filter()
    }

    /// Returns `true` if `record` passes the date range, ignoring the sender.
    pub fn in_range(&self, record: &Record) -> bool {
        let ts = record.timestamp;
        !self.after.is_some_and(|after| ts < after) && !self.before.is_some_and(|before| ts > before)
    }

    /// Returns `true` if `record` passes every active filter.
    pub fn matches(&self, record: &Record) -> bool {
        self.user.as_deref().is_none_or(|user| record.sender == user) && self.in_range(record)
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Builds the filtered subset of `records`, preserving transcript order.
///
/// The input is borrowed; reducers that need the full set keep reading it.
pub fn apply_filters(records: &[Record], config: &FilterConfig) -> Vec<Record> {
    if !config.is_active() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| config.matches(record))
        .cloned()
        .collect()
}

/// Keeps only records that pass the date range.
///
/// Used for the reducers that ignore the sender selection.
pub fn apply_date_range(records: &[Record], config: &FilterConfig) -> Vec<Record> {
    if !config.has_date_filter() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| config.in_range(record))
        .cloned()
        .collect()
}
