//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers every
//! failure the analysis request can surface.
//!
//! # Error Handling Philosophy
//!
//! - **Validation errors** (missing file, unreadable transcript) carry a
//!   message meant for the person who uploaded the file
//! - **Internal faults** are logged in full and reported as an opaque message
//! - The transcript parser itself never fails; an unrecognised transcript is
//!   an empty record list that the request layer turns into
//!   [`ChatlensError::Unprocessable`]

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Record;
///
/// fn my_function() -> Result<Vec<Record>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// User-facing message for transcripts that yield no records.
pub const UNPROCESSABLE_MESSAGE: &str =
    "Could not process the chat file. Please check if it's a valid WhatsApp export.";

/// User-facing message for every non-validation failure.
pub const INTERNAL_MESSAGE: &str =
    "An internal server error occurred. Check the backend console for details.";

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// The request carried no transcript file at all.
    #[error("No file part")]
    MissingFile,

    /// The request carried a file with an empty filename.
    #[error("No selected file")]
    EmptyFilename,

    /// The transcript matched no line grammar or timestamp format, or was
    /// not valid UTF-8.
    #[error("Could not process the chat file. Please check if it's a valid WhatsApp export.")]
    Unprocessable,

    /// An I/O error occurred (reading the transcript, writing the report).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The word-cloud renderer failed.
    #[error("Word cloud rendering failed: {message}")]
    Render {
        /// Description of what went wrong
        message: String,
    },

    /// Invalid date in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a renderer error.
    pub fn render(message: impl Into<String>) -> Self {
        ChatlensError::Render {
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if the error is caused by the request itself rather
    /// than by a fault in the analysis.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ChatlensError::MissingFile
                | ChatlensError::EmptyFilename
                | ChatlensError::Unprocessable
                | ChatlensError::InvalidDate { .. }
        )
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if the transcript could not be parsed.
    pub fn is_unprocessable(&self) -> bool {
        matches!(self, ChatlensError::Unprocessable)
    }

    /// HTTP-style status code for this error: 400 for validation errors,
    /// 500 for everything else.
    pub fn status_code(&self) -> u16 {
        if self.is_validation() { 400 } else { 500 }
    }

    /// The message shown to the caller. Internal faults never leak detail.
    pub fn user_message(&self) -> String {
        if self.is_validation() {
            self.to_string()
        } else {
            INTERNAL_MESSAGE.to_string()
        }
    }
}
