//! Request boundary.
//!
//! Models the single request/response cycle a transport (an HTTP handler,
//! the CLI) drives: an optional uploaded file plus an optional sender
//! selection go in, a report or an error body with a status code comes out.
//!
//! # Example
//!
//! ```rust
//! use chatlens::Analyzer;
//! use chatlens::service::{Upload, respond};
//!
//! let analyzer = Analyzer::new();
//! let upload = Upload::new("chat.txt", b"[01/02/24, 09:00:00] Alice: hi\n".to_vec());
//!
//! let (status, body) = respond(Some(upload), None, &analyzer);
//! assert_eq!(status, 200);
//! assert_eq!(body["user_list"][1], "Alice");
//!
//! let (status, body) = respond(None, None, &analyzer);
//! assert_eq!(status, 400);
//! assert_eq!(body["error"], "No file part");
//! ```

use tracing::{debug, error};

use crate::analyzer::Analyzer;
use crate::core::FilterConfig;
use crate::error::{ChatlensError, Result};
use crate::record::OVERALL;
use crate::report::{AnalysisReport, ErrorBody};

/// An uploaded transcript file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// Client-side file name; must not be empty
    pub filename: String,
    /// Raw file bytes; must be UTF-8
    pub contents: Vec<u8>,
}

impl Upload {
    /// Creates an upload.
    pub fn new(filename: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            contents: contents.into(),
        }
    }
}

/// Validates the request, parses the transcript and builds the report.
///
/// `user` defaults to `"Overall"`.
///
/// # Errors
///
/// - [`ChatlensError::MissingFile`] when there is no upload
/// - [`ChatlensError::EmptyFilename`] when the upload has an empty name
/// - [`ChatlensError::Unprocessable`] when the contents are not UTF-8 or
///   yield no records
/// - any error from [`Analyzer::analyze`]
pub fn analyze_upload(
    upload: Option<Upload>,
    user: Option<&str>,
    analyzer: &Analyzer,
) -> Result<AnalysisReport> {
    let filter = FilterConfig::new().with_user(user.unwrap_or(OVERALL));
    analyze_upload_filtered(upload, &filter, analyzer)
}

/// Like [`analyze_upload`], with a full record selection instead of a
/// sender name.
///
/// # Errors
///
/// Same as [`analyze_upload`].
pub fn analyze_upload_filtered(
    upload: Option<Upload>,
    filter: &FilterConfig,
    analyzer: &Analyzer,
) -> Result<AnalysisReport> {
    let upload = upload.ok_or(ChatlensError::MissingFile)?;
    if upload.filename.is_empty() {
        return Err(ChatlensError::EmptyFilename);
    }

    let text = String::from_utf8(upload.contents).map_err(|err| {
        debug!(filename = %upload.filename, error = %err, "upload is not UTF-8");
        ChatlensError::Unprocessable
    })?;

    analyzer.analyze_text(&text, filter)
}

/// Runs [`analyze_upload`] and renders the outcome as a status code and a
/// JSON body.
///
/// Internal faults are logged in full; the caller only sees an opaque
/// message.
pub fn respond(
    upload: Option<Upload>,
    user: Option<&str>,
    analyzer: &Analyzer,
) -> (u16, serde_json::Value) {
    let outcome = analyze_upload(upload, user, analyzer)
        .and_then(|report| serde_json::to_value(report).map_err(ChatlensError::from));
    match outcome {
        Ok(body) => (200, body),
        Err(err) => {
            if !err.is_validation() {
                error!(error = %err, "analysis failed");
            }
            let body = ErrorBody::from_error(&err);
            (err.status_code(), serde_json::json!({ "error": body.error }))
        }
    }
}
