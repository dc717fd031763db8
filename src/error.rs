//! Error types for tagwiki.
//!
//! This module defines the errors returned while fetching, parsing and
//! annotating an article. Ranking and tag selection never fail.

use std::time::Duration;

/// Error type for tagging operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The article could not be retrieved (unreachable host, TLS, body read).
    #[error("Fetching article failed: {0}")]
    Fetch(String),

    /// The server answered with a non-success status.
    #[error("Fetching {url} failed with status {status}")]
    Status {
        /// Requested locator.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The request did not complete within the configured timeout.
    #[error("Fetching {url} timed out after {timeout:?}")]
    Timeout {
        /// Requested locator.
        url: String,
        /// Configured timeout.
        timeout: Duration,
    },

    /// The fetched document lacks the expected structure.
    #[error("Article parsing failed: {0}")]
    Parse(String),

    /// The annotator is unavailable or failed on the article text.
    #[error("Annotation failed: {0}")]
    Annotation(String),

    /// Writing to a display sink failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` for every failure that happened while retrieving the article.
    #[must_use]
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            Self::Fetch(_) | Self::Status { .. } | Self::Timeout { .. }
        )
    }
}

/// Result type alias for tagging operations.
pub type Result<T> = std::result::Result<T, Error>;
