use thiserror::Error;

use crate::http::HttpError;

/// Errors that can occur while scraping a platform.
///
/// Only adapters with a structured primary source surface these past their
/// own boundary; the aggregation layer absorbs every variant into a missing
/// entry in the output.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The handle was empty or unusable before any request was made.
    #[error("invalid handle: {0:?}")]
    InvalidHandle(String),

    /// Upstream answered with a non-success status or error envelope.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Profile, user or resource does not exist upstream.
    #[error("not found: {resource}")]
    NotFound { resource: String },

    /// Network or transport failure.
    #[error("network error: {message}")]
    Network { message: String },

    /// Response body could not be decoded or parsed.
    #[error("parse error: {message}")]
    Parse { message: String },
}

impl ScrapeError {
    /// Create an API error.
    #[inline]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a not found error.
    #[inline]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a network error.
    #[inline]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a parse error.
    #[inline]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

impl From<HttpError> for ScrapeError {
    fn from(err: HttpError) -> Self {
        ScrapeError::network(err.to_string())
    }
}

impl From<serde_json::Error> for ScrapeError {
    fn from(err: serde_json::Error) -> Self {
        ScrapeError::parse(err.to_string())
    }
}

/// Extract a short error message suitable for display.
///
/// Takes the first line of an error message, which is useful for errors
/// that include multi-line details. This provides a concise message for
/// logging at the absorption boundary.
#[inline]
pub fn short_error_message(e: &impl std::error::Error) -> String {
    let full = e.to_string();
    full.lines().next().unwrap_or(&full).to_string()
}

/// Result type for scrape operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;
