//! Error types for offset-pager
//!
//! Every public API returns `Result<T, Error>` where Error is defined here.
//! A failed page computation never yields a partial page.

use thiserror::Error;

/// The main error type for offset-pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Request Errors
    // ============================================================================
    /// A page request argument was rejected before any fetch
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument {
        /// Argument name
        name: &'static str,
        /// What is wrong with it
        message: String,
    },

    /// The requested page starts past the last element
    #[error(
        "Page {page_number} (page size {page_size}) is out of bounds: only {available} elements available"
    )]
    OutOfBounds {
        /// Requested page number
        page_number: usize,
        /// Requested page size
        page_size: usize,
        /// Total elements the source produced
        available: usize,
    },

    // ============================================================================
    // Source Errors
    // ============================================================================
    /// The frame-fetching collaborator failed
    #[error("Frame source failed: {0}")]
    Source(#[source] anyhow::Error),

    /// A fetch was attempted after the terminal frame
    #[error("Frame source is exhausted, no further frame can be fetched")]
    SourceExhausted,

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            message: message.into(),
        }
    }

    /// Create an out-of-bounds error
    pub fn out_of_bounds(page_number: usize, page_size: usize, available: usize) -> Self {
        Self::OutOfBounds {
            page_number,
            page_size,
            available,
        }
    }

    /// Wrap a failure reported by the frame-fetching collaborator
    pub fn source_failure(err: impl Into<anyhow::Error>) -> Self {
        Self::Source(err.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error is an out-of-bounds rejection
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Check if this error came from the frame-fetching collaborator
    pub fn is_source_failure(&self) -> bool {
        matches!(self, Self::Source(_))
    }
}

/// Result type alias for offset-pager
pub type Result<T> = std::result::Result<T, Error>;
