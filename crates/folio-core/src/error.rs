//! Unified error type exposed by **`folio-core`**.
//!
//! Provider crates convert their internal errors into one of these variants
//! before handing them to the relay. The relay only ever distinguishes
//! [`FolioError::Configuration`] from everything else: configuration problems
//! are reported to the caller, upstream problems are masked by the fallback.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, FolioError>;

#[derive(Debug, Error)]
pub enum FolioError {
    /// A required setting (usually the upstream credential) is missing.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The upstream API answered with a non-success status.
    #[error("upstream returned non-success status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The connection to the upstream failed while opening or reading.
    #[error("upstream transport error: {0}")]
    Transport(String),

    /// The upstream stream could not be decoded.
    #[error("malformed upstream stream: {0}")]
    MalformedStream(String),

    /// Generic forwarding of any backend-specific error that doesn’t fit another
    /// category.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl FolioError {
    /// `true` for errors raised before any upstream contact because the
    /// service itself is misconfigured.
    pub fn is_configuration(&self) -> bool {
        matches!(self, FolioError::Configuration(_))
    }
}
