//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building endpoints or requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided base URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The base URL cannot carry path segments (e.g. `data:` URLs).
    #[error("URL cannot be used as a base: {0}")]
    CannotBeABase(String),

    /// A path template and its segment values do not line up.
    #[error("path template `{template}` expects {expected} segment(s), got {actual}")]
    SegmentCount {
        /// The descriptor's path template.
        template: &'static str,
        /// Number of `{}` placeholders in the template.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// A path segment value is empty.
    #[error("empty path segment for template `{0}`")]
    EmptySegment(&'static str),

    /// A path segment value is `.` or `..`, which URL normalisation would
    /// collapse into a different path.
    #[error("dot path segment `{value}` for template `{template}`")]
    DotSegment {
        /// Descriptor path template.
        template: &'static str,
        /// The rejected value.
        value: String,
    },

    /// An API key is empty or contains characters that cannot be sent in a header.
    #[error("invalid API key: {0}")]
    InvalidApiKey(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
