//! Application error types

use gw2_domain::{DomainError, StatusCode};
use thiserror::Error;

use crate::ports::TransportError;

/// Errors surfaced by every fetch operation.
///
/// Nothing is retried or swallowed: each variant reaches the caller of the
/// fetch that caused it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, read or timeout).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The API rejected the key. Also reported while a freshly created key
    /// is still propagating through the server's caches, so the same key may
    /// work on a later attempt.
    #[error("API key was reported as invalid")]
    InvalidKey,

    /// The account behind the key has no game access.
    #[error("account does not have game access")]
    MissingGameAccess,

    /// A guild search by name found nothing.
    #[error("no guild named `{name}`")]
    GuildNotFound {
        /// The name searched for.
        name: String,
    },

    /// Any other non-success status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// Response status.
        status: StatusCode,
        /// Response body text.
        body: String,
    },

    /// The body did not match the expected shape. Points at a client bug or
    /// an unannounced schema change, not at a runtime condition.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// Request URL including query.
        url: String,
        /// The decoder's error.
        #[source]
        source: serde_json::Error,
    },

    /// `ids=all` was requested from an endpoint that does not accept it.
    #[error("endpoint `{path}` does not accept ids=all")]
    AllIdsUnsupported {
        /// The endpoint's resolved path.
        path: String,
    },

    /// Building the endpoint or its configuration failed.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
}

impl ApiError {
    /// The HTTP status, for errors that came with an unclassified response.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true for errors the API itself reported.
    #[must_use]
    pub const fn is_api_reported(&self) -> bool {
        matches!(
            self,
            Self::InvalidKey | Self::MissingGameAccess | Self::Http { .. }
        )
    }
}

/// Result type alias for application operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_http_error_display() {
        let err = ApiError::Http {
            status: StatusCode::NOT_FOUND,
            body: r#"{"text":"no such id"}"#.to_string(),
        };
        assert_eq!(err.to_string(), r#"HTTP 404 Not Found: {"text":"no such id"}"#);
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(err.is_api_reported());
    }

    #[test]
    fn test_transport_error_is_transparent() {
        let err: ApiError = TransportError::Timeout { timeout_secs: 10 }.into();
        assert_eq!(err.to_string(), "request timed out after 10s");
        assert!(!err.is_api_reported());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_guild_not_found_names_the_guild() {
        let err = ApiError::GuildNotFound {
            name: "Lords of Ascalon".to_string(),
        };
        assert_eq!(err.to_string(), "no guild named `Lords of Ascalon`");
    }
}
