//! Classification of API-reported conditions.
//!
//! Known conditions are detected from the status code and a case-insensitive
//! match on the body text, before any attempt to decode the body.

use serde::{Deserialize, Serialize};

use crate::response::{ApiResponse, StatusCode};

const INVALID_KEY_MARKER: &str = "invalid";
const NO_GAME_ACCESS_MARKER: &str = "account does not have game access";

/// A well-known condition reported by the API in an error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownCondition {
    /// The key was rejected. May also be caused by server-side key caching,
    /// so it can clear up on a later attempt.
    InvalidKey,
    /// The account behind the key has no game access (possibly suspended).
    MissingGameAccess,
}

/// Status interpretation for one API flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusRules {
    /// The official API: 200 and 206 succeed; invalid keys and missing game
    /// access are recognised from 400-403 bodies.
    #[default]
    Official,
    /// The gw2treasures mirror: anything below 400 is decoded; 401 means
    /// invalid key.
    Mirror,
}

impl StatusRules {
    /// Returns true if the body of a response with this status should be decoded.
    #[must_use]
    pub const fn is_success(self, status: StatusCode) -> bool {
        match self {
            Self::Official => matches!(status.0, 200 | 206),
            Self::Mirror => !status.is_error(),
        }
    }

    /// Detects a known condition in `response`.
    ///
    /// `authenticated` tells whether the request carried an `Authorization`
    /// header; a key cannot be invalid if none was sent.
    #[must_use]
    pub fn classify(self, response: &ApiResponse, authenticated: bool) -> Option<KnownCondition> {
        let status = response.status.as_u16();
        match self {
            Self::Official => {
                let body = response.body.to_lowercase();
                if (400..=403).contains(&status)
                    && authenticated
                    && body.contains(INVALID_KEY_MARKER)
                {
                    return Some(KnownCondition::InvalidKey);
                }
                if response.status == StatusCode::BAD_REQUEST
                    && body.contains(NO_GAME_ACCESS_MARKER)
                {
                    return Some(KnownCondition::MissingGameAccess);
                }
                None
            }
            Self::Mirror => {
                (response.status == StatusCode::UNAUTHORIZED).then_some(KnownCondition::InvalidKey)
            }
        }
    }
}
