//! API key handling.
//!
//! The key is a bearer credential. It is never printed in full: `Debug`
//! redacts everything but a short prefix so keys do not leak into logs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// An API key sent as `Authorization: Bearer <key>`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a key after trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidApiKey`] if the key is empty or contains
    /// characters that are not visible ASCII.
    pub fn new(key: impl Into<String>) -> DomainResult<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidApiKey("key is empty".to_string()));
        }
        if !trimmed.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(DomainError::InvalidApiKey(
                "key contains non-printable characters".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the raw key.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(4).collect();
        write!(f, "ApiKey({prefix}…)")
    }
}

impl TryFrom<String> for ApiKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ApiKey> for String {
    fn from(key: ApiKey) -> Self {
        key.0
    }
}

impl std::str::FromStr for ApiKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
