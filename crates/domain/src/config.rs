//! Client configuration.
//!
//! All configuration is explicit: a `ClientConfig` value is handed to the
//! client factory, which applies it to every endpoint it builds. The default
//! API key lives here too, so there is no process-wide mutable key.

use std::sync::LazyLock;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::auth::ApiKey;
use crate::error::{DomainError, DomainResult};
use crate::response::StatusRules;

/// Base URL of the official API.
pub const OFFICIAL_BASE_URL: &str = "https://api.guildwars2.com/v2";

/// Base URL of the gw2treasures mirror.
pub const MIRROR_BASE_URL: &str = "https://api.gw2treasures.com";

/// Schema version pinned with every request to the official API.
pub const SCHEMA_VERSION: &str = "2021-04-06T21:00:00.000Z";

/// Value of the `Accept-Language` header.
pub const ACCEPT_LANGUAGE: &str = "en";

/// Environment variable holding the default API key.
pub const ENV_API_KEY: &str = "GW2_API_KEY";

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "GW2_BASE_URL";

#[allow(clippy::expect_used)]
static OFFICIAL_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse(OFFICIAL_BASE_URL).expect("valid official base URL"));

#[allow(clippy::expect_used)]
static MIRROR_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse(MIRROR_BASE_URL).expect("valid mirror base URL"));

/// Requests allowed per window, shared by everything built from one config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateLimit {
    /// Maximum requests in one window.
    pub requests: u32,
    /// Window length in seconds.
    pub period_secs: u64,
}

impl RateLimit {
    /// Creates a limit of `requests` per `period_secs`.
    #[must_use]
    pub const fn new(requests: u32, period_secs: u64) -> Self {
        Self {
            requests,
            period_secs,
        }
    }

    /// The window length.
    #[must_use]
    pub const fn period(&self) -> Duration {
        Duration::from_secs(self.period_secs)
    }
}

impl Default for RateLimit {
    fn default() -> Self {
        Self::new(300, 60)
    }
}

/// Configuration shared by every endpoint a client builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root; endpoint paths are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: Url,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Pinned schema version sent as `X-Schema-Version`.
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// `User-Agent` header value.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request throttle.
    #[serde(default)]
    pub rate_limit: RateLimit,

    /// How statuses and error bodies are interpreted.
    #[serde(default)]
    pub status_rules: StatusRules,

    /// Default API key applied to new endpoints.
    #[serde(default, skip_serializing)]
    pub api_key: Option<ApiKey>,
}

fn default_base_url() -> Url {
    OFFICIAL_URL.clone()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_schema_version() -> String {
    SCHEMA_VERSION.to_string()
}

fn default_user_agent() -> String {
    format!("gw2-rs/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::official()
    }
}

impl ClientConfig {
    /// Settings for the official API: 300 requests per minute.
    #[must_use]
    pub fn official() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            schema_version: default_schema_version(),
            user_agent: default_user_agent(),
            rate_limit: RateLimit::default(),
            status_rules: StatusRules::Official,
            api_key: None,
        }
    }

    /// Settings for the gw2treasures mirror: 600 requests per minute.
    #[must_use]
    pub fn mirror() -> Self {
        Self {
            base_url: MIRROR_URL.clone(),
            rate_limit: RateLimit::new(600, 60),
            status_rules: StatusRules::Mirror,
            ..Self::official()
        }
    }

    /// Points the client at another API root.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if `base_url` does not parse, or
    /// [`DomainError::CannotBeABase`] if it cannot carry a path.
    pub fn with_base_url(mut self, base_url: &str) -> DomainResult<Self> {
        let url =
            Url::parse(base_url).map_err(|e| DomainError::InvalidUrl(format!("{e}: {base_url}")))?;
        if url.cannot_be_a_base() {
            return Err(DomainError::CannotBeABase(base_url.to_string()));
        }
        self.base_url = url;
        Ok(self)
    }

    /// Sets the default API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<ApiKey>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Sets the request throttle.
    #[must_use]
    pub const fn with_rate_limit(mut self, rate_limit: RateLimit) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Applies [`ENV_API_KEY`] and [`ENV_BASE_URL`] from `lookup`.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a present value is not a valid key or URL.
    pub fn with_env_overrides<F>(self, lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut config = self;
        if let Some(key) = present(ENV_API_KEY) {
            config.api_key = Some(ApiKey::new(key)?);
        }
        if let Some(url) = present(ENV_BASE_URL) {
            config = config.with_base_url(url.trim())?;
        }
        Ok(config)
    }

    /// Checks that limits are usable.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfig`] for a zero timeout, a zero
    /// request budget or a zero-length window.
    pub fn validate(&self) -> DomainResult<()> {
        if self.timeout_secs == 0 {
            return Err(DomainError::InvalidConfig(
                "timeout must be at least one second".to_string(),
            ));
        }
        if self.rate_limit.requests == 0 || self.rate_limit.period_secs == 0 {
            return Err(DomainError::InvalidConfig(format!(
                "rate limit {}/{}s allows no requests",
                self.rate_limit.requests, self.rate_limit.period_secs
            )));
        }
        Ok(())
    }

    /// The per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
