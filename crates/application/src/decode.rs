//! Response classification and decoding.

use gw2_domain::{ApiRequest, ApiResponse, KnownCondition, StatusRules};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};

/// Turns raw responses into typed values or classified errors.
///
/// Every response goes through the same three steps, in order: known
/// conditions are detected from status and body, unclassified non-success
/// statuses become [`ApiError::Http`], and only then is the body decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoder {
    rules: StatusRules,
}

impl Decoder {
    /// Creates a decoder for one API flavour.
    #[must_use]
    pub const fn new(rules: StatusRules) -> Self {
        Self { rules }
    }

    /// The status rules in effect.
    #[must_use]
    pub const fn rules(&self) -> StatusRules {
        self.rules
    }

    /// Classifies `response` and returns its body text on success.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidKey`] or [`ApiError::MissingGameAccess`]
    /// for known conditions, and [`ApiError::Http`] for any other status the
    /// rules do not treat as success.
    pub fn check(&self, request: &ApiRequest, response: ApiResponse) -> ApiResult<String> {
        match self.rules.classify(&response, request.is_authenticated()) {
            Some(KnownCondition::InvalidKey) => {
                warn!(url = %request.url, status = %response.status, "API key rejected");
                return Err(ApiError::InvalidKey);
            }
            Some(KnownCondition::MissingGameAccess) => {
                warn!(url = %request.url, "account has no game access");
                return Err(ApiError::MissingGameAccess);
            }
            None => {}
        }

        if !self.rules.is_success(response.status) {
            debug!(url = %request.url, status = %response.status, "unsuccessful response");
            return Err(ApiError::Http {
                status: response.status,
                body: response.body,
            });
        }

        Ok(response.body)
    }

    /// Classifies `response` and decodes its body as `T`.
    ///
    /// Sequences decode the same way with `T = Vec<Item>`.
    ///
    /// # Errors
    ///
    /// Everything [`Decoder::check`] returns, plus [`ApiError::Decode`] if
    /// the body does not match `T`.
    pub fn decode<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
        response: ApiResponse,
    ) -> ApiResult<T> {
        let body = self.check(request, response)?;
        serde_json::from_str(&body).map_err(|source| {
            let url = request.full_url().to_string();
            warn!(url = %url, error = %source, "response did not match the expected shape");
            ApiError::Decode { url, source }
        })
    }

    /// Classifies `response` and returns the body untouched.
    ///
    /// # Errors
    ///
    /// Everything [`Decoder::check`] returns.
    pub fn raw(&self, request: &ApiRequest, response: ApiResponse) -> ApiResult<String> {
        self.check(request, response)
    }
}
