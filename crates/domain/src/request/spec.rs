//! Outbound request description

use url::Url;

use crate::auth::ApiKey;
use crate::request::QueryParams;

/// One outbound `GET`, described as plain data.
///
/// Built by the endpoint layer and executed by a transport adapter, which
/// adds the session's fixed headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Fully qualified endpoint URL, without query string.
    pub url: Url,
    /// Query parameters, in the order they are sent.
    pub query: QueryParams,
    /// Bearer credential, if the endpoint instance is authenticated.
    pub api_key: Option<ApiKey>,
}

impl ApiRequest {
    /// Creates an unauthenticated request without parameters.
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            url,
            query: QueryParams::new(),
            api_key: None,
        }
    }

    /// Replaces the query parameters.
    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Attaches or clears the bearer credential.
    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<ApiKey>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Returns true if an `Authorization` header will be sent.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.api_key.is_some()
    }

    /// The URL with the query string applied.
    #[must_use]
    pub fn full_url(&self) -> Url {
        let mut url = self.url.clone();
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for param in &self.query {
                pairs.append_pair(&param.key, &param.value);
            }
        }
        url
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn url() -> Url {
        Url::parse("https://api.guildwars2.com/v2/items").unwrap()
    }

    #[test]
    fn test_full_url_without_query() {
        let request = ApiRequest::new(url());
        assert_eq!(
            request.full_url().as_str(),
            "https://api.guildwars2.com/v2/items"
        );
        assert!(!request.is_authenticated());
    }

    #[test]
    fn test_full_url_encodes_comma_list() {
        let request =
            ApiRequest::new(url()).with_query(QueryParams::new().with("ids", "1,2,3"));
        assert_eq!(
            request.full_url().as_str(),
            "https://api.guildwars2.com/v2/items?ids=1%2C2%2C3"
        );
        let pairs: Vec<(String, String)> = request
            .full_url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs, [("ids".to_string(), "1,2,3".to_string())]);
    }

    #[test]
    fn test_api_key_attached() {
        let key = ApiKey::new("KEY").unwrap();
        let request = ApiRequest::new(url()).with_api_key(Some(key));
        assert!(request.is_authenticated());
    }
}
