//! Loopback mock of the API for integration tests.

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, Uri};
use gw2::{ApiKey, ClientConfig, Gw2Client, RateLimit};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Routes client logs to the test output; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// One request as the server saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub query: HashMap<String, String>,
    pub headers: HeaderMap,
}

impl Recorded {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn bearer(&self) -> Option<&str> {
        self.header("authorization")
            .and_then(|v| v.strip_prefix("Bearer "))
    }

    /// Ids from the `ids` parameter, in order.
    pub fn ids(&self) -> Vec<String> {
        self.param("ids")
            .map(|ids| ids.split(',').map(ToString::to_string).collect())
            .unwrap_or_default()
    }
}

type Responder = dyn Fn(&Recorded) -> (u16, String) + Send + Sync;

#[derive(Clone)]
struct MockState {
    responder: Arc<Responder>,
    log: Arc<Mutex<Vec<Recorded>>>,
}

/// A running mock server.
pub struct MockApi {
    pub base_url: String,
    log: Arc<Mutex<Vec<Recorded>>>,
}

impl MockApi {
    /// Starts a server answering every request with `responder`.
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&Recorded) -> (u16, String) + Send + Sync + 'static,
    {
        init_tracing();
        let log = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            responder: Arc::new(responder),
            log: Arc::clone(&log),
        };
        let router = Router::new().fallback(handle).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/v2"),
            log,
        }
    }

    /// Configuration for the official flavour pointed at this server.
    pub fn config(&self) -> ClientConfig {
        ClientConfig::official()
            .with_base_url(&self.base_url)
            .unwrap()
            .with_rate_limit(RateLimit::new(10_000, 60))
    }

    pub fn client(&self) -> Gw2Client {
        Gw2Client::from_config(&self.config()).unwrap()
    }

    pub fn client_with_key(&self, key: &str) -> Gw2Client {
        self.client().with_api_key(Some(ApiKey::new(key).unwrap()))
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.log.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }
}

async fn handle(
    State(state): State<MockState>,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, [(&'static str, &'static str); 1], String) {
    let recorded = Recorded {
        path: uri.path().to_string(),
        query,
        headers,
    };
    let (status, body) = (state.responder)(&recorded);
    state.log.lock().unwrap().push(recorded);
    (
        StatusCode::from_u16(status).unwrap(),
        [("content-type", "application/json")],
        body,
    )
}

/// Answers `ids` lookups with `{"id": n}` records for every id up to
/// `max_known`, with 206 when some ids were unknown; the bare path lists
/// `1..=max_known`.
pub fn numbered_records(max_known: u32) -> impl Fn(&Recorded) -> (u16, String) + Send + Sync {
    move |request| {
        if request.query.is_empty() {
            let ids: Vec<u32> = (1..=max_known).collect();
            return (200, serde_json::to_string(&ids).unwrap());
        }
        let requested: Vec<u32> = request.ids().iter().map(|id| id.parse().unwrap()).collect();
        let known: Vec<serde_json::Value> = requested
            .iter()
            .filter(|id| **id <= max_known)
            .map(|id| serde_json::json!({ "id": id }))
            .collect();
        let status = if known.len() == requested.len() { 200 } else { 206 };
        (status, serde_json::to_string(&known).unwrap())
    }
}
