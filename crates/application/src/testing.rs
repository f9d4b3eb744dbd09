//! In-memory transport for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gw2_domain::{ApiRequest, ApiResponse, ClientConfig};

use crate::factory::ClientFactory;
use crate::ports::{Connector, Transport, TransportError};

type Responder = dyn Fn(&ApiRequest) -> Result<ApiResponse, TransportError> + Send + Sync;

/// Answers every request with a closure and records what was sent.
pub struct RecordingTransport {
    responder: Box<Responder>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&ApiRequest) -> Result<ApiResponse, TransportError> + Send + Sync + 'static,
    {
        Arc::new(Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Always answers `status` with `body`.
    pub fn fixed(status: u16, body: &str) -> Arc<Self> {
        let body = body.to_string();
        Self::new(move |_| Ok(ApiResponse::new(status, body.clone())))
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// `(path, query string)` of every request, in send order.
    pub fn sent(&self) -> Vec<(String, Option<String>)> {
        self.requests()
            .iter()
            .map(|request| {
                let url = request.full_url();
                (url.path().to_string(), url.query().map(ToString::to_string))
            })
            .collect()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn fetch(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        (self.responder)(request)
    }
}

/// Hands out the same recording transport and counts connections.
pub struct RecordingConnector {
    pub transport: Arc<RecordingTransport>,
    connects: AtomicUsize,
}

impl RecordingConnector {
    pub fn new(transport: Arc<RecordingTransport>) -> Arc<Self> {
        Arc::new(Self {
            transport,
            connects: AtomicUsize::new(0),
        })
    }

    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

impl Connector for RecordingConnector {
    fn connect(&self) -> Result<Arc<dyn Transport>, TransportError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::clone(&self.transport) as Arc<dyn Transport>)
    }
}

/// A factory for the official API backed by `transport`.
pub fn factory(transport: &Arc<RecordingTransport>) -> (ClientFactory, Arc<RecordingConnector>) {
    let connector = RecordingConnector::new(Arc::clone(transport));
    let factory = ClientFactory::new(&ClientConfig::official(), Arc::clone(&connector) as Arc<dyn Connector>)
        .unwrap();
    (factory, connector)
}

/// Echoes the requested ids back as `{"id": n}` records, dropping ids above
/// `max_known` the way the API does with a 206.
pub fn echo_ids(max_known: u32) -> Arc<RecordingTransport> {
    RecordingTransport::new(move |request| {
        let Some(ids) = request.query.get("ids") else {
            let all: Vec<u32> = (1..=max_known).collect();
            return Ok(ApiResponse::new(200, serde_json::to_string(&all).unwrap()));
        };
        let requested: Vec<u32> = ids.split(',').map(|id| id.parse().unwrap()).collect();
        let known: Vec<serde_json::Value> = requested
            .iter()
            .filter(|id| **id <= max_known)
            .map(|id| serde_json::json!({ "id": id }))
            .collect();
        let status = if known.len() == requested.len() { 200 } else { 206 };
        Ok(ApiResponse::new(status, serde_json::to_string(&known).unwrap()))
    })
}
