//! Scripted transport double shared by client and store tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

use super::api::ApiClient;
use super::transport::{ApiRequest, ApiResponse, Transport, TransportError};
use crate::state::session::Session;

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    seen: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn reply(&self, status: u16, body: serde_json::Value) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse { status, body: body.to_string() }));
        self
    }

    pub fn reply_empty(&self, status: u16) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse { status, body: String::new() }));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(TransportError::Request(message.to_owned())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.seen.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("no scripted reply".to_owned())))
    }
}

/// Holds each request until the test releases its reply. Requests are keyed
/// by the `domain` field of their JSON body, so replies can be released in
/// any order regardless of which request was polled first.
#[derive(Default)]
pub struct GatedTransport {
    gates: Mutex<HashMap<String, oneshot::Receiver<ApiResponse>>>,
}

impl GatedTransport {
    /// Register a gate for the request whose body carries `domain`.
    pub fn gate(&self, domain: &str) -> oneshot::Sender<ApiResponse> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(domain.to_owned(), rx);
        tx
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for GatedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap_or("{}")).unwrap();
        let domain = body["domain"].as_str().unwrap_or_default().to_owned();
        let gate = self.gates.lock().unwrap().remove(&domain);
        match gate {
            Some(rx) => rx.await.map_err(|_| TransportError::Request(format!("gate for {domain} dropped"))),
            None => Err(TransportError::Request(format!("no gate for {domain}"))),
        }
    }
}

pub const TEST_BASE_URL: &str = "http://api.test/api";

/// Client wired to a fresh scripted transport.
pub fn scripted_client(session: Session) -> (ApiClient, Arc<ScriptedTransport>) {
    let transport = Arc::new(ScriptedTransport::default());
    let client = ApiClient::new(TEST_BASE_URL, session, transport.clone());
    (client, transport)
}
