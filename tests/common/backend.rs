//! Mock restaurant backend.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use restaurant_mcp_server::core::BackendClient;
use restaurant_mcp_server::core::config::BackendConfig;
use serde_json::Value;
use tokio::net::TcpListener;

/// One request as seen by the mock backend.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    /// Decoded query pairs, in order.
    pub query: Vec<(String, String)>,
    /// JSON body, if one was sent.
    pub body: Option<Value>,
    pub headers: HeaderMap,
}

#[allow(dead_code)]
impl RecordedRequest {
    /// Value of a query parameter.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Value of a header as text.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// What the mock backend answers.
#[derive(Debug, Clone)]
pub struct MockReply {
    status: u16,
    body: String,
    content_type: &'static str,
    delay: Option<Duration>,
}

#[allow(dead_code)]
impl MockReply {
    /// 200 with a JSON body.
    pub fn json(body: Value) -> Self {
        Self::status(200, body)
    }

    /// Any status with a JSON body.
    pub fn status(status: u16, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            content_type: "application/json",
            delay: None,
        }
    }

    /// Any status with a plain text body.
    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            content_type: "text/plain",
            delay: None,
        }
    }

    /// Wait before answering.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

type Responder = dyn Fn(&RecordedRequest) -> MockReply + Send + Sync;

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responder: Arc<Responder>,
}

/// A backend stand-in listening on `127.0.0.1`.
///
/// Shuts down when dropped.
pub struct MockBackend {
    /// Base URL for the client (e.g., "http://127.0.0.1:12345").
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

#[allow(dead_code)]
impl MockBackend {
    /// Spawn a backend answering every request with `responder`.
    pub async fn spawn<F>(responder: F) -> Self
    where
        F: Fn(&RecordedRequest) -> MockReply + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            requests: requests.clone(),
            responder: Arc::new(responder),
        };

        let app = Router::new().fallback(handle).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Mock backend failed");
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            requests,
            _shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }

    /// The single request received; panics if there were more or fewer.
    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {:?}", requests);
        requests.into_iter().next().expect("one request")
    }

    /// Backend configuration pointing at this mock.
    pub fn config(&self) -> BackendConfig {
        BackendConfig {
            base_url: self.base_url.clone(),
            timeout_secs: 5,
            api_key: None,
        }
    }

    /// Client with no credential and a 5 second timeout.
    pub fn client(&self) -> Arc<BackendClient> {
        Arc::new(BackendClient::new(&self.config()).expect("Failed to build client"))
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let query = serde_urlencoded::from_str(uri.query().unwrap_or("")).unwrap_or_default();
    let body = if body.is_empty() {
        None
    } else {
        serde_json::from_slice(&body).ok()
    };

    let request = RecordedRequest {
        method,
        path: uri.path().to_string(),
        query,
        body,
        headers,
    };

    let reply = (state.responder)(&request);
    state
        .requests
        .lock()
        .expect("requests lock poisoned")
        .push(request);

    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, reply.content_type)], reply.body).into_response()
}
