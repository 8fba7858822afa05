//! Test harness for client integration tests.
//!
//! Serves a scripted `/api/search` and `/api/stats` from an axum router bound to
//! an ephemeral port, and records every search body it receives.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use medisearch_core::{ClientConfig, SearchClient};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::{Arc, Mutex};

struct Shared {
    status: AtomicU16,
    body: String,
    requests: Mutex<Vec<Value>>,
    content_types: Mutex<Vec<String>>,
}

pub struct MockService {
    shared: Arc<Shared>,
    addr: SocketAddr,
}

impl MockService {
    /// 200 with the given JSON body.
    pub async fn ok(body: Value) -> Self {
        Self::raw(200, &body.to_string()).await
    }

    pub async fn status(status: u16, body: Value) -> Self {
        Self::raw(status, &body.to_string()).await
    }

    /// Reply with `body` verbatim, labelled as JSON whether or not it is.
    pub async fn raw(status: u16, body: &str) -> Self {
        let shared = Arc::new(Shared {
            status: AtomicU16::new(status),
            body: body.to_string(),
            requests: Mutex::new(Vec::new()),
            content_types: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/api/search", post(search))
            .route("/api/stats", get(stats))
            .with_state(shared.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("No local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        MockService { shared, addr }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/api/search", self.addr)
    }

    pub fn client(&self) -> SearchClient {
        let config = ClientConfig::default()
            .with_endpoint(&self.endpoint())
            .expect("Test endpoint should parse");
        SearchClient::new(&config).expect("Failed to build client")
    }

    /// Change the status code for subsequent searches.
    pub fn set_status(&self, status: u16) {
        self.shared.status.store(status, Ordering::SeqCst);
    }

    /// JSON bodies of every search received so far.
    pub fn requests(&self) -> Vec<Value> {
        self.shared.requests.lock().unwrap().clone()
    }

    pub fn content_types(&self) -> Vec<String> {
        self.shared.content_types.lock().unwrap().clone()
    }
}

async fn search(
    State(shared): State<Arc<Shared>>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    shared.content_types.lock().unwrap().push(content_type);
    let parsed: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    shared.requests.lock().unwrap().push(parsed);

    let status = StatusCode::from_u16(shared.status.load(Ordering::SeqCst))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], shared.body.clone())
}

async fn stats() -> Json<Value> {
    Json(serde_json::json!({
        "total_terms": 1234,
        "total_documents": 42,
        "total_medicaments": 42,
        "indexed_medicaments": 40,
        "model_loaded": true,
        "status": "operational"
    }))
}

/// An endpoint on a port nothing is listening on.
pub async fn closed_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local addr");
    drop(listener);
    format!("http://{addr}/api/search")
}
