#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chat_relay::config::RelayConfig;
use chat_relay::routes;
use chat_relay::state::AppState;
use serde_json::Value;
use tokio::sync::Mutex;

/// Fake inference backend that records every payload it receives.
#[derive(Clone)]
pub struct StubBackend {
    pub addr: SocketAddr,
    received: Arc<Mutex<Vec<Value>>>,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Vec<Value>>>,
}

impl StubBackend {
    /// Serve `body` with status 200 to every completion request.
    pub async fn json(body: Value) -> Self {
        Self::raw(StatusCode::OK, body.to_string()).await
    }

    pub async fn raw(status: StatusCode, body: impl Into<String>) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status,
            body: body.into(),
            received: received.clone(),
        };

        let app = Router::new()
            .route("/v1/chat/completions", post(stub_completions))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, received }
    }

    pub fn url(&self) -> String {
        format!("http://{}/v1/chat/completions", self.addr)
    }

    pub async fn received(&self) -> Vec<Value> {
        self.received.lock().await.clone()
    }
}

async fn stub_completions(
    State(state): State<StubState>,
    Json(payload): Json<Value>,
) -> impl IntoResponse {
    state.received.lock().await.push(payload);
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

/// A URL nothing is listening on.
pub async fn refused_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/v1/chat/completions", addr)
}

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

pub fn test_config(backend_url: String) -> RelayConfig {
    RelayConfig {
        backend_url,
        static_dir: static_dir(),
        ..Default::default()
    }
}

pub fn test_app(backend_url: String) -> Router {
    routes::app(Arc::new(AppState::new(test_config(backend_url))))
}
