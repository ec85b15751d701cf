//! Fake todo API server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1 and serves `GET /todos` with whatever status, body, and delay
//! the test configured. The `Accept` header of every request is recorded so
//! tests can assert on what the client sent.
//!
//! # Example
//!
//! ```rust,no_run
//! # async fn example() {
//! use common::fake_todo_api::FakeTodoApi;
//!
//! let api = FakeTodoApi::start().await.unwrap();
//! api.respond(200, r#"[{"id": 1, "task": "Buy milk"}]"#).await;
//!
//! // Point the fetcher at api.todos_url()
//! # }
//! ```

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// State shared between the router and test code.
struct ApiState {
    status: u16,
    body: Vec<u8>,
    delay: Duration,
    /// `Accept` header of each request served, in arrival order.
    accept_headers: Vec<Option<String>>,
}

impl Default for ApiState {
    fn default() -> Self {
        Self {
            status: 200,
            body: b"[]".to_vec(),
            delay: Duration::ZERO,
            accept_headers: Vec::new(),
        }
    }
}

/// Handle to the running fake todo API server.
pub struct FakeTodoApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeTodoApi {
    /// Start the server on a random port. Returns once the server is
    /// listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState::default()));

        let app = Router::new()
            .route("/todos", get(serve_todos))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Base URL for the API (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Full URL of the todo endpoint.
    pub fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url())
    }

    /// Serve `body` with `status` from now on.
    pub async fn respond(&self, status: u16, body: impl Into<Vec<u8>>) {
        let mut state = self.state.lock().await;
        state.status = status;
        state.body = body.into();
    }

    /// Hold each response for `delay` before answering.
    pub async fn delay(&self, delay: Duration) {
        self.state.lock().await.delay = delay;
    }

    /// Number of requests served so far.
    pub async fn request_count(&self) -> usize {
        self.state.lock().await.accept_headers.len()
    }

    /// `Accept` headers seen so far, one entry per request.
    pub async fn accept_headers(&self) -> Vec<Option<String>> {
        self.state.lock().await.accept_headers.clone()
    }
}

async fn serve_todos(State(state): State<Arc<Mutex<ApiState>>>, headers: HeaderMap) -> Response {
    let (status, body, delay) = {
        let mut state = state.lock().await;
        let accept = headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        state.accept_headers.push(accept);
        (state.status, state.body.clone(), state.delay)
    };

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Body::from(body),
    )
        .into_response()
}
