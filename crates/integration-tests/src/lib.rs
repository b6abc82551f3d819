//! Integration tests for Storefront Kit.
//!
//! Tests run the real [`storekit_client::ApiClient`] against an in-process
//! HTTP backend that answers with scripted responses and records every
//! request it receives.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p storekit-integration-tests
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! let backend = MockBackend::start().await?;
//! backend.respond(Method::GET, "/products/42", Reply::json(StatusCode::OK, json!({...}))).await;
//!
//! let client = create_api_client(backend.base_url())?;
//! let response: ApiResponse<Product> = client.get("/products/42").await;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tokio::{net::TcpListener, sync::RwLock, task::JoinHandle};

/// A canned response for one method and path.
#[derive(Debug, Clone)]
pub struct Reply {
    status: StatusCode,
    content_type: Option<&'static str>,
    body: Bytes,
}

impl Reply {
    /// Respond with `body` serialized as JSON.
    ///
    /// # Panics
    ///
    /// Panics if `body` cannot be serialized.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn json(status: StatusCode, body: impl Serialize) -> Self {
        let bytes = serde_json::to_vec(&body).expect("mock reply body must serialize");
        Self {
            status,
            content_type: Some("application/json"),
            body: Bytes::from(bytes),
        }
    }

    /// Respond with a plain-text body.
    #[must_use]
    pub fn text(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            content_type: Some("text/plain; charset=utf-8"),
            body: Bytes::copy_from_slice(body.as_bytes()),
        }
    }

    /// Respond with no body at all.
    #[must_use]
    pub const fn empty(status: StatusCode) -> Self {
        Self {
            status,
            content_type: None,
            body: Bytes::new(),
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self.content_type {
            Some(content_type) => {
                (self.status, [(header::CONTENT_TYPE, content_type)], self.body).into_response()
            }
            None => (self.status, self.body).into_response(),
        }
    }
}

/// One request as the backend saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    /// Header value as a string, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Body parsed as JSON; `None` when the body is empty or not JSON.
    #[must_use]
    pub fn json(&self) -> Option<serde_json::Value> {
        if self.body.is_empty() {
            return None;
        }
        serde_json::from_slice(&self.body).ok()
    }
}

#[derive(Default)]
struct BackendState {
    replies: RwLock<HashMap<(Method, String), Reply>>,
    requests: RwLock<Vec<RecordedRequest>>,
}

/// Scripted HTTP backend bound to an ephemeral local port.
///
/// The server task is aborted when the backend is dropped.
pub struct MockBackend {
    addr: SocketAddr,
    state: Arc<BackendState>,
    server: JoinHandle<()>,
}

impl MockBackend {
    /// Bind to `127.0.0.1:0` and start serving.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(BackendState::default());

        let app = Router::new()
            .fallback(handle)
            .with_state(Arc::clone(&state));

        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            addr,
            state,
            server,
        })
    }

    /// Base URL the client should be pointed at.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Script the reply for `method` on `path`, replacing any earlier one.
    pub async fn respond(&self, method: Method, path: &str, reply: Reply) {
        self.state
            .replies
            .write()
            .await
            .insert((method, path.to_string()), reply);
    }

    /// Every request received so far, in arrival order.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.read().await.clone()
    }

    /// The most recent request, if any.
    pub async fn last_request(&self) -> Option<RecordedRequest> {
        self.state.requests.read().await.last().cloned()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn handle(
    State(state): State<Arc<BackendState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();

    state.requests.write().await.push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        headers,
        body,
    });

    let reply = state.replies.read().await.get(&(method.clone(), path.clone())).cloned();

    reply.map_or_else(
        || {
            Reply::json(
                StatusCode::NOT_FOUND,
                serde_json::json!({ "message": format!("No scripted reply for {method} {path}") }),
            )
            .into_response()
        },
        IntoResponse::into_response,
    )
}

/// A local port with nothing listening on it.
///
/// # Errors
///
/// Returns an error if a probe listener cannot be bound.
pub async fn unused_port() -> std::io::Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    drop(listener);
    Ok(port)
}
