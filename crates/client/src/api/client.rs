//! The bound API client and its shared request routine.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use storekit_core::ApiResponse;
use tracing::{debug, instrument, warn};

use super::error::{ClientError, RequestError, parse_error_body};
use super::headers::RequestHeaders;
use crate::config::ApiConfig;

/// HTTP methods the client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// Bind a client to `base_url`.
///
/// # Errors
///
/// Returns error if the HTTP client fails to build.
pub fn create_api_client(base_url: impl Into<String>) -> Result<ApiClient, ClientError> {
    ApiClient::new(base_url)
}

/// Client for the platform REST API.
///
/// Every operation resolves to an [`ApiResponse`]; failures are returned as
/// data and never as `Err` or panics. The client holds only its base URL and
/// client-level headers. Idle connections are not kept, so each call is an
/// independent round-trip.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: String,
    headers: RequestHeaders,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .field("headers", &self.inner.headers)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for `base_url`. The URL is not validated; a malformed
    /// value surfaces as a failed response on the first call.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_headers(base_url, RequestHeaders::new())
    }

    /// Create a client from configuration, sending a bearer token when one is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        let headers = config
            .auth_token
            .as_ref()
            .map_or_else(RequestHeaders::new, |token| {
                RequestHeaders::new().with_bearer_token(token)
            });
        Self::with_headers(config.base_url.clone(), headers)
    }

    /// Create a client that sends `headers` with every request, on top of the
    /// JSON defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn with_headers(
        base_url: impl Into<String>,
        headers: RequestHeaders,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                http,
                base_url: base_url.into(),
                headers,
            }),
        })
    }

    /// The base URL every path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Fetch a resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.request::<T, ()>(HttpMethod::Get, path, None, &RequestHeaders::new())
            .await
    }

    /// Create or mutate a resource. `None` sends no body.
    pub async fn post<T, B>(&self, path: &str, body: Option<&B>) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(HttpMethod::Post, path, body, &RequestHeaders::new())
            .await
    }

    /// Replace a resource. `None` sends no body.
    pub async fn put<T, B>(&self, path: &str, body: Option<&B>) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(HttpMethod::Put, path, body, &RequestHeaders::new())
            .await
    }

    /// Remove a resource.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.request::<T, ()>(HttpMethod::Delete, path, None, &RequestHeaders::new())
            .await
    }

    /// Issue a request with per-call headers.
    ///
    /// Headers are layered as: JSON defaults, then client-level headers, then
    /// `headers`; later layers win on key collision.
    #[instrument(skip(self, body, headers), fields(method = %method, path = %path))]
    pub async fn request<T, B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        headers: &RequestHeaders,
    ) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        match self.execute(method, path, body, headers).await {
            Ok(data) => {
                debug!("API request succeeded");
                ApiResponse::Success(data)
            }
            Err(err) => {
                match &err {
                    RequestError::Status { status, .. } => {
                        warn!(status = *status, error = %err, "API returned non-success status");
                    }
                    _ => warn!(error = %err, "API request failed"),
                }
                ApiResponse::Failure(err.into())
            }
        }
    }

    async fn execute<T, B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        headers: &RequestHeaders,
    ) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{path}", self.inner.base_url);
        let headers = RequestHeaders::defaults()
            .merged_with(&self.inner.headers)
            .merged_with(headers);

        let mut builder = self
            .inner
            .http
            .request(method.into(), &url)
            .headers(headers.to_header_map()?);

        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(RequestError::Serialize)?;
            builder = builder.body(payload);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(RequestError::Status {
                status: status.as_u16(),
                detail: parse_error_body(&bytes),
            });
        }

        decode_body(&bytes)
    }
}

/// Parse a success body. An empty body is read as JSON `null`, so it decodes
/// into `()` or `Option<_>` and fails for anything that needs content.
fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, RequestError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return T::deserialize(serde_json::Value::Null).map_err(RequestError::Decode);
    }
    serde_json::from_slice(bytes).map_err(RequestError::Decode)
}
