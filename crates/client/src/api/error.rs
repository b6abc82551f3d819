//! Errors raised inside the client and their conversion to [`ApiError`].
//!
//! None of these cross the public request boundary as `Err`: every
//! [`RequestError`] is turned into the failure side of an `ApiResponse`.

use serde::Deserialize;
use storekit_core::ApiError;
use thiserror::Error;

/// Error code for transport-level failures.
pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
/// Error code for a success response whose body is not the expected JSON.
pub const PARSE_ERROR: &str = "PARSE_ERROR";
/// Error code for a request body that could not be serialized.
pub const SERIALIZE_ERROR: &str = "SERIALIZE_ERROR";
/// Error code for a header value that is not valid on the wire.
pub const INVALID_HEADER: &str = "INVALID_HEADER";

/// Errors that can occur when constructing an [`super::ApiClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP transport could not be initialized.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Failure of a single request, before normalization.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A header value contains characters not allowed on the wire.
    #[error("Invalid value for header {0}")]
    InvalidHeader(&'static str),

    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered outside the 2xx range.
    #[error("HTTP error! status: {status}")]
    Status {
        status: u16,
        /// Error details recovered from the response body, if recognizable.
        detail: Option<ApiError>,
    },

    /// A success response whose body is not valid JSON for the expected type.
    #[error("Failed to parse response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl RequestError {
    /// Machine-readable code reported to callers.
    #[must_use]
    pub fn code(&self) -> String {
        match self {
            Self::Serialize(_) => SERIALIZE_ERROR.to_string(),
            Self::InvalidHeader(_) => INVALID_HEADER.to_string(),
            Self::Transport(_) => NETWORK_ERROR.to_string(),
            Self::Status { status, .. } => format!("HTTP_{status}"),
            Self::Decode(_) => PARSE_ERROR.to_string(),
        }
    }
}

impl From<RequestError> for ApiError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::Transport(ref source) => {
                let reason = if source.is_timeout() {
                    "request timed out"
                } else if source.is_connect() {
                    "could not connect to server"
                } else {
                    "request failed"
                };
                Self::new(format!("Network error: {reason} ({source})")).with_code(NETWORK_ERROR)
            }
            RequestError::Status {
                status,
                detail: Some(detail),
            } if !detail.message.trim().is_empty() => Self {
                message: format!("HTTP error! status: {status}: {}", detail.message.trim()),
                code: detail.code.or_else(|| Some(format!("HTTP_{status}"))),
                field: detail.field,
            },
            other => {
                let code = other.code();
                Self::new(other.to_string()).with_code(code)
            }
        }
    }
}

/// Recognized shapes of an error response body.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    /// `{ "message": ..., "code": ..., "field": ... }`
    Structured(ApiError),
    /// `{ "error": { "message": ... } }` or `{ "error": "..." }`
    Wrapped { error: WrappedError },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WrappedError {
    Structured(ApiError),
    Text(String),
}

/// Recover error details from a non-2xx body. Returns `None` for empty,
/// non-JSON or unrecognized bodies.
pub(crate) fn parse_error_body(body: &[u8]) -> Option<ApiError> {
    match serde_json::from_slice::<ErrorBody>(body).ok()? {
        ErrorBody::Structured(error)
        | ErrorBody::Wrapped {
            error: WrappedError::Structured(error),
        } => Some(error),
        ErrorBody::Wrapped {
            error: WrappedError::Text(message),
        } => Some(ApiError::new(message)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_without_detail_mentions_code() {
        let err: ApiError = RequestError::Status {
            status: 404,
            detail: None,
        }
        .into();

        assert_eq!(err.message, "HTTP error! status: 404");
        assert_eq!(err.code.as_deref(), Some("HTTP_404"));
        assert!(err.field.is_none());
    }

    #[test]
    fn test_status_with_detail_preserves_structure() {
        let detail = ApiError::new("Email already registered")
            .with_code("DUPLICATE_EMAIL")
            .with_field("email");
        let err: ApiError = RequestError::Status {
            status: 409,
            detail: Some(detail.clone()),
        }
        .into();

        assert_eq!(err.message, "HTTP error! status: 409: Email already registered");
        assert_eq!(err.code, detail.code);
        assert_eq!(err.field, detail.field);
    }

    #[test]
    fn test_status_detail_without_code_gets_status_code() {
        let err: ApiError = RequestError::Status {
            status: 422,
            detail: Some(ApiError::new("Quantity must be positive").with_field("quantity")),
        }
        .into();

        assert_eq!(err.message, "HTTP error! status: 422: Quantity must be positive");
        assert_eq!(err.code.as_deref(), Some("HTTP_422"));
        assert_eq!(err.field.as_deref(), Some("quantity"));
    }

    #[test]
    fn test_status_blank_detail_falls_back_to_status_message() {
        let err: ApiError = RequestError::Status {
            status: 500,
            detail: Some(ApiError::new("  ")),
        }
        .into();

        assert_eq!(err.message, "HTTP error! status: 500");
    }

    #[test]
    fn test_decode_error_is_reported_as_parse_failure() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err: ApiError = RequestError::Decode(source).into();

        assert!(err.message.starts_with("Failed to parse response body"));
        assert_eq!(err.code.as_deref(), Some(PARSE_ERROR));
    }

    #[test]
    fn test_parse_error_body_shapes() {
        let flat = parse_error_body(br#"{"message":"Out of stock","code":"OOS"}"#).unwrap();
        assert_eq!(flat.code.as_deref(), Some("OOS"));

        let nested =
            parse_error_body(br#"{"success":false,"error":{"message":"Bad SKU","field":"sku"}}"#)
                .unwrap();
        assert_eq!(nested.field.as_deref(), Some("sku"));

        let text = parse_error_body(br#"{"error":"Unauthorized"}"#).unwrap();
        assert_eq!(text.message, "Unauthorized");
    }

    #[test]
    fn test_parse_error_body_unrecognized() {
        assert!(parse_error_body(b"").is_none());
        assert!(parse_error_body(b"<h1>502 Bad Gateway</h1>").is_none());
        assert!(parse_error_body(br#"{"detail":"nope"}"#).is_none());
        assert!(parse_error_body(b"[1,2,3]").is_none());
    }
}
