//! The result envelope returned by every API client operation.
//!
//! On the wire the envelope looks like
//! `{ "success": true, "data": ... }` or
//! `{ "success": false, "error": { "message": ..., "code": ..., "field": ... } }`.
//! In Rust it is a sum type, so `success` can never disagree with which
//! payload is present.

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::ApiError;

/// Outcome of an API call: exactly one of data or error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ApiResponse<T> {
    /// The call succeeded and the body parsed as `T`.
    Success(T),
    /// The call failed at the transport, status or parse stage.
    Failure(ApiError),
}

impl<T> ApiResponse<T> {
    /// Wire discriminant.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrow the payload of a successful call.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the error of a failed call.
    #[must_use]
    pub const fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Take the payload, discarding any error.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Convert into a standard `Result` for `?`-style handling.
    ///
    /// # Errors
    ///
    /// Returns the carried [`ApiError`] when the call failed.
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(error) => Err(error),
        }
    }

    /// Transform the payload of a successful call.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResponse<U> {
        match self {
            Self::Success(data) => ApiResponse::Success(f(data)),
            Self::Failure(error) => ApiResponse::Failure(error),
        }
    }
}

impl<T> From<Result<T, ApiError>> for ApiResponse<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ApiResponse", 2)?;
        match self {
            Self::Success(data) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            Self::Failure(error) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

#[derive(Deserialize)]
struct RawEnvelope {
    success: bool,
    /// `None` only when the key is absent; `"data": null` is `Some(Null)`.
    #[serde(default, deserialize_with = "present")]
    data: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<ApiError>,
}

fn present<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<serde_json::Value>, D::Error> {
    serde_json::Value::deserialize(deserializer).map(Some)
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ApiResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawEnvelope::deserialize(deserializer)?;

        match (raw.success, raw.data, raw.error) {
            (true, Some(data), None) => T::deserialize(data)
                .map(Self::Success)
                .map_err(D::Error::custom),
            (true, None, None) => Err(D::Error::custom(
                "successful response is missing its data",
            )),
            (true, _, Some(_)) => Err(D::Error::custom(
                "successful response must not carry an error",
            )),
            (false, Some(data), _) if !data.is_null() => {
                Err(D::Error::custom("failed response must not carry data"))
            }
            (false, _, Some(error)) => Ok(Self::Failure(error)),
            (false, _, None) => Err(D::Error::custom("failed response is missing its error")),
        }
    }
}
