//! Request headers restricted to a closed set of keys.

use std::collections::BTreeMap;

use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue,
};
use secrecy::{ExposeSecret, SecretString};

use super::error::RequestError;

/// Content type sent with every request unless overridden.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Header keys a caller may set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeaderKey {
    ContentType,
    Accept,
    AcceptLanguage,
    Authorization,
    IdempotencyKey,
    RequestId,
}

impl HeaderKey {
    /// Canonical header name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ContentType => "Content-Type",
            Self::Accept => "Accept",
            Self::AcceptLanguage => "Accept-Language",
            Self::Authorization => "Authorization",
            Self::IdempotencyKey => "Idempotency-Key",
            Self::RequestId => "X-Request-Id",
        }
    }

    fn header_name(self) -> HeaderName {
        match self {
            Self::ContentType => CONTENT_TYPE,
            Self::Accept => ACCEPT,
            Self::AcceptLanguage => ACCEPT_LANGUAGE,
            Self::Authorization => AUTHORIZATION,
            Self::IdempotencyKey => HeaderName::from_static("idempotency-key"),
            Self::RequestId => HeaderName::from_static("x-request-id"),
        }
    }
}

impl std::fmt::Display for HeaderKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered set of request headers.
///
/// Implements `Debug` manually to redact `Authorization`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    entries: BTreeMap<HeaderKey, String>,
}

impl RequestHeaders {
    /// An empty header set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed defaults every request starts from.
    #[must_use]
    pub fn defaults() -> Self {
        Self::new().with(HeaderKey::ContentType, JSON_CONTENT_TYPE)
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: HeaderKey, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder-style `Authorization: Bearer <token>`.
    #[must_use]
    pub fn with_bearer_token(self, token: &SecretString) -> Self {
        self.with(
            HeaderKey::Authorization,
            format!("Bearer {}", token.expose_secret()),
        )
    }

    /// Set a header, returning the value it replaced.
    pub fn insert(&mut self, key: HeaderKey, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key, value.into())
    }

    /// Remove a header, returning its value.
    pub fn remove(&mut self, key: HeaderKey) -> Option<String> {
        self.entries.remove(&key)
    }

    #[must_use]
    pub fn get(&self, key: HeaderKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (HeaderKey, &str)> {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Layer `overrides` on top of `self`. Keys present in both take the
    /// value from `overrides`; all other keys are kept.
    #[must_use]
    pub fn merged_with(&self, overrides: &Self) -> Self {
        let mut merged = self.clone();
        merged.entries.extend(
            overrides
                .entries
                .iter()
                .map(|(key, value)| (*key, value.clone())),
        );
        merged
    }

    /// Convert to a transport header map.
    pub(crate) fn to_header_map(&self) -> Result<HeaderMap, RequestError> {
        let mut map = HeaderMap::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            let mut header_value = HeaderValue::from_str(value)
                .map_err(|_| RequestError::InvalidHeader(key.as_str()))?;
            if *key == HeaderKey::Authorization {
                header_value.set_sensitive(true);
            }
            map.insert(key.header_name(), header_value);
        }
        Ok(map)
    }
}

impl std::fmt::Debug for RequestHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(key, value)| {
                let shown = if *key == HeaderKey::Authorization {
                    "[REDACTED]"
                } else {
                    value.as_str()
                };
                (key.as_str(), shown)
            }))
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_declare_json() {
        let headers = RequestHeaders::defaults();
        assert_eq!(headers.get(HeaderKey::ContentType), Some("application/json"));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_merge_caller_wins_on_collision() {
        let caller = RequestHeaders::new()
            .with(HeaderKey::ContentType, "application/merge-patch+json")
            .with(HeaderKey::RequestId, "req-1");

        let merged = RequestHeaders::defaults()
            .with(HeaderKey::Accept, "application/json")
            .merged_with(&caller);

        assert_eq!(
            merged.get(HeaderKey::ContentType),
            Some("application/merge-patch+json")
        );
        assert_eq!(merged.get(HeaderKey::Accept), Some("application/json"));
        assert_eq!(merged.get(HeaderKey::RequestId), Some("req-1"));
    }

    #[test]
    fn test_merge_keeps_defaults_without_overrides() {
        let merged = RequestHeaders::defaults().merged_with(&RequestHeaders::new());
        assert_eq!(merged, RequestHeaders::defaults());
    }

    #[test]
    fn test_to_header_map() {
        let map = RequestHeaders::defaults()
            .with(HeaderKey::IdempotencyKey, "key-123")
            .to_header_map()
            .unwrap();

        assert_eq!(map.get("content-type").unwrap(), "application/json");
        assert_eq!(map.get("idempotency-key").unwrap(), "key-123");
    }

    #[test]
    fn test_to_header_map_rejects_invalid_values() {
        let result = RequestHeaders::new()
            .with(HeaderKey::RequestId, "line\nbreak")
            .to_header_map();

        assert!(matches!(result, Err(RequestError::InvalidHeader("X-Request-Id"))));
    }

    #[test]
    fn test_debug_redacts_authorization() {
        let headers =
            RequestHeaders::defaults().with_bearer_token(&SecretString::from("tok_live_abc123"));

        let debug_output = format!("{headers:?}");
        assert!(debug_output.contains("application/json"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("tok_live_abc123"));
        assert_eq!(
            headers.get(HeaderKey::Authorization),
            Some("Bearer tok_live_abc123")
        );
    }
}
