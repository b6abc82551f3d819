//! Shared shapes used across entities and API calls.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::status::SortOrder;

/// SEO metadata attached to catalog entities.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Open Graph image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
}

/// Page request for list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// 1-indexed page number.
    pub page: u32,
    /// Maximum items per page.
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            sort_by: None,
            sort_order: None,
        }
    }
}

/// Pagination block returned alongside a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

/// One page of results from a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

impl<T> PaginatedResponse<T> {
    /// Whether this page carries no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Inclusive price bounds for catalog filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    /// Whether `price` falls within the range, bounds included.
    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Catalog filters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Category slugs or IDs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

/// Free-text search with pagination and filters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(flatten)]
    pub pagination: PaginationParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterOptions>,
}

/// Structured error carried by a failed API call.
///
/// `message` is always human readable. `code` is a machine-readable
/// identifier and `field` names the offending input, when known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiError {
    /// Create an error with only a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            field: None,
        }
    }

    /// Attach a machine-readable code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach the name of the offending input field.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_search_params_flatten_pagination() {
        let params = SearchParams {
            pagination: PaginationParams {
                page: 2,
                limit: 10,
                sort_by: Some("price".to_string()),
                sort_order: Some(SortOrder::Desc),
            },
            query: Some("shirt".to_string()),
            filters: Some(FilterOptions {
                in_stock: Some(true),
                ..FilterOptions::default()
            }),
        };

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({
                "page": 2,
                "limit": 10,
                "sortBy": "price",
                "sortOrder": "desc",
                "query": "shirt",
                "filters": { "inStock": true }
            })
        );
    }

    #[test]
    fn test_paginated_response_from_wire() {
        let page: PaginatedResponse<String> = serde_json::from_value(json!({
            "data": ["a", "b"],
            "pagination": {
                "page": 1,
                "limit": 2,
                "total": 5,
                "totalPages": 3,
                "hasNext": true,
                "hasPrev": false
            }
        }))
        .unwrap();

        assert_eq!(page.data, vec!["a", "b"]);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(page.pagination.has_next);
        assert!(!page.is_empty());
    }

    #[test]
    fn test_price_range_contains_bounds() {
        let range = PriceRange {
            min: Decimal::from(10),
            max: Decimal::from(20),
        };
        assert!(range.contains(Decimal::from(10)));
        assert!(range.contains(Decimal::from_str("19.99").unwrap()));
        assert!(!range.contains(Decimal::from_str("20.01").unwrap()));
    }

    #[test]
    fn test_api_error_omits_absent_fields() {
        let err = ApiError::new("Not found").with_code("HTTP_404");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value, json!({ "message": "Not found", "code": "HTTP_404" }));
        assert_eq!(err.to_string(), "Not found");
    }
}
