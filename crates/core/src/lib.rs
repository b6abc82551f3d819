//! Storefront Kit Core - Shared types library.
//!
//! This crate provides the pieces every Storefront Kit component shares:
//! - the domain model exchanged with the backend API (users, products,
//!   orders, carts, query parameters)
//! - the [`ApiResponse`] result envelope returned by the API client
//! - pure formatting and validation helpers
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O and no
//! HTTP client. The client lives in `storekit-client`.
//!
//! # Modules
//!
//! - [`types`] - Entities, status enums, IDs and the structured [`ApiError`]
//! - [`response`] - The success/failure envelope
//! - [`format`] - Price, date and slug formatting
//! - [`validation`] - Email, phone, URL and required-field predicates

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod format;
pub mod response;
pub mod types;
pub mod validation;

pub use format::{FormatError, format_date, format_date_with, format_price, format_price_in, slugify};
pub use response::ApiResponse;
pub use types::*;
pub use validation::{Required, is_valid_email, is_valid_phone, is_valid_url, validate_required};
