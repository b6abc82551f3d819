//! Storefront Kit Client - typed access to the platform REST API.
//!
//! # Modules
//!
//! - [`api`] - The bound [`ApiClient`] and its verb-scoped operations
//! - [`config`] - Application configuration from the environment
//!
//! Payload types and the [`ApiResponse`] envelope come from `storekit-core`
//! and are re-exported here for convenience.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;

pub use api::{
    ApiClient, ClientError, HeaderKey, HttpMethod, RequestError, RequestHeaders,
    create_api_client,
};
pub use config::{ApiConfig, AppConfig, AppInfo, ConfigError};
pub use storekit_core::{ApiError, ApiResponse};
