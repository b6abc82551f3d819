//! Typed REST client for the platform backend.
//!
//! # Architecture
//!
//! - [`create_api_client`] binds a base URL and returns an [`ApiClient`]
//! - `get` / `post` / `put` / `delete` all funnel into one request routine
//! - Every outcome is normalized into an [`ApiResponse`]: transport errors,
//!   non-2xx statuses and unparseable bodies become `Failure`, never `Err`
//! - No retries, caching or request deduplication
//!
//! # Example
//!
//! ```rust,ignore
//! use storekit_client::create_api_client;
//! use storekit_core::{ApiResponse, Product};
//!
//! let client = create_api_client("http://localhost:3001")?;
//!
//! match client.get::<Product>("/products/42").await {
//!     ApiResponse::Success(product) => println!("{}", product.name),
//!     ApiResponse::Failure(error) => eprintln!("{}", error.message),
//! }
//! ```

mod client;
pub mod error;
mod headers;

pub use client::{ApiClient, HttpMethod, create_api_client};
pub use error::{ClientError, RequestError};
pub use headers::{HeaderKey, JSON_CONTENT_TYPE, RequestHeaders};
