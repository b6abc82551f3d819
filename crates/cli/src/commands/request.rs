//! Verb-scoped request commands.
//!
//! # Usage
//!
//! ```bash
//! sk-cli get /products/42
//! sk-cli put /carts/abc --data '{"currency":"EUR"}'
//! ```

use serde_json::Value;
use storekit_client::{
    ApiClient, ApiConfig, ApiError, ApiResponse, ClientError, HttpMethod, RequestHeaders,
};
use thiserror::Error;

/// Errors that can occur while running a request command.
#[derive(Debug, Error)]
pub enum RequestCommandError {
    /// `--data` is not valid JSON.
    #[error("Invalid JSON in --data: {0}")]
    InvalidData(#[source] serde_json::Error),

    /// HTTP client construction failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The response envelope could not be printed.
    #[error("Failed to render response: {0}")]
    Render(#[source] serde_json::Error),

    /// The API call resolved to a failure envelope.
    #[error("Request failed: {0}")]
    Failed(ApiError),
}

/// Issue one request and print the response envelope to stdout.
///
/// # Errors
///
/// Returns an error if `data` is not JSON, the client cannot be built, or the
/// call resolves to a failure (the envelope is printed first).
pub async fn run(
    config: &ApiConfig,
    method: HttpMethod,
    path: &str,
    data: Option<&str>,
) -> Result<(), RequestCommandError> {
    let body = parse_body(data)?;
    let client = ApiClient::from_config(config)?;

    tracing::info!(%method, base_url = client.base_url(), path, "Sending request");

    let response: ApiResponse<Value> = client
        .request(method, path, body.as_ref(), &RequestHeaders::new())
        .await;

    print_envelope(&response)?;

    response
        .into_result()
        .map(|_| ())
        .map_err(RequestCommandError::Failed)
}

fn parse_body(data: Option<&str>) -> Result<Option<Value>, RequestCommandError> {
    data.map(serde_json::from_str)
        .transpose()
        .map_err(RequestCommandError::InvalidData)
}

#[allow(clippy::print_stdout)]
fn print_envelope(response: &ApiResponse<Value>) -> Result<(), RequestCommandError> {
    let rendered = serde_json::to_string_pretty(response).map_err(RequestCommandError::Render)?;
    println!("{rendered}");
    Ok(())
}
