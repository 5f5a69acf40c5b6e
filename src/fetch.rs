//! HTTP retrieval of upstream resources.

use reqwest::Client;
use tracing::debug;

use crate::error::FetchError;

/// User agent sent with every request. The GitHub API rejects requests
/// that carry none.
const USER_AGENT: &str = concat!("r2c/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client used for all fetches.
pub fn build_client() -> Result<Client, FetchError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(FetchError::ClientBuild)
}

/// Fetch a URL and return the full response body as text.
///
/// Any transport error or non-2xx status is an error. Callers treat
/// these as fatal: the tool is a one-shot batch run with no retry.
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::RequestFailed {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| FetchError::ReadBody {
            url: url.to_string(),
            source,
        })?;

    debug!(url, bytes = body.len(), "Fetched resource");

    Ok(body)
}
