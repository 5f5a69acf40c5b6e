//! Error types for r2c modules using thiserror.

use thiserror::Error;

/// Errors from HTTP fetching.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("GET {url} failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url} returned HTTP {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read response body from {url}: {source}")]
    ReadBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Errors from the release store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to deserialize tag list: {0}")]
    Deserialize(#[source] serde_json::Error),

    #[error("Failed to serialize releases: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Errors from writing the merged output file.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to serialize releases: {0}")]
    Serialize(#[from] StoreError),

    #[error("Failed to write output file: {0}")]
    WriteFailed(#[source] std::io::Error),
}
