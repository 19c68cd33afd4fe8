use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SyncError>;

/// Everything that can abort a sync run.
///
/// An empty search result is not an error; the resolver returns `Ok(None)`.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("can't build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status}: {url}")]
    HttpStatus { status: StatusCode, url: String },

    #[error("unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("can't write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("can't serialize films: {0}")]
    Serialize(#[from] serde_json::Error),
}
