use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, SyncError};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Plain GET client that waits a fixed delay before every request.
///
/// The delay is the only politeness measure: no retries, no back-off,
/// no caching. One request per call.
pub struct Fetcher {
    client: Client,
    delay: Duration,
}

impl Fetcher {
    pub fn new(delay: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(SyncError::Client)?;

        Ok(Self { client, delay })
    }

    pub async fn fetch(&self, url: &str) -> Result<Response> {
        tokio::time::sleep(self.delay).await;
        debug!("GET {}", url);

        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| SyncError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = res.status();
        if !status.is_success() {
            return Err(SyncError::HttpStatus {
                status,
                url: url.to_string(),
            });
        }

        Ok(res)
    }

    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        self.fetch(url)
            .await?
            .text()
            .await
            .map_err(|source| SyncError::Transport {
                url: url.to_string(),
                source,
            })
    }

    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url).await?.bytes().await.map_err(|source| {
            SyncError::Transport {
                url: url.to_string(),
                source,
            }
        })?;

        serde_json::from_slice(&body).map_err(|source| SyncError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
