//! Remote and local text retrieval
//!
//! Everything network-shaped lives here, outside the rewrite engine. The
//! engine only ever sees plain strings; a failed asset fetch is reported and
//! the run proceeds with whatever content it already has.

use std::fs;
use std::path::Path;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;
use url::Url;

/// Failure to obtain an asset's text
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, timeout, body read)
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// Reachable, but answered outside the 2xx range
    #[error("{url} answered {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    /// Local file could not be read (`--local` mode)
    #[error("failed to read {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Syntactic URL check; liveness is probed separately.
pub fn is_valid_url(raw: &str) -> bool {
    Url::parse(raw).map(|url| url.has_host()).unwrap_or(false)
}

/// Blocking fetcher for page assets
pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Fetcher {
    /// Build a fetcher with the configured timeout and user agent.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent.to_string())
            .build()?;
        Ok(Self { client })
    }

    /// HEAD probe; true iff the URL answers 200.
    pub fn is_live(&self, url: &str) -> bool {
        self.client
            .head(url)
            .send()
            .map(|response| response.status() == reqwest::StatusCode::OK)
            .unwrap_or(false)
    }

    /// GET the asset and return its body text.
    pub fn text(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "fetching");
        let response = self.client.get(url).send().map_err(|source| {
            FetchError::Request {
                url: url.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })
    }

    /// Read a local file instead of the network (`--local` mode).
    pub fn local_text(path: &Path) -> Result<String, FetchError> {
        debug!(path = %path.display(), "reading local file");
        fs::read_to_string(path).map_err(|source| FetchError::File {
            path: path.display().to_string(),
            source,
        })
    }
}
