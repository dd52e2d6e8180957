//! Retrieval primitive for the local file server.
//!
//! The resolver only ever issues GETs for origin-relative paths, so the
//! seam is a one-method trait; tests swap in a scripted fake instead of
//! standing up a server.

use std::time::Duration;

use async_trait::async_trait;
use log::info;

use crate::types::errors::{ResolveError, ResolveResult};

/// Request timeout for the local file server.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A fetched response: status code plus raw body bytes.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    status: u16,
    body: Vec<u8>,
}

impl FetchResponse {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Success is status 200 exactly, not the 2xx range.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Decode the body as text.
    pub fn text(&self) -> String {
        decode_text(&self.body)
    }
}

/// Issues a single GET for an origin-relative path like `/files/x.json`.
#[async_trait]
pub trait FileFetcher: Send + Sync {
    async fn fetch(&self, path: &str) -> ResolveResult<FetchResponse>;
}

/// Production fetcher backed by reqwest against a fixed origin.
pub struct HttpFetcher {
    client: reqwest::Client,
    origin: String,
}

impl HttpFetcher {
    /// `origin` is scheme + host (+ port), e.g. `http://localhost:8080`.
    pub fn new(origin: impl Into<String>) -> ResolveResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ResolveError::Request(e.to_string()))?;

        Ok(Self {
            client,
            origin: origin.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl FileFetcher for HttpFetcher {
    async fn fetch(&self, path: &str) -> ResolveResult<FetchResponse> {
        let url = format!("{}/{}", self.origin, path.trim_start_matches('/'));
        info!("Fetching {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ResolveError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ResolveError::Request(e.to_string()))?;

        Ok(FetchResponse::new(status, body.to_vec()))
    }
}

/// Decode report bytes as text: strict UTF-8 first, replacement decode
/// for the occasional stray byte in hand-edited reports.
pub(crate) fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            let (cow, _encoding, _had_errors) = encoding_rs::UTF_8.decode(bytes);
            cow.into_owned()
        }
    }
}

#[cfg(test)]
#[path = "tests/fetch_tests.rs"]
mod fetch_tests;
