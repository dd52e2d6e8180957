//! Mode-dispatching resolution of report file content.

use std::sync::Arc;

use log::warn;
use serde::de::DeserializeOwned;

use crate::services::archive::{ArchiveExtractor, ZipExtractor};
use crate::services::fetch::{FetchResponse, FileFetcher, HttpFetcher};
use crate::services::session::{LoadingMode, SessionContext};
use crate::types::errors::{ResolveError, ResolveResult};

/// Fixed origin-relative location of the bundled result archive.
const RESULTS_ARCHIVE_PATH: &str = "/results.zip";
/// Root under which the local file server exposes individual files.
const FILES_ROOT: &str = "/files";
/// User-facing name of the local file server in error messages.
const LOCAL_SOURCE: &str = "local files";

/// Resolves the raw text of a named report file for the active session.
///
/// Stateless across calls: each `get_file` re-reads the session and runs
/// exactly one retrieval strategy. Collaborators are injected so tests can
/// substitute deterministic fakes for the network and the unpacker.
pub struct FileResolver {
    fetcher: Arc<dyn FileFetcher>,
    extractor: Arc<dyn ArchiveExtractor>,
}

impl FileResolver {
    pub fn new(fetcher: Arc<dyn FileFetcher>, extractor: Arc<dyn ArchiveExtractor>) -> Self {
        Self { fetcher, extractor }
    }

    /// Production wiring: HTTP against `origin`, ZIP unpacking.
    pub fn with_origin(origin: impl Into<String>) -> ResolveResult<Self> {
        Ok(Self::new(
            Arc::new(HttpFetcher::new(origin)?),
            Arc::new(ZipExtractor),
        ))
    }

    /// Resolve the content of the report file named `path`.
    ///
    /// Exactly one strategy runs, chosen by the session's loading mode:
    /// - `LocalArchive`: fetch `/results.zip`, unpack it into the session
    ///   store, then look `path` up there. The archive is re-fetched and
    ///   re-unpacked on every call in this mode; nothing is cached.
    /// - `LocalDirect`: fetch `/files/{path}` and return its text.
    /// - `RemoteArchive`: look `path` up in the already-populated store.
    /// - `Single`: return the session's inline payload, whatever `path` is.
    pub async fn get_file(&self, session: &SessionContext, path: &str) -> ResolveResult<String> {
        match session.mode {
            LoadingMode::LocalArchive => {
                let response = self.fetch_ok(RESULTS_ARCHIVE_PATH).await?;
                session.with_store(|store| {
                    self.extractor.extract(response.body(), store)?;
                    store.find(path)
                })
            }
            LoadingMode::LocalDirect => {
                let request_path = format!("{FILES_ROOT}/{path}");
                let response = self.fetch_ok(&request_path).await?;
                Ok(response.text())
            }
            LoadingMode::RemoteArchive => session.with_store(|store| store.find(path)),
            LoadingMode::Single => Ok(session.single_raw_content.clone()),
        }
    }

    /// Resolve `path` and parse it as JSON into `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        session: &SessionContext,
        path: &str,
    ) -> ResolveResult<T> {
        let raw = self.get_file(session, path).await?;
        serde_json::from_str(&raw).map_err(|e| ResolveError::Parse {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    /// Fetch an origin-relative path, requiring status 200.
    async fn fetch_ok(&self, request_path: &str) -> ResolveResult<FetchResponse> {
        let response = self.fetcher.fetch(request_path).await?;

        if response.is_ok() {
            Ok(response)
        } else {
            warn!("Fetch of {request_path} returned HTTP {}", response.status());
            Err(ResolveError::not_found(request_path, LOCAL_SOURCE))
        }
    }
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod resolver_tests;
