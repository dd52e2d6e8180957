//! Session-level retrieval configuration.
//!
//! The viewer shell historically carried three independent booleans
//! (`localModeUsed`, `zipModeUsed`, `singleModeUsed`) and let the resolver
//! fall through them at call time. Here the combination is collapsed into
//! one [`LoadingMode`] when the session is created, so a contradictory or
//! empty flag set is rejected up front instead of surfacing mid-call.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::services::store::FileStore;
use crate::types::errors::{ResolveError, ResolveResult};

/// How the current viewer session receives its report files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadingMode {
    /// Individual files served by the local file server under `/files/`.
    LocalDirect,
    /// A result bundle served by the local file server as `/results.zip`,
    /// fetched and unpacked on demand.
    LocalArchive,
    /// A bundle uploaded by the user and already unpacked into the store.
    RemoteArchive,
    /// One inline report stands in for every requested file.
    Single,
}

impl LoadingMode {
    /// Derive the mode from the legacy flag triple.
    ///
    /// Precedence matches the old fall-through: `local` + `zip` beats
    /// `local` alone, which beats `zip` alone; `single` is only honored
    /// when neither of the others is set.
    pub fn from_flags(local: bool, zip: bool, single: bool) -> ResolveResult<Self> {
        match (local, zip, single) {
            (true, true, _) => Ok(Self::LocalArchive),
            (true, false, _) => Ok(Self::LocalDirect),
            (false, true, _) => Ok(Self::RemoteArchive),
            (false, false, true) => Ok(Self::Single),
            (false, false, false) => Err(ResolveError::Configuration),
        }
    }
}

/// Everything the resolver needs from the surrounding session.
///
/// Owned by the viewer shell and shared with the resolver by reference.
/// The resolver only ever writes to [`store`](Self::store), and only
/// through the archive extractor.
#[derive(Debug)]
pub struct SessionContext {
    pub mode: LoadingMode,
    /// Unpacked report files. Behind a mutex because an upload handler
    /// may populate it while the viewer is already issuing lookups.
    pub store: Mutex<FileStore>,
    /// The inline payload served in [`LoadingMode::Single`].
    pub single_raw_content: String,
}

impl SessionContext {
    pub fn new(mode: LoadingMode) -> Self {
        Self {
            mode,
            store: Mutex::new(FileStore::new()),
            single_raw_content: String::new(),
        }
    }

    /// Build a session from the legacy flag triple, validating it.
    pub fn from_flags(local: bool, zip: bool, single: bool) -> ResolveResult<Self> {
        Ok(Self::new(LoadingMode::from_flags(local, zip, single)?))
    }

    /// Session serving one inline report for every requested path.
    pub fn single(raw_content: impl Into<String>) -> Self {
        Self {
            mode: LoadingMode::Single,
            store: Mutex::new(FileStore::new()),
            single_raw_content: raw_content.into(),
        }
    }

    /// Run `f` against the shared store, tolerating a poisoned lock.
    pub fn with_store<T>(&self, f: impl FnOnce(&mut FileStore) -> T) -> T {
        let mut store = self
            .store
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut store)
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod session_tests;
