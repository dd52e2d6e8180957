//! In-memory store of unpacked report files.
//!
//! Keys are archive entry paths exactly as they appear in the bundle, so a
//! report nested under a wrapper folder (`results/overview.json`) is still
//! reachable by its bare name. Insertion order is extraction order and
//! drives the suffix scan in [`FileStore::find`].

use indexmap::IndexMap;

use crate::types::errors::{ResolveError, ResolveResult};

/// Where store lookups report misses from, user-facing.
const STORE_SOURCE: &str = "zip file";

/// Mapping of archive entry path to file content, in extraction order.
///
/// A `None` content marks an entry the extractor registered but could not
/// read; looking it up fails with [`ResolveError::Load`] instead of
/// pretending the file does not exist.
#[derive(Debug, Default)]
pub struct FileStore {
    files: IndexMap<String, Option<String>>,
}

impl FileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file under its archive entry path. Re-inserting a path
    /// replaces the content but keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, content: Option<String>) {
        self.files.insert(name.into(), content);
    }

    /// Drop all entries, e.g. before re-populating from a fresh upload.
    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Entry paths in extraction order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Look up `path` by suffix match: the first entry (in extraction
    /// order) whose path ends with `path` wins.
    ///
    /// When several entries share the suffix the earliest inserted one is
    /// returned; which file that is depends entirely on the order the
    /// bundle was packed in. Request a longer path to disambiguate.
    pub fn find(&self, path: &str) -> ResolveResult<String> {
        let matched = self.files.iter().find(|(name, _)| name.ends_with(path));

        match matched {
            None => {
                log::warn!("No entry ending with '{path}' among {} files", self.len());
                Err(ResolveError::not_found(path, STORE_SOURCE))
            }
            Some((name, Some(content))) => {
                log::debug!("'{path}' resolved to entry '{name}'");
                Ok(content.clone())
            }
            Some((name, None)) => {
                log::warn!("Entry '{name}' matched '{path}' but has no content");
                Err(ResolveError::Load(path.to_string()))
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod store_tests;
