//! Unpacking of result bundles into the file store.
//!
//! Bundles are small enough to hold in memory, so extraction reads the
//! whole blob through a cursor and never touches disk. Entry paths are
//! kept verbatim as store keys; the suffix lookup relies on that.

use std::io::{Cursor, Read};

use log::{info, warn};

use crate::services::fetch::decode_text;
use crate::services::store::FileStore;
use crate::types::errors::{ResolveError, ResolveResult};

/// Populates a [`FileStore`] from an archive blob.
///
/// Completes synchronously: when `extract` returns, every entry of the
/// blob has been registered in the store.
pub trait ArchiveExtractor: Send + Sync {
    /// Returns the number of file entries registered.
    fn extract(&self, data: &[u8], store: &mut FileStore) -> ResolveResult<usize>;
}

/// ZIP-backed extractor.
#[derive(Debug, Default)]
pub struct ZipExtractor;

impl ArchiveExtractor for ZipExtractor {
    fn extract(&self, data: &[u8], store: &mut FileStore) -> ResolveResult<usize> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data))
            .map_err(|e| ResolveError::Archive(e.to_string()))?;

        let mut count: usize = 0;
        for i in 0..archive.len() {
            let mut entry = archive
                .by_index(i)
                .map_err(|e| ResolveError::Archive(format!("Failed to read entry {i}: {e}")))?;

            if entry.is_dir() {
                continue;
            }

            let name = entry.name().to_string();
            let mut bytes = Vec::new();
            match entry.read_to_end(&mut bytes) {
                Ok(_) => store.insert(name, Some(decode_text(&bytes))),
                Err(e) => {
                    // Register the entry anyway so a later lookup reports
                    // "could not load" rather than "not found".
                    warn!("Failed to read '{name}': {e}");
                    store.insert(name, None);
                }
            }
            count += 1;
        }

        info!("Unpacked {count} files from bundle");
        Ok(count)
    }
}

#[cfg(test)]
#[path = "tests/archive_tests.rs"]
mod archive_tests;
