//! File resolution core for the report viewer.
//!
//! A viewer session receives its report files in one of three ways: served
//! one by one from a local file server, bundled into a single ZIP that is
//! unpacked into memory, or as one inline payload standing in for every
//! file. [`FileResolver::get_file`] picks the retrieval strategy from the
//! session's [`LoadingMode`] and maps every failure to a precise
//! [`ResolveError`].

pub mod services;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use services::archive::{ArchiveExtractor, ZipExtractor};
pub use services::fetch::{FetchResponse, FileFetcher, HttpFetcher};
pub use services::resolver::FileResolver;
pub use services::session::{LoadingMode, SessionContext};
pub use services::store::FileStore;
pub use types::errors::{ResolveError, ResolveResult};
