use serde::Serialize;
use std::fmt;

/// Failure raised while resolving a report file.
#[derive(Debug)]
pub enum ResolveError {
    /// No loading mode could be derived from the session flags.
    Configuration,
    /// The file does not exist where the active mode expects it:
    /// a non-200 response, or no archive entry matching the path.
    NotFound { path: String, source: String },
    /// An archive entry matching the path exists but its content is absent.
    Load(String),
    /// The fetched text is not valid JSON for the requested type.
    Parse { path: String, reason: String },
    /// The archive blob is not a readable ZIP.
    Archive(String),
    /// The request failed before producing a status code.
    Request(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Configuration => write!(f, "No loading type specified"),
            ResolveError::NotFound { path, source } => {
                write!(f, "Could not find {path} in {source}")
            }
            ResolveError::Load(arg) => write!(f, "Could not load {arg}"),
            ResolveError::Parse { path, reason } => {
                write!(f, "Could not parse {path}: {reason}")
            }
            ResolveError::Archive(arg) => write!(f, "Invalid or corrupt archive: {arg}"),
            ResolveError::Request(arg) => write!(f, "Request failed: {arg}"),
        }
    }
}

impl std::error::Error for ResolveError {}

impl ResolveError {
    pub fn not_found(path: impl Into<String>, source: impl Into<String>) -> Self {
        ResolveError::NotFound {
            path: path.into(),
            source: source.into(),
        }
    }
}

impl Serialize for ResolveError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type ResolveResult<T> = Result<T, ResolveError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod errors_tests;
