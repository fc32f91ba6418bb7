//! Report Store collaborator: persists completed analyses under short slugs.
//!
//! The engine stays pure; anything that wants durability goes through the
//! [`ReportStore`] trait so storage lifecycle never leaks into evaluation.

#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use readygate_types::{Report, ReportDraft};
use thiserror::Error;

mod json_file;

pub use json_file::JsonFileStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read report store at {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report store at {path}")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file exists but is not valid JSON. Surfaced instead of
    /// silently starting over, which would drop every stored report.
    #[error("report store at {path} is corrupt")]
    Corrupt {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Persistence seam for completed analyses.
///
/// `save` assigns the slug and creation timestamp; `get` distinguishes an
/// unknown slug (`Ok(None)`) from an I/O failure (`Err`), so callers can
/// render "not found" rather than "invalid request".
pub trait ReportStore {
    fn save(&self, draft: ReportDraft) -> Result<String, StoreError>;
    fn get(&self, slug: &str) -> Result<Option<Report>, StoreError>;
}
