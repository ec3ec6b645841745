/// Error types for reading the catalog export.
///
/// The classifier, escaping and list-building operations are total and never produce
/// these; only the loader touches the filesystem and parses JSON. Binary crates wrap
/// `CatalogError` via `#[from]`.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid catalog root: {0}")]
    InvalidRoot(String),
}
