//! Errors raised by the write side of a [`crate::KeyValueStore`].

/// A failed write or removal against a storage backend.
///
/// Reads never produce this: a backend that cannot be read behaves as if the
/// key were absent.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
    /// The browser refused the operation (storage disabled, quota exceeded, ...).
    #[error("browser storage error: {0}")]
    Browser(String),
}
