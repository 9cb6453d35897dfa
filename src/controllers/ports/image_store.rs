use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// One persisted render, as reported by the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredImage {
    pub filename: String,
    pub size_bytes: u64,
    pub created: DateTime<Utc>,
}

/// Owns the output location of rendered images. The geometry core never
/// touches this; only the controller does.
pub trait ImageStorePort {
    /// Allocates a fresh, collision-free path for a render with the given
    /// name stem, creating the backing location if needed.
    fn next_path(&self, stem: &str, extension: &str) -> std::io::Result<PathBuf>;

    /// Stored images, newest first.
    fn list(&self) -> std::io::Result<Vec<StoredImage>>;

    /// Deletes every stored image, returning how many were removed.
    fn clear(&self) -> std::io::Result<usize>;
}
