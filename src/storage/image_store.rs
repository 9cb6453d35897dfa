use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use crate::controllers::ports::image_store::{ImageStorePort, StoredImage};

/// Filesystem-backed store for rendered images.
///
/// Owns one output directory. Files are named `{stem}_{timestamp}.{ext}`
/// with millisecond resolution, so repeated runs never collide.
pub struct FsImageStore {
    directory: PathBuf,
}

impl FsImageStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn is_image(path: &Path) -> bool {
        matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("png" | "ppm")
        )
    }
}

impl ImageStorePort for FsImageStore {
    fn next_path(&self, stem: &str, extension: &str) -> std::io::Result<PathBuf> {
        fs::create_dir_all(&self.directory)?;
        let timestamp = Utc::now().format("%Y%m%d_%H%M%S%3f");

        Ok(self
            .directory
            .join(format!("{}_{}.{}", stem, timestamp, extension)))
    }

    fn list(&self) -> std::io::Result<Vec<StoredImage>> {
        if !self.directory.exists() {
            return Ok(Vec::new());
        }

        let mut images = Vec::new();
        for entry in fs::read_dir(&self.directory)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() || !Self::is_image(&path) {
                continue;
            }

            let metadata = entry.metadata()?;
            let created = metadata
                .created()
                .or_else(|_| metadata.modified())
                .map(DateTime::<Utc>::from)
                .unwrap_or_else(|_| Utc::now());

            images.push(StoredImage {
                filename: entry.file_name().to_string_lossy().into_owned(),
                size_bytes: metadata.len(),
                created,
            });
        }

        // Timestamped names sort chronologically, so reverse lexicographic
        // order is newest first.
        images.sort_by(|a, b| b.filename.cmp(&a.filename));
        Ok(images)
    }

    fn clear(&self) -> std::io::Result<usize> {
        if !self.directory.exists() {
            return Ok(0);
        }

        let mut removed = 0;
        for entry in fs::read_dir(&self.directory)? {
            let path = entry?.path();
            if path.is_file() && Self::is_image(&path) {
                fs::remove_file(&path)?;
                removed += 1;
            }
        }

        tracing::info!(removed, directory = %self.directory.display(), "cleared stored images");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_path_creates_the_directory_and_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("images");
        let store = FsImageStore::new(&nested);

        let path = store.next_path("koch_complete_4iter_2scale", "png").unwrap();

        assert!(nested.is_dir());
        assert_eq!(path.parent(), Some(nested.as_path()));

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("koch_complete_4iter_2scale_"));
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn test_list_reports_only_images() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsImageStore::new(dir.path());

        fs::write(dir.path().join("a.png"), [1, 2, 3]).unwrap();
        fs::write(dir.path().join("b.ppm"), [1, 2, 3, 4]).unwrap();
        fs::write(dir.path().join("notes.txt"), "not an image").unwrap();

        let images = store.list().unwrap();

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].filename, "b.ppm");
        assert_eq!(images[0].size_bytes, 4);
        assert_eq!(images[1].filename, "a.png");
        assert_eq!(images[1].size_bytes, 3);
    }

    #[test]
    fn test_list_on_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsImageStore::new(dir.path().join("never_created"));

        assert_eq!(store.list().unwrap(), Vec::new());
    }

    #[test]
    fn test_clear_removes_images_and_keeps_everything_else() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsImageStore::new(dir.path());

        fs::write(dir.path().join("a.png"), [0]).unwrap();
        fs::write(dir.path().join("b.png"), [0]).unwrap();
        fs::write(dir.path().join("notes.txt"), "kept").unwrap();

        let removed = store.clear().unwrap();

        assert_eq!(removed, 2);
        assert!(store.list().unwrap().is_empty());
        assert!(dir.path().join("notes.txt").exists());
    }

    #[test]
    fn test_clear_on_missing_directory_removes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsImageStore::new(dir.path().join("never_created"));

        assert_eq!(store.clear().unwrap(), 0);
    }
}
